//! Prediction service trait
//!
//! The TUI and the headless `predict` command both submit through this trait,
//! so tests can swap in a scripted predictor.

use loanrisk_core::prelude::*;
use loanrisk_core::{ApplicationInput, RiskAssessment};

/// Risk prediction for one application
#[trait_variant::make(Predictor: Send)]
pub trait LocalPredictor {
    /// Submit the application and wait for the backend's assessment.
    ///
    /// Errors are [`Error::Request`] for non-2xx responses, transport
    /// failures, and undecodable bodies.
    async fn predict(&self, input: &ApplicationInput) -> Result<RiskAssessment>;
}
