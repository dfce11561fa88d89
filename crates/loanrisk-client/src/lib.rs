//! # loanrisk-client - Prediction Backend Client
//!
//! Sends an applicant's [`ApplicationInput`](loanrisk_core::ApplicationInput)
//! to the prediction backend and decodes the returned
//! [`RiskAssessment`](loanrisk_core::RiskAssessment).
//!
//! Depends on [`loanrisk_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`Predictor`] / [`LocalPredictor`] - Async prediction service trait
//! - [`HttpPredictor`] - `reqwest` implementation posting JSON to `/predict`
//! - [`endpoint_for()`] - Resolve the `/predict` URL from a base URL
//! - [`DEFAULT_BASE_URL`] - Backend address used when nothing is configured

pub mod http;
pub mod predictor;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use http::{endpoint_for, HttpPredictor, DEFAULT_BASE_URL, PREDICT_PATH};
pub use predictor::{LocalPredictor, Predictor};
