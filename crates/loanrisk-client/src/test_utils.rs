//! Test utilities for prediction clients
//!
//! Provides a scripted [`Predictor`] that records every submitted input and
//! answers with a canned result.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use loanrisk_core::prelude::*;
use loanrisk_core::{ApplicationInput, RiskAssessment};

use crate::predictor::Predictor;

/// Canned answer for [`ScriptedPredictor`]
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Success(RiskAssessment),
    Failure(String),
    /// Panic inside `predict`, to exercise task supervision
    Panic,
}

/// Predictor returning a fixed response and recording its inputs
#[derive(Debug, Clone)]
pub struct ScriptedPredictor {
    response: ScriptedResponse,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<ApplicationInput>>>,
}

impl ScriptedPredictor {
    pub fn succeeding(assessment: RiskAssessment) -> Self {
        Self::new(ScriptedResponse::Success(assessment))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(ScriptedResponse::Failure(message.into()))
    }

    pub fn panicking() -> Self {
        Self::new(ScriptedResponse::Panic)
    }

    fn new(response: ScriptedResponse) -> Self {
        Self {
            response,
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Wait this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Inputs received so far, in order
    pub fn calls(&self) -> Vec<ApplicationInput> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Predictor for ScriptedPredictor {
    async fn predict(&self, input: &ApplicationInput) -> Result<RiskAssessment> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(input.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.response {
            ScriptedResponse::Success(assessment) => Ok(assessment.clone()),
            ScriptedResponse::Failure(message) => Err(Error::request(message.clone())),
            ScriptedResponse::Panic => panic!("scripted predictor panic"),
        }
    }
}

/// The low-risk assessment used throughout the test suites
pub fn low_risk_assessment() -> RiskAssessment {
    RiskAssessment {
        default_probability: 12.5,
        risk_category: "Low".to_string(),
        color: "#2ecc71".to_string(),
        message: "Good standing".to_string(),
    }
}
