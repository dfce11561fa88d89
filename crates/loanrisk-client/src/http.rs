//! HTTP prediction client
//!
//! One `POST` per submission, JSON in and JSON out. No timeout or retry is
//! applied; a hung backend keeps the request outstanding until the transport
//! gives up.

use loanrisk_core::prelude::*;
use loanrisk_core::{ApplicationInput, RiskAssessment};
use url::Url;

use crate::predictor::Predictor;

/// Backend address used when neither config nor CLI provide one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the prediction route, relative to the base URL
pub const PREDICT_PATH: &str = "predict";

/// Resolve the prediction endpoint for a backend base URL.
///
/// The base is treated as a directory, so `http://host/api` resolves to
/// `http://host/api/predict` rather than replacing the last segment.
pub fn endpoint_for(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)
        .map_err(|e| Error::config_invalid(format!("invalid backend URL '{}': {}", base_url, e)))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(Error::config_invalid(format!(
            "backend URL must use http or https, got '{}'",
            base.scheme()
        )));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(PREDICT_PATH)
        .map_err(|e| Error::config_invalid(format!("invalid backend URL '{}': {}", base_url, e)))
}

/// [`Predictor`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPredictor {
    /// Create a predictor for the given backend base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoint = endpoint_for(base_url)?;
        Ok(Self::with_endpoint(endpoint))
    }

    /// Create a predictor posting to an already-resolved endpoint
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Predictor for HttpPredictor {
    async fn predict(&self, input: &ApplicationInput) -> Result<RiskAssessment> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(input)
            .send()
            .await
            .map_err(|e| Error::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Prediction backend returned {}", status);
            return Err(Error::request(format!(
                "Server Error: {}",
                status.canonical_reason().unwrap_or("Unknown Status")
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::request(e.to_string()))?;

        let assessment: RiskAssessment = serde_json::from_slice(&bytes)
            .map_err(|e| Error::request(format!("Invalid response body: {}", e)))?;

        info!(
            "Prediction received: {} ({})",
            assessment.risk_category,
            assessment.score_text()
        );
        Ok(assessment)
    }
}
