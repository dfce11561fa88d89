//! Configuration types

use loanrisk_client::DEFAULT_BASE_URL;
use loanrisk_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Application settings (.loanrisk/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Reject values that cannot be acted on
    pub fn validate(&self) -> Result<()> {
        if self.server.base_url.trim().is_empty() {
            return Err(Error::config_invalid("server.base_url must not be empty"));
        }

        if let Some(multiple) = self.validation.loan_income_advisory_multiple {
            if !multiple.is_finite() || multiple <= 0.0 {
                return Err(Error::config_invalid(format!(
                    "validation.loan_income_advisory_multiple must be a positive number, got {}",
                    multiple
                )));
            }
        }

        Ok(())
    }
}

/// Prediction backend settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL; requests go to `<base_url>/predict`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Client-side checks beyond debt vs income
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ValidationSettings {
    /// Loan amount, as a multiple of monthly income, above which an advisory
    /// note is attached to the result. Never blocks a submission. Unset by
    /// default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_income_advisory_multiple: Option<f64>,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
