//! Startup sequence shared by the interactive and headless modes

use std::path::Path;
use std::sync::Arc;

use loanrisk_app::config::{load_settings, load_settings_from, Settings};
use loanrisk_client::HttpPredictor;
use loanrisk_core::prelude::*;

/// Install error reporting and file logging
pub fn init_runtime() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI owns stdout
    loanrisk_core::logging::init()
}

/// Resolve the settings for this run.
///
/// An explicit `config` path must load; otherwise the working directory and
/// user config are searched with defaults as the fallback. `endpoint`
/// replaces `server.base_url`.
pub fn resolve_settings(
    dir: &Path,
    config: Option<&Path>,
    endpoint: Option<&str>,
) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => load_settings_from(path)?,
        None => load_settings(dir),
    };

    if let Some(endpoint) = endpoint {
        info!("Backend URL from command line: {}", endpoint);
        settings.server.base_url = endpoint.to_string();
    }

    settings.validate()?;
    Ok(settings)
}

/// Run the interactive form against the configured backend
pub async fn run(settings: Settings) -> Result<()> {
    let predictor = Arc::new(HttpPredictor::new(&settings.server.base_url)?);
    info!("Predictions are posted to {}", predictor.endpoint());

    let result = loanrisk_tui::run(settings, predictor).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Loan Risk exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let temp = tempdir().unwrap();

        let settings = resolve_settings(temp.path(), None, None).unwrap();

        assert_eq!(settings.server.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_endpoint_overrides_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://10.0.0.5:9000\"\n").unwrap();

        let from_file = resolve_settings(temp.path(), Some(&path), None).unwrap();
        assert_eq!(from_file.server.base_url, "http://10.0.0.5:9000");

        let overridden =
            resolve_settings(temp.path(), Some(&path), Some("http://127.0.0.1:8001")).unwrap();
        assert_eq!(overridden.server.base_url, "http://127.0.0.1:8001");
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing.toml");

        let err = resolve_settings(temp.path(), Some(&missing), None).unwrap_err();

        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let temp = tempdir().unwrap();

        let err = resolve_settings(temp.path(), None, Some("")).unwrap_err();

        assert!(err.is_fatal());
    }
}
