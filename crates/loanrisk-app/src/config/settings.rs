//! Settings parser for .loanrisk/config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use loanrisk_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR: &str = ".loanrisk";

const USER_CONFIG_DIR: &str = "loan-risk";

/// Locate the settings file for a working directory.
///
/// `<dir>/.loanrisk/config.toml` wins over the user-wide
/// `<config dir>/loan-risk/config.toml`.
pub fn find_settings_file(dir: &Path) -> Option<PathBuf> {
    let local = dir.join(CONFIG_DIR).join(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|base| base.join(USER_CONFIG_DIR).join(CONFIG_FILENAME))
        .filter(|path| path.exists())
}

/// Load settings for a working directory, falling back to defaults.
///
/// A missing file is normal; an unreadable or invalid one is logged and
/// replaced by defaults so the form still opens.
pub fn load_settings(dir: &Path) -> Settings {
    let Some(config_path) = find_settings_file(dir) else {
        debug!("No config file for {:?}, using defaults", dir);
        return Settings::default();
    };

    match load_settings_from(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path.
///
/// Unlike [`load_settings`], every failure is an error: the caller asked
/// for this file by name.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", path.display(), e)))?;
    settings.validate()?;

    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Create a default config file in `<dir>/.loanrisk/`.
///
/// Returns the path of the config file. An existing file is left untouched.
pub fn init_config_dir(dir: &Path) -> Result<PathBuf> {
    let config_dir = dir.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create {} dir: {}", CONFIG_DIR, e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Loan Risk Configuration

[server]
base_url = "http://localhost:8000"   # Requests are sent to <base_url>/predict

[validation]
# Attach an advisory note when the loan exceeds this multiple of monthly
# income. Never blocks a submission. Unset by default.
# loan_income_advisory_multiple = 60

[ui]
show_key_hints = true
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", CONFIG_FILENAME, e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}
