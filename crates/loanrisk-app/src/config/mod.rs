//! Configuration file parsing for Loan Risk
//!
//! Supports:
//! - `.loanrisk/config.toml` - Per-directory settings
//! - `<config dir>/loan-risk/config.toml` - User-wide fallback

pub mod settings;
pub mod types;

pub use settings::{
    find_settings_file, init_config_dir, load_settings, load_settings_from, CONFIG_DIR,
    CONFIG_FILENAME,
};
pub use types::*;
