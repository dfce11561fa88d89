//! Loan Risk Library
//!
//! Terminal client for a loan default risk prediction service. The
//! interactive form lives in `loanrisk-tui`; this crate wires configuration,
//! logging and the prediction client together for the `loanrisk` binary.

pub mod headless;
pub mod startup;

// Re-export main entry points
pub use headless::{run_predict, PredictRequest};
pub use startup::{init_runtime, resolve_settings, run};
