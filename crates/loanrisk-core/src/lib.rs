//! # loanrisk-core - Core Domain Types
//!
//! Foundation crate for Loan Risk. Provides domain types, form input parsing,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ApplicationInput`] - The seven-field payload sent to the prediction backend
//! - [`HomeOwnership`] - Home ownership option list (`RENT`, `MORTGAGE`, `OWN`)
//! - [`RiskAssessment`] - The backend's risk assessment response
//! - [`AppPhase`] - Application lifecycle phase (Running, Quitting)
//!
//! ### Input Parsing (`parse`)
//! - [`parse_float()`] - Leading-prefix float parse, NaN when no number is present
//! - [`parse_int()`] - Leading-prefix integer parse, `None` when no digits are present
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use loanrisk_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod parse;
pub mod types;

/// Prelude for common imports used throughout all Loan Risk crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt, REQUEST_ERROR_PREFIX, VALIDATION_DEBT_EXCEEDS_INCOME};
pub use parse::{parse_float, parse_int};
pub use types::{AppPhase, ApplicationInput, HomeOwnership, RiskAssessment};
