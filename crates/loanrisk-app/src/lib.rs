//! loanrisk-app - Application state and orchestration for Loan Risk
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the loan
//! application form: the model ([`AppState`]), messages, the `update`
//! function, and the actions that run prediction requests in the background.
//! It also owns configuration loading and OS signal handling.

pub mod actions;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod submission;

// Re-export primary types
pub use form::{FieldId, FieldKind, FormState};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, PredictionOutcome, ViewState};
pub use submission::Submission;
