//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each view
//! - `submit`: Submission and completion handlers

pub(crate) mod keys;
pub(crate) mod submit;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use loanrisk_core::ApplicationInput;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Send a validated application to the prediction backend.
    ///
    /// Exactly one `PredictionReceived` or `PredictionFailed` message
    /// follows.
    SubmitPrediction { input: ApplicationInput },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
