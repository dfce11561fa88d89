//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use loanrisk_core::RiskAssessment;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C, Esc on the form, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Editing Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrev,
    /// Type a character into the focused field
    InputChar(char),
    /// Delete the last character of the focused field
    InputBackspace,
    /// Clear the focused field
    ClearField,
    /// Next option of the focused select
    SelectNext,
    /// Previous option of the focused select
    SelectPrev,

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Validate the form and send it for prediction
    Submit,
    /// The backend answered with an assessment
    PredictionReceived { assessment: RiskAssessment },
    /// The request failed; `error` is the user-facing text
    PredictionFailed { error: String },

    /// Back to an empty form from the result card
    Reset,
}
