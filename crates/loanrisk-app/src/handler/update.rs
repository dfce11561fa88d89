//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use loanrisk_core::AppPhase;

use super::{keys::handle_key, submit, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.submitting {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Editing Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.form.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.form.focus_prev();
            UpdateResult::none()
        }

        Message::InputChar(c) => {
            state.form.insert_char(c);
            UpdateResult::none()
        }

        Message::InputBackspace => {
            state.form.backspace();
            UpdateResult::none()
        }

        Message::ClearField => {
            state.form.clear_focused();
            UpdateResult::none()
        }

        Message::SelectNext => {
            state.form.cycle_select(true);
            UpdateResult::none()
        }

        Message::SelectPrev => {
            state.form.cycle_select(false);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => submit::handle_submit(state),

        Message::PredictionReceived { assessment } => {
            submit::handle_prediction_received(state, assessment)
        }

        Message::PredictionFailed { error } => submit::handle_prediction_failed(state, error),

        Message::Reset => {
            if state.view.is_form() {
                return UpdateResult::none();
            }
            state.reset();
            UpdateResult::none()
        }
    }
}
