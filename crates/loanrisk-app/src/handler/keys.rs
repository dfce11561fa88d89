//! Key event handlers for each view

use crate::form::FieldId;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, ViewState};

/// Convert key events to messages based on the visible view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.view {
        ViewState::Form => handle_key_form(state, key),
        ViewState::Result(_) => handle_key_result(key),
    }
}

/// Handle key events while the form is visible
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let on_select = state.form.focused == FieldId::HomeOwnership;

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('u') => Some(Message::ClearField),
        InputKey::Esc => Some(Message::Quit),

        // Navigation
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),

        InputKey::Enter => Some(Message::Submit),

        // Select field
        InputKey::Right | InputKey::Char(' ') if on_select => Some(Message::SelectNext),
        InputKey::Left if on_select => Some(Message::SelectPrev),

        // Text editing
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Char(c) => Some(Message::InputChar(c)),

        _ => None,
    }
}

/// Handle key events while the result card is visible
fn handle_key_result(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Enter | InputKey::Esc | InputKey::Char('r' | 'R') => Some(Message::Reset),
        _ => None,
    }
}
