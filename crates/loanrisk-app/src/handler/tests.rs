//! Tests for handler module

use super::*;
use crate::config::{Settings, ValidationSettings};
use crate::form::FieldId;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, ViewState};
use loanrisk_core::{AppPhase, HomeOwnership, RiskAssessment};

fn low_risk() -> RiskAssessment {
    RiskAssessment {
        default_probability: 12.5,
        risk_category: "Low".to_string(),
        color: "#2ecc71".to_string(),
        message: "Good standing".to_string(),
    }
}

/// State with every field filled with acceptable values
fn filled_state() -> AppState {
    let mut state = AppState::new();
    state.form.set_value(FieldId::MonthlyIncome, "5000");
    state.form.set_value(FieldId::MonthlyDebtPayments, "1200");
    state.form.set_value(FieldId::LoanAmount, "20000");
    state.form.set_value(FieldId::MissedInstallments, "1");
    state.form.set_value(FieldId::CreditCardBalance, "800.50");
    state.form.set_value(FieldId::TotalOpenAccounts, "3");
    state.form.home_ownership = HomeOwnership::Mortgage;
    state
}

/// Run a message and any follow-up messages, collecting actions
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        drive(state, Message::Key(InputKey::Char(c)));
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_any_view() {
    let mut state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));

    state.view = ViewState::Result(crate::state::PredictionOutcome::new(low_risk(), None));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_escape_on_form_quits() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────
// Form editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_edits_focused_field() {
    let mut state = AppState::new();

    type_text(&mut state, "4500");
    drive(&mut state, Message::Key(InputKey::Backspace));

    assert_eq!(state.form.monthly_income, "450");
}

#[test]
fn test_tab_and_arrows_move_focus() {
    let mut state = AppState::new();

    drive(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.form.focused, FieldId::MonthlyDebtPayments);

    drive(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.form.focused, FieldId::LoanAmount);

    drive(&mut state, Message::Key(InputKey::BackTab));
    drive(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.form.focused, FieldId::MonthlyIncome);
}

#[test]
fn test_ctrl_u_clears_focused_field() {
    let mut state = filled_state();

    drive(&mut state, Message::Key(InputKey::CharCtrl('u')));

    assert_eq!(state.form.monthly_income, "");
    assert_eq!(state.form.monthly_debt_payments, "1200");
}

#[test]
fn test_select_cycles_with_arrows_and_space() {
    let mut state = AppState::new();
    state.form.focused = FieldId::HomeOwnership;

    drive(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.form.home_ownership, HomeOwnership::Mortgage);

    drive(&mut state, Message::Key(InputKey::Char(' ')));
    assert_eq!(state.form.home_ownership, HomeOwnership::Own);

    drive(&mut state, Message::Key(InputKey::Left));
    assert_eq!(state.form.home_ownership, HomeOwnership::Mortgage);
}

#[test]
fn test_arrows_on_text_field_do_not_change_select() {
    let mut state = AppState::new();

    drive(&mut state, Message::Key(InputKey::Right));

    assert_eq!(state.form.home_ownership, HomeOwnership::Rent);
}

// ─────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────

#[test]
fn test_debt_above_income_blocks_request() {
    let mut state = AppState::new();
    state.form.set_value(FieldId::MonthlyIncome, "3000");
    state.form.set_value(FieldId::MonthlyDebtPayments, "3500");

    let actions = drive(&mut state, Message::Key(InputKey::Enter));

    assert!(actions.is_empty());
    assert!(!state.submitting);
    assert_eq!(
        state.error.as_deref(),
        Some("Your monthly debt payments cannot exceed your income.")
    );
    assert!(state.view.is_form());
}

#[test]
fn test_valid_submission_emits_one_action_with_parsed_payload() {
    let mut state = filled_state();

    let actions = drive(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(actions.len(), 1);
    let UpdateAction::SubmitPrediction { input } = &actions[0];
    assert_eq!(input.monthly_income, 5000.0);
    assert_eq!(input.monthly_debt_payments, 1200.0);
    assert_eq!(input.loan_amount, 20000.0);
    assert_eq!(input.missed_installments, Some(1));
    assert_eq!(input.credit_card_balance, 800.5);
    assert_eq!(input.total_open_accounts, Some(3));
    assert_eq!(input.home_ownership, HomeOwnership::Mortgage);
}

#[test]
fn test_submit_hides_previous_error() {
    let mut state = filled_state();
    state.show_error("old failure");

    drive(&mut state, Message::Submit);

    assert_eq!(state.error, None);
}

#[test]
fn test_submit_disables_control_until_completion() {
    let mut state = filled_state();

    drive(&mut state, Message::Submit);
    assert!(state.submitting);
    assert_eq!(state.submit_label(), "Analyzing...");

    update(
        &mut state,
        Message::PredictionReceived {
            assessment: low_risk(),
        },
    );
    assert!(!state.submitting);
    assert_eq!(state.submit_label(), "Predict Risk");
}

#[test]
fn test_submit_while_outstanding_is_noop() {
    let mut state = filled_state();

    let first = drive(&mut state, Message::Submit);
    let second = drive(&mut state, Message::Submit);

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert!(state.submitting);
}

#[test]
fn test_success_shows_result_and_hides_form() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);

    update(
        &mut state,
        Message::PredictionReceived {
            assessment: low_risk(),
        },
    );

    let outcome = state.view.outcome().expect("result view");
    assert_eq!(outcome.assessment.score_text(), "12.5%");
    assert_eq!(outcome.assessment.risk_category, "Low");
    assert!(!state.view.is_form());
}

#[test]
fn test_failure_shows_error_and_keeps_form() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);

    update(
        &mut state,
        Message::PredictionFailed {
            error: "Failed to get prediction. Ensure backend is running. Server Error: Internal Server Error"
                .to_string(),
        },
    );

    assert!(!state.submitting);
    assert!(state.view.is_form());
    assert!(state
        .error
        .as_deref()
        .unwrap()
        .contains("Failed to get prediction"));
    // Field values survive a failed request
    assert_eq!(state.form.monthly_income, "5000");
}

#[test]
fn test_completion_without_outstanding_request_is_ignored() {
    let mut state = AppState::new();

    update(
        &mut state,
        Message::PredictionReceived {
            assessment: low_risk(),
        },
    );
    update(
        &mut state,
        Message::PredictionFailed {
            error: "late".to_string(),
        },
    );

    assert!(state.view.is_form());
    assert_eq!(state.error, None);
}

#[test]
fn test_advisory_attached_to_outcome() {
    let settings = Settings {
        validation: ValidationSettings {
            loan_income_advisory_multiple: Some(2.0),
        },
        ..Default::default()
    };
    let mut state = AppState::with_settings(settings);
    state.form = filled_state().form;

    let actions = drive(&mut state, Message::Submit);
    assert_eq!(actions.len(), 1);

    update(
        &mut state,
        Message::PredictionReceived {
            assessment: low_risk(),
        },
    );

    let outcome = state.view.outcome().unwrap();
    assert!(outcome.advisory.as_deref().unwrap().contains("2x"));
}

#[test]
fn test_tick_advances_spinner_only_while_submitting() {
    let mut state = filled_state();

    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 0);

    drive(&mut state, Message::Submit);
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 2);
}

// ─────────────────────────────────────────────────────────
// Reset
// ─────────────────────────────────────────────────────────

#[test]
fn test_reset_after_success_restores_blank_form() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);
    update(
        &mut state,
        Message::PredictionReceived {
            assessment: low_risk(),
        },
    );

    drive(&mut state, Message::Key(InputKey::Char('r')));

    assert!(state.view.is_form());
    assert_eq!(state.view.outcome(), None);
    assert!(state.form.is_blank());
    assert_eq!(state.form.home_ownership, HomeOwnership::Rent);
}

#[test]
fn test_result_view_reset_keys() {
    let mut state = AppState::new();
    state.view = ViewState::Result(crate::state::PredictionOutcome::new(low_risk(), None));

    for key in [InputKey::Enter, InputKey::Esc, InputKey::Char('r')] {
        assert!(matches!(handle_key(&state, key), Some(Message::Reset)));
    }
    assert!(handle_key(&state, InputKey::Char('x')).is_none());
}

#[test]
fn test_reset_on_form_keeps_values() {
    let mut state = filled_state();

    update(&mut state, Message::Reset);

    assert_eq!(state.form.monthly_income, "5000");
}
