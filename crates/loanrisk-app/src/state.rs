//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::form::FormState;
use loanrisk_core::{AppPhase, RiskAssessment};

/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Predict Risk";

/// Submit control label while a request is outstanding
pub const SUBMITTING_LABEL: &str = "Analyzing...";

/// A received assessment plus what the client knows about it
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub assessment: RiskAssessment,
    /// Non-blocking note from client-side checks
    pub advisory: Option<String>,
    pub received_at: DateTime<Local>,
}

impl PredictionOutcome {
    pub fn new(assessment: RiskAssessment, advisory: Option<String>) -> Self {
        Self {
            assessment,
            advisory,
            received_at: Local::now(),
        }
    }
}

/// Which panel is visible. Exactly one is shown at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// The input form (initial state)
    #[default]
    Form,
    /// The result card for the last successful prediction
    Result(PredictionOutcome),
}

impl ViewState {
    pub fn is_form(&self) -> bool {
        matches!(self, ViewState::Form)
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        match self {
            ViewState::Result(outcome) => Some(outcome),
            ViewState::Form => None,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Visible panel
    pub view: ViewState,

    /// Raw field contents
    pub form: FormState,

    /// A prediction request is outstanding; the submit control is disabled
    pub submitting: bool,

    /// Spinner animation frame, advanced on tick while submitting
    pub spinner_frame: usize,

    /// Message in the error region; `None` hides the region
    pub error: Option<String>,

    /// Advisory for the outstanding submission, moved into its outcome
    pub pending_advisory: Option<String>,

    /// Configuration settings
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            view: ViewState::Form,
            form: FormState::new(),
            submitting: false,
            spinner_frame: 0,
            error: None,
            pending_advisory: None,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Current label of the submit control
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Whether the submit control accepts input
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.view.is_form()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn hide_error(&mut self) {
        self.error = None;
    }

    /// Mark a request as outstanding
    pub fn begin_submission(&mut self, advisory: Option<String>) {
        self.submitting = true;
        self.spinner_frame = 0;
        self.pending_advisory = advisory;
    }

    /// Restore the submit control; runs on every completion path
    pub fn finish_submission(&mut self) {
        self.submitting = false;
        self.spinner_frame = 0;
    }

    /// Swap to the result card
    pub fn show_result(&mut self, assessment: RiskAssessment) {
        let advisory = self.pending_advisory.take();
        self.view = ViewState::Result(PredictionOutcome::new(assessment, advisory));
    }

    /// Back to an empty form
    pub fn reset(&mut self) {
        self.view = ViewState::Form;
        self.form.clear();
        self.error = None;
        self.pending_advisory = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment() -> RiskAssessment {
        RiskAssessment {
            default_probability: 12.5,
            risk_category: "Low".into(),
            color: "#2ecc71".into(),
            message: "Good standing".into(),
        }
    }

    #[test]
    fn test_initial_state_shows_form() {
        let state = AppState::new();
        assert!(state.view.is_form());
        assert!(!state.submitting);
        assert_eq!(state.error, None);
        assert_eq!(state.submit_label(), "Predict Risk");
        assert!(state.can_submit());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_submission_toggles_label() {
        let mut state = AppState::new();
        state.begin_submission(None);
        assert_eq!(state.submit_label(), "Analyzing...");
        assert!(!state.can_submit());

        state.finish_submission();
        assert_eq!(state.submit_label(), "Predict Risk");
        assert!(state.can_submit());
    }

    #[test]
    fn test_show_result_moves_advisory() {
        let mut state = AppState::new();
        state.begin_submission(Some("big loan".into()));
        state.finish_submission();
        state.show_result(assessment());

        let outcome = state.view.outcome().unwrap();
        assert_eq!(outcome.advisory.as_deref(), Some("big loan"));
        assert_eq!(state.pending_advisory, None);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_reset_returns_to_blank_form() {
        let mut state = AppState::new();
        state.form.monthly_income = "5000".into();
        state.show_result(assessment());

        state.reset();

        assert!(state.view.is_form());
        assert!(state.form.is_blank());
    }
}
