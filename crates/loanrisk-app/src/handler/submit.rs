//! Submission and completion handlers

use loanrisk_core::prelude::*;
use loanrisk_core::RiskAssessment;

use crate::state::AppState;
use crate::submission;

use super::{UpdateAction, UpdateResult};

/// Handle a submit request from the form
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.can_submit() {
        debug!("Submit ignored: request already outstanding or form hidden");
        return UpdateResult::none();
    }

    state.hide_error();

    let input = state.form.to_input();
    match submission::prepare(input, &state.settings.validation) {
        Ok(prepared) => {
            info!("Submitting application for prediction");
            state.begin_submission(prepared.advisory);
            UpdateResult::action(UpdateAction::SubmitPrediction {
                input: prepared.input,
            })
        }
        Err(e) => {
            state.show_error(e.user_message());
            UpdateResult::none()
        }
    }
}

/// Handle a successful prediction
pub fn handle_prediction_received(state: &mut AppState, assessment: RiskAssessment) -> UpdateResult {
    if !state.submitting {
        warn!("Discarding prediction with no outstanding request");
        return UpdateResult::none();
    }

    state.finish_submission();
    info!(
        "Prediction received: {} ({})",
        assessment.risk_category,
        assessment.score_text()
    );
    state.show_result(assessment);
    UpdateResult::none()
}

/// Handle a failed prediction; the form stays visible
pub fn handle_prediction_failed(state: &mut AppState, error: String) -> UpdateResult {
    if !state.submitting {
        warn!("Discarding prediction failure with no outstanding request: {}", error);
        return UpdateResult::none();
    }

    state.finish_submission();
    state.pending_advisory = None;
    state.show_error(error);
    UpdateResult::none()
}
