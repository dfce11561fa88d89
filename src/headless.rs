//! Headless mode - one prediction, JSON on stdout
//!
//! Runs a single application through the same parsing, validation and
//! client as the interactive form, for scripts and quick checks.
//!
//! # Example Output
//!
//! ```json
//! {"default_probability":12.5,"risk_category":"Low","color":"green","message":"Good standing"}
//! ```

use serde::Serialize;

use loanrisk_app::config::{Settings, ValidationSettings};
use loanrisk_app::{submission, FieldId, FormState};
use loanrisk_client::{HttpPredictor, Predictor};
use loanrisk_core::prelude::*;
use loanrisk_core::{ApplicationInput, HomeOwnership, RiskAssessment};

/// Field values as given on the command line
#[derive(Debug, Clone, Default)]
pub struct PredictRequest {
    pub monthly_income: String,
    pub monthly_debt_payments: String,
    pub loan_amount: String,
    pub missed_installments: String,
    pub credit_card_balance: String,
    pub total_open_accounts: String,
    pub home_ownership: HomeOwnership,
}

impl PredictRequest {
    /// Parse the values exactly as the form would
    pub fn to_input(&self) -> ApplicationInput {
        let mut form = FormState::new();
        form.set_value(FieldId::MonthlyIncome, &self.monthly_income);
        form.set_value(FieldId::MonthlyDebtPayments, &self.monthly_debt_payments);
        form.set_value(FieldId::LoanAmount, &self.loan_amount);
        form.set_value(FieldId::MissedInstallments, &self.missed_installments);
        form.set_value(FieldId::CreditCardBalance, &self.credit_card_balance);
        form.set_value(FieldId::TotalOpenAccounts, &self.total_open_accounts);
        form.home_ownership = self.home_ownership;
        form.to_input()
    }
}

/// JSON written to stdout on success
#[derive(Debug, Serialize)]
struct PredictOutput<'a> {
    #[serde(flatten)]
    assessment: &'a RiskAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisory: Option<&'a str>,
}

/// Validate and submit one application.
///
/// Returns the JSON line to print. Errors carry the same text the form
/// would show; use [`Error::user_message`].
pub async fn run_predict(settings: &Settings, request: PredictRequest) -> Result<String> {
    let predictor = HttpPredictor::new(&settings.server.base_url)?;
    predict_with(&predictor, request.to_input(), &settings.validation).await
}

/// Validate and submit one application through any [`Predictor`]
pub async fn predict_with<P: Predictor>(
    predictor: &P,
    input: ApplicationInput,
    validation: &ValidationSettings,
) -> Result<String> {
    let submission = submission::prepare(input, validation)?;

    info!("Submitting application (headless)");
    let assessment = predictor
        .predict(&submission.input)
        .await
        .context("Headless prediction failed")?;

    let output = PredictOutput {
        assessment: &assessment,
        advisory: submission.advisory.as_deref(),
    };
    Ok(serde_json::to_string(&output)?)
}
