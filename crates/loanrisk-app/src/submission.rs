//! Client-side checks run before a prediction request is sent
//!
//! Shared by the TUI's submit handler and the headless `predict` command so
//! both reject and annotate submissions the same way.

use loanrisk_core::prelude::*;
use loanrisk_core::ApplicationInput;

use crate::config::ValidationSettings;

/// An application that passed validation and is ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub input: ApplicationInput,
    /// Non-blocking note attached to the eventual result
    pub advisory: Option<String>,
}

/// Validate an application.
///
/// Fails only when declared debt payments exceed declared income. The
/// optional loan-to-income check produces an advisory and never blocks.
pub fn prepare(input: ApplicationInput, validation: &ValidationSettings) -> Result<Submission> {
    if input.debt_exceeds_income() {
        debug!(
            "Rejected submission: debt {} > income {}",
            input.monthly_debt_payments, input.monthly_income
        );
        return Err(Error::debt_exceeds_income());
    }

    let advisory = validation
        .loan_income_advisory_multiple
        .filter(|multiple| input.loan_exceeds_income_multiple(*multiple))
        .map(|multiple| {
            warn!(
                "Loan amount {} exceeds {}x monthly income {}",
                input.loan_amount, multiple, input.monthly_income
            );
            format!(
                "Loan amount is more than {}x monthly income; expect a higher risk rating.",
                multiple
            )
        });

    Ok(Submission { input, advisory })
}
