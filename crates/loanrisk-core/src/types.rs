//! Domain types shared by the client, the app state, and the TUI

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Home ownership status, the form's single select field.
///
/// The variants are the option list the prediction backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HomeOwnership {
    #[default]
    Rent,
    Mortgage,
    Own,
}

impl HomeOwnership {
    /// All options in display order; the first one is the default.
    pub const ALL: [HomeOwnership; 3] = [
        HomeOwnership::Rent,
        HomeOwnership::Mortgage,
        HomeOwnership::Own,
    ];

    /// Wire value sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeOwnership::Rent => "RENT",
            HomeOwnership::Mortgage => "MORTGAGE",
            HomeOwnership::Own => "OWN",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            HomeOwnership::Rent => "Rent",
            HomeOwnership::Mortgage => "Mortgage",
            HomeOwnership::Own => "Own",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            HomeOwnership::Rent => 0,
            HomeOwnership::Mortgage => 1,
            HomeOwnership::Own => 2,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Next option, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for HomeOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeOwnership {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RENT" => Ok(HomeOwnership::Rent),
            "MORTGAGE" => Ok(HomeOwnership::Mortgage),
            "OWN" => Ok(HomeOwnership::Own),
            _ => Err(Error::InvalidHomeOwnership {
                value: s.to_string(),
            }),
        }
    }
}

/// One applicant's declared financial data, sent as the request payload.
///
/// Numbers come from lenient form parsing: an unreadable float is NaN and an
/// unreadable integer is `None`; both go over the wire as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationInput {
    pub monthly_income: f64,
    pub monthly_debt_payments: f64,
    pub loan_amount: f64,
    pub missed_installments: Option<i64>,
    pub credit_card_balance: f64,
    pub total_open_accounts: Option<i64>,
    pub home_ownership: HomeOwnership,
}

impl ApplicationInput {
    /// Whether declared debt payments exceed declared income.
    ///
    /// NaN on either side compares false, so unreadable values pass.
    pub fn debt_exceeds_income(&self) -> bool {
        self.monthly_debt_payments > self.monthly_income
    }

    /// Whether the loan is more than `multiple` times the monthly income.
    pub fn loan_exceeds_income_multiple(&self, multiple: f64) -> bool {
        self.loan_amount > self.monthly_income * multiple
    }
}

/// Risk assessment returned by the prediction backend.
///
/// The shape belongs to the backend; the four fields are taken as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Default likelihood, already scaled to a percentage
    pub default_probability: f64,
    pub risk_category: String,
    /// CSS colour value for the score and category
    pub color: String,
    pub message: String,
}

impl RiskAssessment {
    /// Score as displayed, e.g. `"12.5%"`
    pub fn score_text(&self) -> String {
        format!("{}%", self.default_probability)
    }
}
