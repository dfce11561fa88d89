//! Loan application form model
//!
//! Six free-text numeric fields plus the home ownership select. Values are
//! kept as the raw text the user typed and only parsed at submission time.

use loanrisk_core::{parse_float, parse_int, ApplicationInput, HomeOwnership};

/// Longest text accepted in a single field
pub const MAX_FIELD_LEN: usize = 24;

/// How a field's raw text is read at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Parsed with [`parse_float`]
    Decimal,
    /// Parsed with [`parse_int`]
    Integer,
    /// Fixed option list, cycled rather than typed
    Select,
}

/// Identifier for each form field, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldId {
    #[default]
    MonthlyIncome,
    MonthlyDebtPayments,
    LoanAmount,
    MissedInstallments,
    CreditCardBalance,
    TotalOpenAccounts,
    HomeOwnership,
}

impl FieldId {
    /// All fields in tab order
    pub const ALL: [FieldId; 7] = [
        FieldId::MonthlyIncome,
        FieldId::MonthlyDebtPayments,
        FieldId::LoanAmount,
        FieldId::MissedInstallments,
        FieldId::CreditCardBalance,
        FieldId::TotalOpenAccounts,
        FieldId::HomeOwnership,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::MonthlyIncome => "Monthly Income",
            FieldId::MonthlyDebtPayments => "Monthly Debt Payments",
            FieldId::LoanAmount => "Loan Amount",
            FieldId::MissedInstallments => "Missed Installments (2 yrs)",
            FieldId::CreditCardBalance => "Credit Card Balance",
            FieldId::TotalOpenAccounts => "Total Open Accounts",
            FieldId::HomeOwnership => "Home Ownership",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::MonthlyIncome => "e.g. 5000",
            FieldId::MonthlyDebtPayments => "e.g. 1200",
            FieldId::LoanAmount => "e.g. 20000",
            FieldId::MissedInstallments => "e.g. 0",
            FieldId::CreditCardBalance => "e.g. 750",
            FieldId::TotalOpenAccounts => "e.g. 4",
            FieldId::HomeOwnership => "",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::MissedInstallments | FieldId::TotalOpenAccounts => FieldKind::Integer,
            FieldId::HomeOwnership => FieldKind::Select,
            _ => FieldKind::Decimal,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next field in tab order, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Raw form contents and focus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub monthly_income: String,
    pub monthly_debt_payments: String,
    pub loan_amount: String,
    pub missed_installments: String,
    pub credit_card_balance: String,
    pub total_open_accounts: String,
    pub home_ownership: HomeOwnership,

    /// Field receiving keyboard input
    pub focused: FieldId,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a text field; `None` for the select field
    pub fn value(&self, field: FieldId) -> Option<&str> {
        let value = match field {
            FieldId::MonthlyIncome => &self.monthly_income,
            FieldId::MonthlyDebtPayments => &self.monthly_debt_payments,
            FieldId::LoanAmount => &self.loan_amount,
            FieldId::MissedInstallments => &self.missed_installments,
            FieldId::CreditCardBalance => &self.credit_card_balance,
            FieldId::TotalOpenAccounts => &self.total_open_accounts,
            FieldId::HomeOwnership => return None,
        };
        Some(value.as_str())
    }

    fn value_mut(&mut self, field: FieldId) -> Option<&mut String> {
        let value = match field {
            FieldId::MonthlyIncome => &mut self.monthly_income,
            FieldId::MonthlyDebtPayments => &mut self.monthly_debt_payments,
            FieldId::LoanAmount => &mut self.loan_amount,
            FieldId::MissedInstallments => &mut self.missed_installments,
            FieldId::CreditCardBalance => &mut self.credit_card_balance,
            FieldId::TotalOpenAccounts => &mut self.total_open_accounts,
            FieldId::HomeOwnership => return None,
        };
        Some(value)
    }

    /// Set a text field's raw value. Ignored for the select field.
    pub fn set_value(&mut self, field: FieldId, text: impl Into<String>) {
        if let Some(value) = self.value_mut(field) {
            *value = text.into();
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Append a character to the focused text field.
    ///
    /// Control characters and input past [`MAX_FIELD_LEN`] are dropped.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let focused = self.focused;
        if let Some(value) = self.value_mut(focused) {
            if value.chars().count() < MAX_FIELD_LEN {
                value.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        let focused = self.focused;
        if let Some(value) = self.value_mut(focused) {
            value.pop();
        }
    }

    /// Clear the focused text field
    pub fn clear_focused(&mut self) {
        let focused = self.focused;
        if let Some(value) = self.value_mut(focused) {
            value.clear();
        }
    }

    /// Cycle the select field when it has focus
    pub fn cycle_select(&mut self, forward: bool) {
        if self.focused == FieldId::HomeOwnership {
            self.home_ownership = if forward {
                self.home_ownership.next()
            } else {
                self.home_ownership.prev()
            };
        }
    }

    /// Empty every text field, restore the select default, focus the first field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every text field is empty and the select is at its default
    pub fn is_blank(&self) -> bool {
        FieldId::ALL
            .iter()
            .filter_map(|f| self.value(*f))
            .all(str::is_empty)
            && self.home_ownership == HomeOwnership::default()
    }

    /// Read the current field values into a request payload
    pub fn to_input(&self) -> ApplicationInput {
        ApplicationInput {
            monthly_income: parse_float(&self.monthly_income),
            monthly_debt_payments: parse_float(&self.monthly_debt_payments),
            loan_amount: parse_float(&self.loan_amount),
            missed_installments: parse_int(&self.missed_installments),
            credit_card_balance: parse_float(&self.credit_card_balance),
            total_open_accounts: parse_int(&self.total_open_accounts),
            home_ownership: self.home_ownership,
        }
    }
}
