//! Command structs for engine operations.
//!
//! Dates stay raw strings here: the engine owns their parsing, so a bad date
//! surfaces as [`EngineError::InvalidDate`](crate::EngineError::InvalidDate)
//! no matter which front end sent it.

use serde_json::Number;

/// Create an expense.
#[derive(Clone, Debug)]
pub struct ExpenseCmd {
    pub amount: Number,
    pub date: String,
    pub category: String,
    pub description: String,
    pub repeat_monthly: bool,
}

/// Merge-update an expense. `None` fields are left as stored.
#[derive(Clone, Debug, Default)]
pub struct ExpenseUpdateCmd {
    pub date: String,
    pub amount: Option<Number>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub repeat_monthly: Option<bool>,
}

impl ExpenseUpdateCmd {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn amount(mut self, amount: impl Into<Number>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn repeat_monthly(mut self, repeat_monthly: bool) -> Self {
        self.repeat_monthly = Some(repeat_monthly);
        self
    }
}

/// Create an income.
#[derive(Clone, Debug)]
pub struct IncomeCmd {
    pub source: String,
    pub amount: Number,
    pub description: String,
    pub date: String,
    pub wallet_id: String,
}

/// Merge-update an income. `None` fields are left as stored.
#[derive(Clone, Debug, Default)]
pub struct IncomeUpdateCmd {
    pub date: String,
    pub source: Option<String>,
    pub amount: Option<Number>,
    pub description: Option<String>,
    pub wallet_id: Option<String>,
}

impl IncomeUpdateCmd {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: impl Into<Number>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn wallet_id(mut self, wallet_id: impl Into<String>) -> Self {
        self.wallet_id = Some(wallet_id.into());
        self
    }
}
