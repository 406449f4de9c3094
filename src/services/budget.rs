//! Budget service
//!
//! Validates and stores monthly budgets, recording each change in the audit
//! log.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Month};
use crate::services::expense::validate_amount;
use crate::storage::Storage;

/// Parse a `YYYY-MM` month key entered by the user
pub fn validate_month(input: &str) -> LedgerResult<Month> {
    Month::parse(input).map_err(|_| LedgerError::InvalidMonth(input.trim().to_string()))
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// The budget currently set for a month
    pub fn current_budget(&self, month: Month) -> Option<Money> {
        self.storage.budgets.get(month)
    }

    /// Set the budget for a month, returning the budget it replaced
    pub fn set_budget(&mut self, month: Month, amount: Money) -> LedgerResult<Option<Money>> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }

        // a failed audit write leaves the budget untouched
        let previous = self.storage.budgets.get(month);
        self.storage.log_budget_set(month, previous, amount)?;
        self.storage.budgets.set(month, amount);

        Ok(previous)
    }

    /// Validate raw month and amount strings, then set the budget
    pub fn set_budget_from_input(
        &mut self,
        month: &str,
        amount: &str,
    ) -> LedgerResult<(Month, Option<Money>)> {
        let month = validate_month(month)?;
        let amount = validate_amount(amount)?;
        let previous = self.set_budget(month, amount)?;
        Ok((month, previous))
    }
}
