//! Monthly budget repository
//!
//! Budgets live in memory only and are gone when the process exits.

use std::collections::BTreeMap;

use crate::models::{Money, Month};

/// Repository of per-month budgets
#[derive(Debug, Default)]
pub struct BudgetRepository {
    data: BTreeMap<Month, Money>,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget for a month, returning the budget it replaced
    pub fn set(&mut self, month: Month, amount: Money) -> Option<Money> {
        self.data.insert(month, amount)
    }

    /// Get the budget for a month
    pub fn get(&self, month: Month) -> Option<Money> {
        self.data.get(&month).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
