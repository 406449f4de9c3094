//! Monthly spend against budget
//!
//! Groups expenses by month key, totals them, and compares each total with
//! the budget set for that month.

use std::collections::BTreeSet;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Money, Month};
use crate::storage::Storage;

/// How a month's spend compares with its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetOutcome {
    /// No budget (or a zero budget) is set for the month
    NoBudget,
    /// Spend is at or below the budget
    Within { budget: Money, remaining: Money },
    /// Spend is above the budget
    Exceeded { budget: Money, over: Money },
}

/// Spend and budget outcome for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyStatus {
    pub month: Month,
    pub spent: Money,
    pub outcome: BudgetOutcome,
}

impl MonthlyStatus {
    /// Compare a month's spend with an optional budget
    pub fn evaluate(month: Month, spent: Money, budget: Option<Money>) -> Self {
        let outcome = match budget {
            None => BudgetOutcome::NoBudget,
            Some(budget) if budget.is_zero() => BudgetOutcome::NoBudget,
            Some(budget) if spent > budget => BudgetOutcome::Exceeded {
                budget,
                over: spent - budget,
            },
            Some(budget) => BudgetOutcome::Within {
                budget,
                remaining: budget - spent,
            },
        };

        Self {
            month,
            spent,
            outcome,
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` date and return its month key
pub fn extract_month(date: &str) -> LedgerResult<Month> {
    Expense::parse_date(date)
        .map(Month::from_date)
        .ok_or_else(|| LedgerError::InvalidDate(date.trim().to_string()))
}

/// Sum of all expenses dated within `month`
pub fn total_for_month(expenses: &[Expense], month: Month) -> Money {
    expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Sum of every expense
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Distinct months that have at least one expense, oldest first
pub fn months_with_expenses(expenses: &[Expense]) -> Vec<Month> {
    expenses
        .iter()
        .map(Expense::month)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Spend for `month` compared with its stored budget
pub fn budget_status(storage: &Storage, month: Month) -> MonthlyStatus {
    let spent = total_for_month(storage.expenses.get_all(), month);
    MonthlyStatus::evaluate(month, spent, storage.budgets.get(month))
}

/// Budget status for every month that has expenses, oldest first
pub fn all_months_status(storage: &Storage) -> Vec<MonthlyStatus> {
    months_with_expenses(storage.expenses.get_all())
        .into_iter()
        .map(|month| budget_status(storage, month))
        .collect()
}
