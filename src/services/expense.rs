//! Expense service
//!
//! Turns raw user input into a validated expense and appends it to the
//! ledger.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense, Money};
use crate::reports::total_spent;
use crate::storage::Storage;

/// Raw input for a new expense, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

/// A valid `YYYY-MM-DD` calendar date
pub fn validate_date(input: &str) -> LedgerResult<NaiveDate> {
    Expense::parse_date(input).ok_or_else(|| LedgerError::InvalidDate(input.trim().to_string()))
}

pub fn validate_category(input: &str) -> LedgerResult<Category> {
    input
        .parse()
        .map_err(|_| LedgerError::InvalidCategory(input.trim().to_string()))
}

/// A non-negative amount
pub fn validate_amount(input: &str) -> LedgerResult<Money> {
    match Money::parse(input) {
        Ok(amount) if !amount.is_negative() => Ok(amount),
        _ => Err(LedgerError::InvalidAmount(input.trim().to_string())),
    }
}

/// Service for recording expenses
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Validate input and append the expense
    ///
    /// Fields are checked in entry order (date, category, amount). On any
    /// error, including a failed audit write, the ledger is left unchanged.
    pub fn add(&mut self, input: CreateExpenseInput) -> LedgerResult<Expense> {
        let date = validate_date(&input.date)?;
        let category = validate_category(&input.category)?;
        let amount = validate_amount(&input.amount)?;

        // every monthly sum stays within the ledger total
        if total_spent(self.storage.expenses.get_all())
            .checked_add(amount)
            .is_none()
        {
            return Err(LedgerError::AmountTooLarge(input.amount.trim().to_string()));
        }

        let expense = Expense::new(date, category, amount, input.description.trim());
        self.storage
            .log_expense_added(self.storage.expenses.len(), &expense)?;
        self.storage.expenses.append(expense.clone());

        Ok(expense)
    }
}
