//! Service layer for the expense ledger
//!
//! The service layer validates raw input on top of the storage layer and
//! records every mutation in the audit log.

pub mod budget;
pub mod expense;

pub use budget::{validate_month, BudgetService};
pub use expense::{
    validate_amount, validate_category, validate_date, CreateExpenseInput, ExpenseService,
};
