//! Core data models for the expense ledger
//!
//! Expenses, their fixed categories, month keys, and the money type they
//! are measured in.

pub mod category;
pub mod expense;
pub mod money;
pub mod month;

pub use category::Category;
pub use expense::Expense;
pub use money::Money;
pub use month::Month;
