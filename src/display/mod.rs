//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and budget reports for the
//! terminal.

pub mod expense;
pub mod report;

pub use expense::format_expense_table;
pub use report::{format_all_months, format_month_status};
