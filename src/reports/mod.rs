//! Reporting
//!
//! Aggregates the ledger into per-month totals and budget comparisons.

pub mod monthly;

pub use monthly::{
    all_months_status, budget_status, extract_month, months_with_expenses, total_for_month,
    total_spent, BudgetOutcome, MonthlyStatus,
};
