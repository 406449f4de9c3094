//! Expense CLI commands
//!
//! `add` records one expense and saves the ledger immediately; `list` prints
//! every expense sorted by date.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_month_status};
use crate::error::LedgerResult;
use crate::reports::budget_status;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Arguments of `ledger add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Category (Food, Travel, Shopping, Utilities, Miscellaneous)
    #[arg(short, long)]
    pub category: String,

    /// Amount (e.g., "250" or "250.00")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// Free-text description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
}

/// Handle `ledger add`
pub fn handle_add_command(
    storage: &mut Storage,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let symbol = &settings.currency_symbol;

    let expense = ExpenseService::new(storage).add(CreateExpenseInput {
        date: args.date,
        category: args.category,
        amount: args.amount,
        description: args.description,
    })?;
    storage.save_all()?;

    println!(
        "Expense of {} added under {}.",
        expense.amount.format_with_symbol(symbol),
        expense.category
    );
    println!();
    print!(
        "{}",
        format_month_status(&budget_status(storage, expense.month()), symbol)
    );

    Ok(())
}

/// Handle `ledger list`
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    print!(
        "{}",
        format_expense_table(storage.expenses.sorted_by_date(), &settings.currency_symbol)
    );
    Ok(())
}
