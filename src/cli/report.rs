//! CLI command for the monthly budget report

use crate::config::settings::Settings;
use crate::display::{format_all_months, format_month_status};
use crate::error::LedgerResult;
use crate::reports::{all_months_status, budget_status};
use crate::services::{validate_amount, validate_month};
use crate::storage::Storage;

/// Handle `ledger report`
///
/// Budgets are not persisted, so `budget` only applies to this invocation.
pub fn handle_report_command(
    storage: &mut Storage,
    settings: &Settings,
    month: Option<String>,
    budget: Option<String>,
) -> LedgerResult<()> {
    let symbol = &settings.currency_symbol;

    match month {
        Some(month) => {
            let month = validate_month(&month)?;
            if let Some(budget) = budget {
                storage.budgets.set(month, validate_amount(&budget)?);
            }
            print!("{}", format_month_status(&budget_status(storage, month), symbol));
        }
        None => {
            if budget.is_some() {
                println!("Note: --budget needs a MONTH and was ignored.");
            }
            print!("{}", format_all_months(&all_months_status(storage), symbol));
        }
    }

    Ok(())
}
