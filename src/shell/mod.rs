//! Interactive menu shell
//!
//! A numbered five-option menu read line by line. Input validation happens
//! here, right before a record or budget is handed to the service layer;
//! a rejected value prints a message and returns to the menu.

pub mod menu;

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_all_months, format_expense_table, format_month_status};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Month};
use crate::reports::{all_months_status, budget_status, extract_month};
use crate::services::{
    validate_amount, validate_category, validate_month, BudgetService, CreateExpenseInput,
    ExpenseService,
};
use crate::storage::Storage;

pub use menu::MenuChoice;

/// The interactive session over a storage, reading `input` and writing `output`
pub struct Shell<'a, R, W> {
    storage: &'a mut Storage,
    symbol: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a new shell
    pub fn new(storage: &'a mut Storage, settings: &Settings, input: R, output: W) -> Self {
        Self {
            storage,
            symbol: settings.currency_symbol.clone(),
            input,
            output,
        }
    }

    /// Load the ledger and run the menu until the user exits
    ///
    /// End of input behaves like choosing "Exit", so the ledger is still saved.
    /// If a command fails with anything other than rejected input, the ledger
    /// is saved before the error is returned. If the save on exit fails, that
    /// error is returned instead of the goodbye.
    pub fn run(&mut self) -> LedgerResult<()> {
        self.load()?;

        loop {
            self.print_menu()?;
            let choice = match self.prompt("Select an option (1-5): ")? {
                Some(line) => MenuChoice::parse(&line),
                None => Some(MenuChoice::Exit),
            };

            let outcome = match choice {
                Some(MenuChoice::AddExpense) => self.add_expense(),
                Some(MenuChoice::ViewExpenses) => self.view_expenses(),
                Some(MenuChoice::SetBudget) => self.set_budget(),
                Some(MenuChoice::Save) => self.save_and_report().map(|_| ()),
                Some(MenuChoice::Exit) => return self.exit(),
                None => writeln!(self.output, "Invalid choice. Please try again.")
                    .map_err(LedgerError::from),
            };

            if let Err(err) = outcome {
                if self.storage.save_all().is_ok() {
                    writeln!(self.output, "Expenses saved before stopping.")?;
                }
                return Err(err);
            }
        }
    }

    fn exit(&mut self) -> LedgerResult<()> {
        if let Some(err) = self.save_and_report()? {
            return Err(err);
        }
        writeln!(self.output, "Exiting. Stay financially fierce!")?;
        Ok(())
    }

    fn load(&mut self) -> LedgerResult<()> {
        let report = self.storage.load_all()?;

        if !report.file_found {
            writeln!(self.output, "No previous expense file found.")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "Expenses loaded from file ({} records).",
            report.loaded
        )?;
        if report.skipped > 0 {
            writeln!(
                self.output,
                "Warning: skipped {} unreadable row(s) in {}; they will be dropped on the next save.",
                report.skipped,
                self.storage.expenses.path().display()
            )?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Personal Expense Tracker Menu")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn add_expense(&mut self) -> LedgerResult<()> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let month = match extract_month(&date) {
            Ok(month) => month,
            Err(e) => return self.report_rejection(e),
        };

        writeln!(self.output)?;
        writeln!(self.output, "Available categories: {}", Category::list_names())?;
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(());
        };
        if let Err(e) = validate_category(&category) {
            return self.report_rejection(e);
        }

        let Some(amount) = self.prompt(&format!("Enter amount: {}", self.symbol))? else {
            return Ok(());
        };
        if let Err(e) = validate_amount(&amount) {
            return self.report_rejection(e);
        }

        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(());
        };

        let input = CreateExpenseInput {
            date,
            category,
            amount,
            description,
        };
        let expense = match ExpenseService::new(self.storage).add(input) {
            Ok(expense) => expense,
            Err(e) => return self.report_rejection(e),
        };

        writeln!(
            self.output,
            "Expense of {} added under {}.",
            expense.amount.format_with_symbol(&self.symbol),
            expense.category
        )?;
        self.print_month_status(month)
    }

    fn view_expenses(&mut self) -> LedgerResult<()> {
        let table = format_expense_table(self.storage.expenses.sorted_by_date(), &self.symbol);
        writeln!(self.output)?;
        write!(self.output, "{}", table)?;
        Ok(())
    }

    fn set_budget(&mut self) -> LedgerResult<()> {
        let Some(month) = self.prompt("Enter month for budget (YYYY-MM): ")? else {
            return Ok(());
        };
        let month = match validate_month(&month) {
            Ok(month) => month,
            Err(e) => return self.report_rejection(e),
        };

        let current = BudgetService::new(self.storage).current_budget(month);
        match current {
            Some(current) => writeln!(
                self.output,
                "Current budget for {}: {}",
                month,
                current.format_with_symbol(&self.symbol)
            )?,
            None => writeln!(self.output, "No budget set for {} yet.", month)?,
        }

        let Some(amount) =
            self.prompt(&format!("Enter new budget for {}: {}", month, self.symbol))?
        else {
            return Ok(());
        };
        let amount = match validate_amount(&amount) {
            Ok(amount) => amount,
            Err(e) => return self.report_rejection(e),
        };

        BudgetService::new(self.storage).set_budget(month, amount)?;
        writeln!(
            self.output,
            "Budget of {} set for {}.",
            amount.format_with_symbol(&self.symbol),
            month
        )?;
        self.print_month_status(month)
    }

    /// Save and print every month's status; returns the save error, if any
    fn save_and_report(&mut self) -> LedgerResult<Option<LedgerError>> {
        if let Err(err) = self.storage.save_all() {
            writeln!(self.output, "Failed to save expenses: {}", err)?;
            return Ok(Some(err));
        }
        writeln!(self.output, "Expenses saved successfully.")?;

        let statuses = all_months_status(self.storage);
        if !statuses.is_empty() {
            writeln!(self.output)?;
            write!(self.output, "{}", format_all_months(&statuses, &self.symbol))?;
        }
        Ok(None)
    }

    fn print_month_status(&mut self, month: Month) -> LedgerResult<()> {
        let status = budget_status(self.storage, month);
        writeln!(self.output)?;
        write!(self.output, "{}", format_month_status(&status, &self.symbol))?;
        Ok(())
    }

    /// Print why an input was rejected; the menu continues
    fn report_rejection(&mut self, err: LedgerError) -> LedgerResult<()> {
        if err.is_validation() {
            writeln!(self.output, "{}", err)?;
            Ok(())
        } else {
            Err(err)
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
