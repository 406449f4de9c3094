//! Storage layer for the expense ledger
//!
//! The expense list is persisted to a CSV file with a full rewrite on every
//! save; budgets are kept in memory for the current run only.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use expenses::{ExpenseRepository, LoadReport, LEDGER_HEADERS};
pub use file_io::{read_csv_records, write_csv, CsvRecords};

use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{paths::LedgerPaths, settings::Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Money, Month};

/// Main storage coordinator that owns the ledger state for one process
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create storage using the configured ledger file and audit log
    pub fn new(paths: &LedgerPaths, settings: &Settings) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: ExpenseRepository::new(settings.resolve_ledger_file(paths)),
            budgets: BudgetRepository::new(),
            audit,
        })
    }

    /// Create storage backed by a single ledger file, without an audit log
    pub fn with_ledger_file(path: PathBuf) -> Self {
        Self {
            expenses: ExpenseRepository::new(path),
            budgets: BudgetRepository::new(),
            audit: None,
        }
    }

    /// Load all persisted data from disk
    pub fn load_all(&mut self) -> Result<LoadReport, LedgerError> {
        self.expenses.load()
    }

    /// Save all persisted data to disk
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.expenses.save()
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an appended expense in the audit log, if enabled
    pub fn log_expense_added(&self, position: usize, expense: &Expense) -> LedgerResult<()> {
        self.write_audit(|| AuditEntry::expense_added(position, expense))
    }

    /// Record a budget change in the audit log, if enabled
    pub fn log_budget_set(
        &self,
        month: Month,
        previous: Option<Money>,
        amount: Money,
    ) -> LedgerResult<()> {
        self.write_audit(|| AuditEntry::budget_set(month, previous, amount))
    }

    fn write_audit(&self, entry: impl FnOnce() -> AuditEntry) -> LedgerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("ledger"));
        let storage = Storage::new(&paths, &Settings::default()).unwrap();

        assert!(paths.base_dir().exists());
        assert_eq!(storage.expenses.path(), paths.ledger_file().as_path());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_audit_disabled_in_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::new(&paths, &settings).unwrap();

        assert!(storage.audit().is_none());
        storage
            .log_budget_set(Month::new(2024, 3).unwrap(), None, Money::from_cents(1))
            .unwrap();
        assert!(!paths.audit_log().exists());
    }

    #[test]
    fn test_log_budget_created_then_updated() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths, &Settings::default()).unwrap();
        let march = Month::new(2024, 3).unwrap();

        storage
            .log_budget_set(march, None, Money::from_cents(30000))
            .unwrap();
        storage
            .log_budget_set(march, Some(Money::from_cents(30000)), Money::from_cents(45000))
            .unwrap();

        let entries = storage.audit().unwrap().read_recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Update);
    }
}
