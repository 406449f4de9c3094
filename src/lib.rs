//! Expense Ledger - a single-user personal expense tracker
//!
//! This library records dated expenses in a fixed set of categories,
//! persists them to a CSV file and compares each month's spending against
//! a budget held for the session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, months, expenses)
//! - `storage`: CSV file storage layer and in-memory budgets
//! - `services`: Input validation on top of storage
//! - `reports`: Monthly totals and budget comparison
//! - `display`: Text rendering of tables and reports
//! - `audit`: Audit logging system
//! - `shell`: The interactive menu
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
//! use expense_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(&paths, &settings)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::LedgerError;
