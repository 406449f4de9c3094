//! Audit logging for the expense ledger
//!
//! Every added expense and every budget change is appended to a JSON-lines
//! audit log next to the ledger file.
//!
//! - `AuditEntry`: one operation with timestamp, entity and before/after values.
//! - `AuditLogger`: appends entries to, and reads them back from, the log file.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::expense_added(0, &expense))?;
//! let recent = logger.read_recent(20)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
