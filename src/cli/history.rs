//! CLI command for viewing the audit log

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Handle `ledger history`
pub fn handle_history_command(storage: &Storage, limit: usize) -> LedgerResult<()> {
    let Some(audit) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = audit.read_recent(limit)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
