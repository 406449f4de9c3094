//! Append-only audit log
//!
//! One JSON document per line. Reading streams the file through
//! `serde_json`'s deserializer, so blank lines between entries are ignored.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Appends audit entries to, and reads them back from, the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as one JSON line
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;

        // one write per entry
        file.write_all(&line).map_err(|e| self.io_error("write", e))
    }

    /// The last `limit` entries, oldest first
    ///
    /// A missing log reads as empty.
    pub fn read_recent(&self, limit: usize) -> LedgerResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        let mut recent = VecDeque::with_capacity(limit.min(64));
        let stream = serde_json::Deserializer::from_reader(BufReader::new(file));

        for entry in stream.into_iter::<AuditEntry>() {
            let entry = entry.map_err(|e| {
                LedgerError::Json(format!(
                    "Corrupt audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;
            if recent.len() == limit {
                recent.pop_front();
            }
            if limit > 0 {
                recent.push_back(entry);
            }
        }

        Ok(recent.into())
    }

    fn io_error(&self, action: &str, err: io::Error) -> LedgerError {
        LedgerError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.log_path.display(),
            err
        ))
    }
}
