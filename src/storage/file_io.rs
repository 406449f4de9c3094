//! CSV file I/O
//!
//! The ledger file is read as raw records so that a short or malformed row
//! can be judged on its own without failing the whole load. Writing happens
//! in one pass with the header first.

use std::fs::{self, File};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use crate::error::LedgerError;

/// Header and rows of a CSV file, each row read independently
#[derive(Debug)]
pub struct CsvRecords {
    pub headers: StringRecord,
    /// Rows in file order; a row the reader could not decode carries the reason
    pub rows: Vec<Result<StringRecord, String>>,
}

impl CsvRecords {
    /// Position of a column by header name, ignoring surrounding whitespace
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }
}

/// Field `idx` of a record, or `""` when the column is absent or the row is short
pub fn field(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}

/// Read the header and every row of a CSV file
///
/// Returns `None` if the file doesn't exist. Rows may have fewer or more
/// fields than the header.
pub fn read_csv_records<P: AsRef<Path>>(path: P) -> Result<Option<CsvRecords>, LedgerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let rows = reader
        .records()
        .enumerate()
        .map(|(idx, result)| {
            // +2: one for the header, one for 1-based line numbers
            result.map_err(|e| format!("row {}: {}", idx + 2, e))
        })
        .collect();

    Ok(Some(CsvRecords { headers, rows }))
}

/// Write a header and rows to a CSV file, replacing any previous content
pub fn write_csv<T, P>(path: P, headers: &[&str], rows: &[T]) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create {}: {}", path.display(), e)))?;

    // Header is written by hand so an empty ledger still gets one
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct TestRow {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert!(read_csv_records(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let data = vec![
            TestRow {
                name: "a, with comma".to_string(),
                value: 1,
            },
            TestRow {
                name: "b \"quoted\"".to_string(),
                value: 2,
            },
        ];

        write_csv(&path, &["name", "value"], &data).unwrap();

        let records = read_csv_records(&path).unwrap().unwrap();
        let name = records.column("name");
        let value = records.column("value");
        let loaded: Vec<(String, String)> = records
            .rows
            .iter()
            .map(|r| {
                let r = r.as_ref().unwrap();
                (field(r, name).to_string(), field(r, value).to_string())
            })
            .collect();
        assert_eq!(
            loaded,
            vec![
                ("a, with comma".to_string(), "1".to_string()),
                ("b \"quoted\"".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_rows_read_missing_fields_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("short.csv");
        fs::write(&path, "name,value,note\na,1\nb,2,extra,more\n").unwrap();

        let records = read_csv_records(&path).unwrap().unwrap();
        let note = records.column("note");
        assert_eq!(records.rows.len(), 2);
        assert_eq!(field(records.rows[0].as_ref().unwrap(), note), "");
        assert_eq!(field(records.rows[1].as_ref().unwrap(), note), "extra");
        assert_eq!(field(records.rows[0].as_ref().unwrap(), records.column("missing")), "");
    }

    #[test]
    fn test_undecodable_row_is_reported_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixed.csv");
        let mut bytes = b"name,value\na,1\n".to_vec();
        bytes.extend_from_slice(b"\xff\xfe,2\nc,3\n");
        fs::write(&path, bytes).unwrap();

        let records = read_csv_records(&path).unwrap().unwrap();
        assert_eq!(records.rows.len(), 3);
        assert!(records.rows[0].is_ok());
        assert!(records.rows[1].as_ref().unwrap_err().starts_with("row 3:"));
        assert!(records.rows[2].is_ok());
    }

    #[test]
    fn test_empty_write_still_has_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        write_csv::<TestRow, _>(&path, &["name", "value"], &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_csv::<TestRow, _>(&path, &["name", "value"], &[]).unwrap();
        assert!(path.exists());
    }
}
