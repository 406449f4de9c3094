//! Expense repository for CSV storage
//!
//! Holds the in-memory list of expenses and moves it to and from the ledger
//! file (`date,category,amount,description`).

use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::Serialize;

use crate::error::LedgerError;
use crate::models::expense::DATE_FORMAT;
use crate::models::{Category, Expense, Money};

use super::file_io::{field, read_csv_records, write_csv, CsvRecords};

/// Column order of the ledger file
pub const LEDGER_HEADERS: [&str; 4] = ["date", "category", "amount", "description"];

/// One row of the ledger file as written
#[derive(Debug, Clone, Serialize)]
struct ExpenseRow {
    date: String,
    category: String,
    amount: String,
    description: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            category: expense.category.name().to_string(),
            amount: expense.amount.to_string(),
            description: expense.description.clone(),
        }
    }
}

/// Where each ledger column sits in the file being read
struct Columns {
    date: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
    description: Option<usize>,
}

impl Columns {
    fn locate(records: &CsvRecords) -> Self {
        Self {
            date: records.column("date"),
            category: records.column("category"),
            amount: records.column("amount"),
            description: records.column("description"),
        }
    }

    /// Build an expense from one row; a missing trailing field reads as empty
    fn parse(&self, record: &StringRecord) -> Result<Expense, String> {
        let raw_amount = field(record, self.amount);
        let amount = parse_stored_amount(raw_amount)?;
        if amount.is_negative() {
            return Err(format!("Negative amount: {}", raw_amount));
        }
        let raw_date = field(record, self.date);
        let date =
            Expense::parse_date(raw_date).ok_or_else(|| format!("Invalid date: {}", raw_date))?;
        let category = field(record, self.category)
            .parse::<Category>()
            .map_err(|e| e.to_string())?;

        Ok(Expense::new(
            date,
            category,
            amount,
            field(record, self.description),
        ))
    }
}

/// Parse an amount read back from the ledger file
///
/// Anything that reads as a finite number is kept, including forms such as
/// `+5` or `1e-05` that are never typed at the prompt. Values are rounded to
/// the nearest cent.
fn parse_stored_amount(raw: &str) -> Result<Money, String> {
    if let Ok(amount) = Money::parse(raw) {
        return Ok(amount);
    }

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("Invalid amount: {}", raw))?;
    let cents = (value * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        return Err(format!("Amount out of range: {}", raw));
    }

    Ok(Money::from_cents(cents as i64))
}

/// Outcome of loading the ledger file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Whether the ledger file existed
    pub file_found: bool,
    /// Rows turned into expenses
    pub loaded: usize,
    /// Rows dropped because they could not be parsed
    pub skipped: usize,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
        }
    }

    /// Path of the backing ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk, replacing the in-memory list
    ///
    /// A missing file leaves the repository empty. Rows that fail to parse
    /// (non-numeric or negative amount, bad date, unknown category) are
    /// dropped and counted in the report; the next `save` will not write them
    /// back. So are rows that would push the ledger total past what `Money`
    /// can hold, which keeps every month's total representable.
    pub fn load(&mut self) -> Result<LoadReport, LedgerError> {
        self.data.clear();

        let Some(records) = read_csv_records(&self.path)? else {
            return Ok(LoadReport::default());
        };
        let columns = Columns::locate(&records);

        let mut report = LoadReport {
            file_found: true,
            ..LoadReport::default()
        };
        let mut total = Money::zero();

        for row in &records.rows {
            let parsed = row.as_ref().map_err(Clone::clone).and_then(|r| columns.parse(r));
            match parsed.map(|e| (total.checked_add(e.amount), e)) {
                Ok((Some(new_total), expense)) => {
                    total = new_total;
                    self.data.push(expense);
                    report.loaded += 1;
                }
                _ => report.skipped += 1,
            }
        }

        Ok(report)
    }

    /// Save every expense to disk, overwriting the file
    pub fn save(&self) -> Result<(), LedgerError> {
        let rows: Vec<ExpenseRow> = self.data.iter().map(ExpenseRow::from).collect();
        write_csv(&self.path, &LEDGER_HEADERS, &rows)
    }

    /// Append an already-validated expense and return its position
    pub fn append(&mut self, expense: Expense) -> usize {
        self.data.push(expense);
        self.data.len() - 1
    }

    /// All expenses in insertion order
    pub fn get_all(&self) -> &[Expense] {
        &self.data
    }

    /// All expenses sorted by date; same-day expenses keep insertion order
    pub fn sorted_by_date(&self) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.data.iter().collect();
        expenses.sort_by_key(|e| e.date);
        expenses
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        (temp_dir, ExpenseRepository::new(path))
    }

    fn expense(date: (i32, u32, u32), category: Category, cents: i64, desc: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category,
            Money::from_cents(cents),
            desc,
        )
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let (_temp_dir, mut repo) = create_test_repo();

        let report = repo.load().unwrap();
        assert_eq!(report, LoadReport::default());
        assert!(!report.file_found);
        assert!(repo.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (_temp_dir, mut repo) = create_test_repo();
        let originals = vec![
            expense((2024, 3, 15), Category::Food, 25000, "lunch"),
            expense((2024, 3, 1), Category::Utilities, 120050, "power, water"),
            expense((2024, 4, 2), Category::Travel, 5, "bus \"express\""),
            expense((2024, 4, 2), Category::Miscellaneous, 0, ""),
        ];
        for e in &originals {
            repo.append(e.clone());
        }
        repo.save().unwrap();

        let mut reloaded = ExpenseRepository::new(repo.path().to_path_buf());
        let report = reloaded.load().unwrap();

        assert_eq!(report.loaded, 4);
        assert_eq!(report.skipped, 0);
        assert_eq!(reloaded.get_all(), originals.as_slice());
    }

    #[test]
    fn test_save_twice_is_byte_identical() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.append(expense((2024, 3, 15), Category::Food, 25000, "lunch"));
        repo.append(expense((2024, 2, 1), Category::Shopping, 9999, "shoes"));

        repo.save().unwrap();
        let first = fs::read(repo.path()).unwrap();
        repo.save().unwrap();
        let second = fs::read(repo.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_file_format() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.append(expense((2024, 3, 15), Category::Food, 25000, "lunch"));
        repo.save().unwrap();

        let contents = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(
            contents,
            "date,category,amount,description\n2024-03-15,Food,250.00,lunch\n"
        );
    }

    #[test]
    fn test_non_numeric_amount_row_is_dropped() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(
            repo.path(),
            "date,category,amount,description\n2024-03-15,Food,abc,lunch\n",
        )
        .unwrap();

        let report = repo.load().unwrap();
        assert!(report.file_found);
        assert_eq!(report.loaded, 0);
        assert_eq!(report.skipped, 1);
        assert!(repo.is_empty());
    }

    #[test]
    fn test_invalid_rows_are_skipped_valid_rows_kept() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(
            repo.path(),
            "date,category,amount,description\n\
             2024-03-15,Food,250.0,lunch\n\
             2024-03-16,Food,abc,bad amount\n\
             2024-02-30,Food,10,bad date\n\
             2024-03-17,Rent,10,bad category\n\
             2024-03-18,Travel,-5,negative\n\
             2024-03-19,Shopping,15\n",
        )
        .unwrap();

        let report = repo.load().unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 4);
        assert_eq!(repo.get_all()[0].amount, Money::from_cents(25000));
        assert_eq!(repo.get_all()[1].description, "");
    }

    #[test]
    fn test_numeric_amounts_in_any_float_form_are_kept() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(
            repo.path(),
            "date,category,amount,description\n\
             2024-03-15,Food,+5,plus\n\
             2024-03-16,Food,1e-05,tiny\n\
             2024-03-17,Food,1e+16,huge\n\
             2024-03-18,Food,2.5E2,upper\n\
             2024-03-19,Food,nan,not a number\n\
             2024-03-20,Food,-1e2,negative\n",
        )
        .unwrap();

        let report = repo.load().unwrap();
        assert_eq!(report.loaded, 4);
        assert_eq!(report.skipped, 2);

        let amounts: Vec<i64> = repo.get_all().iter().map(|e| e.amount.cents()).collect();
        assert_eq!(amounts, vec![500, 0, 1_000_000_000_000_000_000, 25000]);
    }

    #[test]
    fn test_rows_overflowing_the_total_are_skipped() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(
            repo.path(),
            "date,category,amount,description\n\
             2024-03-15,Food,90000000000000000,a\n\
             2024-03-16,Food,1,b\n\
             2024-03-17,Food,90000000000000000,c\n",
        )
        .unwrap();

        let report = repo.load().unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 1);
        let total: Money = repo.get_all().iter().map(|e| e.amount).sum();
        assert_eq!(total, Money::from_cents(9_000_000_000_000_000_100));
    }

    #[test]
    fn test_header_order_does_not_matter() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(
            repo.path(),
            "amount,description,category,date\n12.5,snacks,food,2024-01-05\n",
        )
        .unwrap();

        repo.load().unwrap();
        assert_eq!(
            repo.get_all(),
            &[expense((2024, 1, 5), Category::Food, 1250, "snacks")]
        );
    }

    #[test]
    fn test_load_replaces_in_memory_list() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.append(expense((2024, 3, 15), Category::Food, 100, "unsaved"));

        repo.load().unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_sorted_by_date_is_stable() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.append(expense((2024, 3, 15), Category::Food, 100, "b"));
        repo.append(expense((2024, 1, 1), Category::Food, 100, "a"));
        repo.append(expense((2024, 3, 15), Category::Food, 100, "c"));

        let descriptions: Vec<&str> = repo
            .sorted_by_date()
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["a", "b", "c"]);
        // insertion order untouched
        assert_eq!(repo.get_all()[0].description, "b");
    }
}
