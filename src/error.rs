//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Date input that is not a valid YYYY-MM-DD calendar date
    #[error("Invalid date '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Category outside the fixed category set
    #[error("Invalid category '{0}'. Choose from the list.")]
    InvalidCategory(String),

    /// Amount that is not a non-negative number
    #[error("Invalid amount '{0}'. Please enter a non-negative number.")]
    InvalidAmount(String),

    /// Amount that would push the ledger total past what can be stored
    #[error("Amount '{0}' is too large: the ledger total would overflow.")]
    AmountTooLarge(String),

    /// Month input that is not a valid YYYY-MM key
    #[error("Invalid month '{0}'. Use YYYY-MM.")]
    InvalidMonth(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Check if this error came from rejecting user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidCategory(_)
                | Self::InvalidAmount(_)
                | Self::AmountTooLarge(_)
                | Self::InvalidMonth(_)
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
