//! Expense model
//!
//! An expense is a dated amount under one category. Records have no id;
//! their identity is their position in the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::month::Month;

/// Date format used for input and for the ledger file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Day the money was spent
    pub date: NaiveDate,

    pub category: Category,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Free-text note
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category,
            amount,
            description: description.into(),
        }
    }

    /// The month key this expense is grouped under
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    /// Parse a `YYYY-MM-DD` date
    pub fn parse_date(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount,
            self.description
        )
    }
}
