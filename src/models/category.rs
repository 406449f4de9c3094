//! Expense categories
//!
//! The ledger uses a fixed set of categories; user input is matched
//! case-insensitively against it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Utilities,
    Miscellaneous,
}

impl Category {
    /// All categories, in menu order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Utilities,
        Category::Miscellaneous,
    ];

    /// Display name, also the value persisted in the ledger file
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Comma-separated list of every category name
    pub fn list_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryParseError(trimmed.to_string()))
    }
}

/// Error for a name outside the category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("  UTILITIES ".parse::<Category>().unwrap(), Category::Utilities);
        assert_eq!("miscellaneous".parse::<Category>().unwrap(), Category::Miscellaneous);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Rent".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError("Rent".to_string()));
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_list_names() {
        assert_eq!(
            Category::list_names(),
            "Food, Travel, Shopping, Utilities, Miscellaneous"
        );
    }
}
