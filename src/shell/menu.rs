//! Menu options of the interactive shell

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    SetBudget,
    Save,
    Exit,
}

impl MenuChoice {
    /// All options, in the order they are numbered
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::SetBudget,
        MenuChoice::Save,
        MenuChoice::Exit,
    ];

    pub const fn number(&self) -> u8 {
        match self {
            Self::AddExpense => 1,
            Self::ViewExpenses => 2,
            Self::SetBudget => 3,
            Self::Save => 4,
            Self::Exit => 5,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewExpenses => "View All Expenses",
            Self::SetBudget => "Set Monthly Budget",
            Self::Save => "Save Expenses to CSV",
            Self::Exit => "Exit",
        }
    }

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::ViewExpenses),
            "3" => Some(Self::SetBudget),
            "4" => Some(Self::Save),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_numbering() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
