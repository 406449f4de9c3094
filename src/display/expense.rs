//! Expense display formatting
//!
//! Renders the expense list as a table followed by the grand total.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::expense::DATE_FORMAT;
use crate::models::{Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a table with the total across all months
pub fn format_expense_table<'a, I>(expenses: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut total = Money::zero();
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|e| {
            total += e.amount;
            ExpenseRow {
                date: e.date.format(DATE_FORMAT).to_string(),
                category: e.category.to_string(),
                amount: e.amount.format_with_symbol(symbol),
                description: e.description.clone(),
            }
        })
        .collect();

    if rows.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{}\n\nTotal Expenses Across All Months: {}\n",
        table,
        total.format_with_symbol(symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_table(&Vec::<Expense>::new(), "₹"),
            "No expenses recorded yet.\n"
        );
    }

    #[test]
    fn test_table_contents_and_total() {
        let expenses = vec![
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                Category::Food,
                Money::from_cents(25000),
                "lunch",
            ),
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                Category::Travel,
                Money::from_cents(1050),
                "metro",
            ),
        ];

        let output = format_expense_table(&expenses, "₹");
        assert!(output.contains("Date"));
        assert!(output.contains("Description"));
        assert!(output.contains("2024-03-15"));
        assert!(output.contains("₹250.00"));
        assert!(output.contains("metro"));
        assert!(output.contains("Total Expenses Across All Months: ₹260.50"));

        let lunch_at = output.find("lunch").unwrap();
        let metro_at = output.find("metro").unwrap();
        assert!(lunch_at < metro_at);
    }
}
