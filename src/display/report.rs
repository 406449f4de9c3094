//! Budget report formatting

use crate::reports::{BudgetOutcome, MonthlyStatus};

/// Format one month's spend and budget outcome
pub fn format_month_status(status: &MonthlyStatus, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Month: {}\n", status.month));
    output.push_str(&format!(
        "Total spent: {}\n",
        status.spent.format_with_symbol(symbol)
    ));

    match status.outcome {
        BudgetOutcome::NoBudget => output.push_str("No budget set for this month.\n"),
        BudgetOutcome::Within { remaining, .. } => output.push_str(&format!(
            "Within budget, {} remaining.\n",
            remaining.format_with_symbol(symbol)
        )),
        BudgetOutcome::Exceeded { over, .. } => output.push_str(&format!(
            "Budget exceeded by {}!\n",
            over.format_with_symbol(symbol)
        )),
    }

    output
}

/// Format the status of several months, separated by blank lines
pub fn format_all_months(statuses: &[MonthlyStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    statuses
        .iter()
        .map(|s| format_month_status(s, symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};

    fn status(spent: i64, budget: Option<i64>) -> MonthlyStatus {
        MonthlyStatus::evaluate(
            Month::parse("2024-03").unwrap(),
            Money::from_cents(spent),
            budget.map(Money::from_cents),
        )
    }

    #[test]
    fn test_within_budget_message() {
        let output = format_month_status(&status(25000, Some(30000)), "₹");
        assert_eq!(
            output,
            "Month: 2024-03\nTotal spent: ₹250.00\nWithin budget, ₹50.00 remaining.\n"
        );
    }

    #[test]
    fn test_exceeded_message() {
        let output = format_month_status(&status(35000, Some(30000)), "₹");
        assert!(output.contains("Budget exceeded by ₹50.00!"));
    }

    #[test]
    fn test_no_budget_message() {
        let output = format_month_status(&status(25000, None), "$");
        assert!(output.contains("Total spent: $250.00"));
        assert!(output.contains("No budget set for this month."));
    }

    #[test]
    fn test_format_all_months() {
        let march = status(100, None);
        let april = MonthlyStatus::evaluate(
            Month::parse("2024-04").unwrap(),
            Money::from_cents(200),
            None,
        );

        let output = format_all_months(&[march, april], "₹");
        assert!(output.find("2024-03").unwrap() < output.find("2024-04").unwrap());
        assert_eq!(format_all_months(&[], "₹"), "No expenses recorded yet.\n");
    }
}
