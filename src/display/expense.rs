//! Expense list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{category_name, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Expense")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, in insertion order
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.format(&settings.date_format).to_string(),
        name: e.expense_name.clone(),
        category: category_name(&e.category).to_string(),
        amount: settings.format_money(e.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftExpense, ExpenseId, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        let output = format_expense_table(&[], &Settings::default());
        assert_eq!(output, "No expenses recorded.\n");
    }

    #[test]
    fn test_table_lists_expenses_in_order() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let expenses = vec![
            Expense::from_draft(
                ExpenseId::new(),
                DraftExpense::new("Coffee", Money::from_units(3), "food", date),
            ),
            Expense::from_draft(
                ExpenseId::new(),
                DraftExpense::new("Netflix", Money::from_cents(1599), "subscriptions", date),
            ),
        ];

        let output = format_expense_table(&expenses, &Settings::default());

        let coffee = output.find("Coffee").unwrap();
        let netflix = output.find("Netflix").unwrap();
        assert!(coffee < netflix);
        assert!(output.contains("Food"));
        assert!(output.contains("$15.99"));
        assert!(output.contains("2024-01-01"));
    }
}
