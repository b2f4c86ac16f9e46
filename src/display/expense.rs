//! Expense and category tables

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{CategoryChoice, Expense};
use crate::reports::CategoryTotals;

use super::report::{format_bar, format_percentage};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Expense table in entry order
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        date: settings.date(e.date),
        category: e.category_name().to_string(),
        amount: settings.money(e.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Category totals with their share of spending and a text bar
pub fn format_category_table(totals: &CategoryTotals, settings: &Settings) -> String {
    if totals.is_empty() {
        return "No spending to show.\n".to_string();
    }

    let max = totals.max_total().as_f64();
    let rows = totals.iter().map(|entry| CategoryRow {
        name: entry.name.clone(),
        total: settings.money(entry.total),
        count: entry.count,
        share: format_percentage(entry.percentage),
        bar: format_bar(entry.total.as_f64(), max, BAR_WIDTH),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()));
    format!("{}\n", table)
}

/// The ten selector options, one per line
pub fn format_category_choices() -> String {
    let mut output = String::new();
    for choice in CategoryChoice::all() {
        output.push_str(choice.label());
        if choice.is_others() {
            output.push_str(" (enter your own category name)");
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FixedCategory, Money};
    use chrono::NaiveDate;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(
                Money::from_cents(1250),
                Category::Fixed(FixedCategory::Food),
                NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            ),
            Expense::new(
                Money::from_cents(4000),
                Category::Custom("Gym".into()),
                NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_expense_table() {
        let table = format_expense_table(&sample(), &Settings::default());
        assert!(table.contains("Date"));
        assert!(table.contains("2025-05-01"));
        assert!(table.contains("Gym"));
        assert!(table.contains("$40.00"));
    }

    #[test]
    fn test_expense_table_uses_date_format() {
        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let table = format_expense_table(&sample(), &settings);
        assert!(table.contains("02/05/2025"));
    }

    #[test]
    fn test_empty_tables() {
        let settings = Settings::default();
        assert_eq!(format_expense_table(&[], &settings), "No expenses recorded.\n");
        assert_eq!(
            format_category_table(&CategoryTotals::default(), &settings),
            "No spending to show.\n"
        );
    }

    #[test]
    fn test_category_table() {
        let totals = CategoryTotals::from_expenses(&sample());
        let table = format_category_table(&totals, &Settings::default());
        assert!(table.contains("Food"));
        assert!(table.contains("$12.50"));
        assert!(table.contains("76%"));
    }

    #[test]
    fn test_category_choices() {
        let text = format_category_choices();
        assert_eq!(text.lines().count(), 10);
        assert!(text.starts_with("Food\n"));
        assert!(text.contains("Others (enter your own category name)"));
    }
}
