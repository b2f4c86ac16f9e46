//! Expense ingestion
//!
//! Turns the raw text of the entry form into a recorded `Expense`. Entries
//! that are not well-formed are rejected; callers drop them without telling
//! the user and leave their state untouched.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Category, CategoryChoice, Expense, Money, DATE_FORMAT};

/// Raw contents of the expense entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    /// Amount as typed
    pub amount: String,
    /// Date as typed (YYYY-MM-DD)
    pub date: String,
    /// Selected category option
    pub category: CategoryChoice,
    /// Free-form category, used when "Others" is selected
    pub custom_category: String,
}

impl ExpenseForm {
    pub fn new(
        amount: impl Into<String>,
        date: impl Into<String>,
        category: CategoryChoice,
        custom_category: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            date: date.into(),
            category,
            custom_category: custom_category.into(),
        }
    }

    /// Build a form from a category name as found in CSV rows and CLI flags
    ///
    /// Known names select the matching option. Any other name selects
    /// "Others" with the name as custom text, so a bare "Others" ends up
    /// with no custom text and is rejected on validation.
    pub fn from_category_name(
        amount: impl Into<String>,
        date: impl Into<String>,
        category_name: &str,
    ) -> Self {
        match category_name.parse::<CategoryChoice>() {
            Ok(choice) => Self::new(amount, date, choice, ""),
            Err(_) => Self::new(amount, date, CategoryChoice::Others, category_name.trim()),
        }
    }
}

/// Why an entry was not recorded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("amount is empty")]
    MissingAmount,
    #[error("date is empty")]
    MissingDate,
    #[error("\"Others\" selected without a custom category")]
    MissingCustomCategory,
    #[error("amount '{0}' is not a number")]
    InvalidAmount(String),
    #[error("date '{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Validate an entry form and build the expense it describes
///
/// Checks run in order and the first failure wins: empty amount, empty date,
/// "Others" without custom text, unparseable amount, unparseable date. The
/// amount is not bounded and may be zero or negative.
pub fn validate_expense(form: &ExpenseForm) -> Result<Expense, Rejection> {
    let amount_text = form.amount.trim();
    let date_text = form.date.trim();
    let custom = form.custom_category.trim();

    if amount_text.is_empty() {
        return Err(Rejection::MissingAmount);
    }
    if date_text.is_empty() {
        return Err(Rejection::MissingDate);
    }
    if form.category.is_others() && custom.is_empty() {
        return Err(Rejection::MissingCustomCategory);
    }

    let amount =
        Money::parse(amount_text).map_err(|_| Rejection::InvalidAmount(amount_text.to_string()))?;
    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
        .map_err(|_| Rejection::InvalidDate(date_text.to_string()))?;

    let category = match form.category {
        CategoryChoice::Fixed(fixed) => Category::Fixed(fixed),
        CategoryChoice::Others => Category::Custom(custom.to_string()),
    };

    Ok(Expense::new(amount, category, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FixedCategory;

    fn validate_fixed(
        amount: &str,
        date: &str,
        category: FixedCategory,
    ) -> Result<Expense, Rejection> {
        validate_expense(&ExpenseForm::new(amount, date, CategoryChoice::Fixed(category), ""))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rejects_empty_amount() {
        let form = ExpenseForm::new(
            "",
            "2025-05-01",
            CategoryChoice::Fixed(FixedCategory::Food),
            "",
        );
        assert_eq!(validate_expense(&form), Err(Rejection::MissingAmount));
    }

    #[test]
    fn test_rejects_empty_date() {
        let form = ExpenseForm::new("10", "  ", CategoryChoice::Fixed(FixedCategory::Food), "");
        assert_eq!(validate_expense(&form), Err(Rejection::MissingDate));
    }

    #[test]
    fn test_rejects_others_without_custom_text() {
        let form = ExpenseForm::new("10", "2025-05-01", CategoryChoice::Others, "   ");
        assert_eq!(validate_expense(&form), Err(Rejection::MissingCustomCategory));
    }

    #[test]
    fn test_rejects_unparseable_values() {
        let form = ExpenseForm::new("ten", "2025-05-01", CategoryChoice::default(), "");
        assert_eq!(
            validate_expense(&form),
            Err(Rejection::InvalidAmount("ten".into()))
        );

        let form = ExpenseForm::new("10", "05/01/2025", CategoryChoice::default(), "");
        assert_eq!(
            validate_expense(&form),
            Err(Rejection::InvalidDate("05/01/2025".into()))
        );
    }

    #[test]
    fn test_empty_checks_come_before_parsing() {
        let form = ExpenseForm::new("ten", "", CategoryChoice::Others, "");
        assert_eq!(validate_expense(&form), Err(Rejection::MissingDate));
    }

    #[test]
    fn test_accepts_custom_category() {
        let form = ExpenseForm::new("42.5", "2025-05-01", CategoryChoice::Others, "Gym");
        let expense = validate_expense(&form).unwrap();

        assert_eq!(expense.amount, Money::from_cents(4250));
        assert_eq!(expense.category, Category::Custom("Gym".into()));
        assert_eq!(expense.category_name(), "Gym");
        assert_eq!(expense.date, date(2025, 5, 1));
    }

    #[test]
    fn test_custom_text_ignored_for_fixed_choice() {
        let form = ExpenseForm::new(
            "5",
            "2025-05-01",
            CategoryChoice::Fixed(FixedCategory::Rent),
            "Gym",
        );
        let expense = validate_expense(&form).unwrap();
        assert_eq!(expense.category, Category::Fixed(FixedCategory::Rent));
    }

    #[test]
    fn test_accepts_zero_and_negative_amounts() {
        let zero = validate_fixed("0", "2025-01-01", FixedCategory::Food).unwrap();
        assert!(zero.amount.is_zero());

        let negative = validate_fixed("-12.25", "2025-01-01", FixedCategory::Food).unwrap();
        assert_eq!(negative.amount, Money::from_cents(-1225));
    }

    #[test]
    fn test_no_date_range_check() {
        let expense = validate_fixed("1", "1999-12-31", FixedCategory::Travel).unwrap();
        assert_eq!(expense.date, date(1999, 12, 31));
    }

    #[test]
    fn test_from_category_name() {
        let form = ExpenseForm::from_category_name("1", "2025-01-01", "food");
        assert_eq!(form.category, CategoryChoice::Fixed(FixedCategory::Food));

        let form = ExpenseForm::from_category_name("1", "2025-01-01", " Gym ");
        assert_eq!(form.category, CategoryChoice::Others);
        assert_eq!(form.custom_category, "Gym");

        let form = ExpenseForm::from_category_name("1", "2025-01-01", "Others");
        assert_eq!(validate_expense(&form), Err(Rejection::MissingCustomCategory));
    }
}
