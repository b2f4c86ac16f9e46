//! Expense model
//!
//! An expense is a single recorded spending event. Once created it is never
//! edited; the session only appends new ones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Date format used for entry and display of expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent (zero and negative amounts are allowed)
    pub amount: Money,

    /// Category the expense is filed under
    pub category: Category,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(amount: Money, category: Category, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
        }
    }

    /// Name of the category, with custom text substituted for "Others"
    pub fn category_name(&self) -> &str {
        self.category.name()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FixedCategory;

    #[test]
    fn test_display() {
        let expense = Expense::new(
            Money::from_cents(1999),
            Category::Fixed(FixedCategory::Food),
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        );
        assert_eq!(expense.to_string(), "2025-05-01 Food $19.99");
    }

    #[test]
    fn test_serialization_uses_iso_date() {
        let expense = Expense::new(
            Money::from_cents(4250),
            Category::Custom("Gym".into()),
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["date"], "2025-05-01");
        assert_eq!(json["category"], "Gym");
        assert_eq!(json["amount"], 42.5);
    }
}
