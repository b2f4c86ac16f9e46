//! Spending by category
//!
//! Folds the expense list into one total per category name. Entries keep
//! the order in which their category first appeared.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Expense, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category display name (custom text for "Others" entries)
    pub name: String,
    /// Sum of amounts filed under this name
    pub total: Money,
    /// Number of expenses filed under this name
    pub count: usize,
    /// Share of total spending, 0 when total spending is 0
    pub percentage: f64,
}

/// Ordered per-category totals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut entries: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for expense in expenses {
            let name = expense.category_name();
            let slot = *index.entry(name).or_insert_with(|| {
                entries.push(CategoryTotal {
                    name: name.to_string(),
                    total: Money::zero(),
                    count: 0,
                    percentage: 0.0,
                });
                entries.len() - 1
            });
            entries[slot].total += expense.amount;
            entries[slot].count += 1;
        }

        let grand_total: Money = entries.iter().map(|e| e.total).sum();
        for entry in &mut entries {
            entry.percentage = entry.total.percent_of(grand_total);
        }

        Self(entries)
    }

    pub fn entries(&self) -> &[CategoryTotal] {
        &self.0
    }

    pub fn get(&self, name: &str) -> Option<Money> {
        self.0.iter().find(|e| e.name == name).map(|e| e.total)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> Money {
        self.0.iter().map(|e| e.total).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }

    /// Largest total, used to scale bar charts
    pub fn max_total(&self) -> Money {
        self.0.iter().map(|e| e.total).max().unwrap_or_default()
    }
}
