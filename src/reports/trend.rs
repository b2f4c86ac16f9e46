//! Expense trend series
//!
//! One point per expense in the order the expenses were recorded. Points
//! are not sorted by date and repeated dates stay separate.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Expense, Money};

/// A single point of the trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: Money,
}

pub fn trend_series(expenses: &[Expense]) -> Vec<TrendPoint> {
    expenses
        .iter()
        .map(|e| TrendPoint {
            date: e.date,
            amount: e.amount,
        })
        .collect()
}
