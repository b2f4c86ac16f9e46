//! Budget summary
//!
//! `BudgetState` is everything a renderer needs, derived from the expense
//! list and the budget. It is recomputed on demand and never stored.

use serde::Serialize;
use std::fmt::Write as _;

use crate::config::Settings;
use crate::models::{Expense, Money};
use crate::services::{BudgetBalance, BudgetStatus};

use super::spending::CategoryTotals;
use super::trend::{trend_series, TrendPoint};

/// Derived view of the current expenses against the budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetState {
    pub budget: Money,
    pub total_spent: Money,
    pub balance: BudgetBalance,
    pub status: BudgetStatus,
    pub category_totals: CategoryTotals,
    pub trend: Vec<TrendPoint>,
}

impl BudgetState {
    pub fn compute(expenses: &[Expense], budget: Money) -> Self {
        let total_spent: Money = expenses.iter().map(|e| e.amount).sum();

        Self {
            budget,
            total_spent,
            balance: BudgetBalance::compute(total_spent, budget),
            status: BudgetStatus::evaluate(total_spent, budget),
            category_totals: CategoryTotals::from_expenses(expenses),
            trend: trend_series(expenses),
        }
    }

    /// Plain-text summary for terminal output
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();
        let money = |m: Money| settings.money(m);

        let _ = writeln!(output, "Monthly Budget: {}", money(self.budget));
        let _ = writeln!(output, "Total Spent:    {}", money(self.total_spent));
        let _ = writeln!(output, "{}", self.balance.describe(&settings.currency_symbol));
        let _ = writeln!(output, "{}", self.status.advice);
        output.push('\n');

        output.push_str("Expense Distribution\n");
        output.push_str(&"-".repeat(48));
        output.push('\n');
        if self.category_totals.is_empty() {
            output.push_str("  (no expenses)\n");
        }
        for entry in self.category_totals.iter() {
            let _ = writeln!(
                output,
                "  {:<24} {:>12} {:>7.1}%",
                entry.name,
                money(entry.total),
                entry.percentage
            );
        }
        output.push('\n');

        output.push_str("Expense Trends\n");
        output.push_str(&"-".repeat(48));
        output.push('\n');
        if self.trend.is_empty() {
            output.push_str("  (no expenses)\n");
        }
        for point in &self.trend {
            let _ = writeln!(
                output,
                "  {:<24} {:>12}",
                settings.date(point.date),
                money(point.amount)
            );
        }

        output
    }
}
