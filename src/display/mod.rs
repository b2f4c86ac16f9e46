//! Display formatting for terminal output
//!
//! Tables for the expense list and category totals, plus small text helpers
//! shared with the TUI.

pub mod expense;
pub mod report;

pub use expense::{format_category_choices, format_category_table, format_expense_table};
pub use report::{format_bar, format_percentage, truncate};
