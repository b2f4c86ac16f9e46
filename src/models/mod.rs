//! Core data models for the expense tracker
//!
//! Money amounts, the category selector and recorded expenses.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, CategoryChoice, FixedCategory, OTHERS_LABEL};
pub use expense::{Expense, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
