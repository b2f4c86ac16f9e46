//! Reports module
//!
//! Derived views over the recorded expenses: per-category totals, the trend
//! series, and the combined budget summary.

pub mod spending;
pub mod summary;
pub mod trend;

pub use spending::{CategoryTotal, CategoryTotals};
pub use summary::BudgetState;
pub use trend::{trend_series, TrendPoint};
