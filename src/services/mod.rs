//! Business logic layer
//!
//! Pure functions over expenses and the budget: entry validation, budget
//! advice, the canned assistant, and CSV input.

pub mod assistant;
pub mod budget;
pub mod import;
pub mod ingest;

pub use assistant::{respond, AssistantTopic};
pub use budget::{
    parse_budget, submission_warning, BudgetBalance, BudgetStatus, BudgetTier, Severity,
    LARGE_EXPENSE_WARNING,
};
pub use import::{read_expense_forms, ColumnMapping};
pub use ingest::{validate_expense, ExpenseForm, Rejection};
