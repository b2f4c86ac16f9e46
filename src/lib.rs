//! Expense Tracker - personal monthly budget tracker for the terminal
//!
//! This library provides the core functionality for the expense tracker:
//! validated expense entry, budget classification, spending aggregation and
//! a keyword assistant, with a ratatui dashboard and plain CLI front ends.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses)
//! - `services`: Validation, budget rules, CSV intake and the assistant
//! - `reports`: Totals, category distribution and trends
//! - `session`: In-memory session state shared by every front end
//! - `display`, `export`: Terminal tables and JSON/YAML/CSV output
//! - `cli`, `tui`: Command handlers and the interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::CategoryChoice;
//! use expense_tracker::services::ExpenseForm;
//! use expense_tracker::session::Session;
//!
//! let mut session = Session::new("1000".parse()?);
//! session.submit(&ExpenseForm::new("42.5", "2025-05-01", CategoryChoice::Others, "Gym"));
//! println!("{}", session.state().status.advice);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod tui;

pub use error::TrackerError;
