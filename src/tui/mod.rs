//! Terminal User Interface module
//!
//! An interactive dashboard built with ratatui: budget and expense entry
//! on the left, trends, distribution and the expense table on the right.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
