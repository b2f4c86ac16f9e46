//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session and report layers.

pub mod assistant;
pub mod category;
pub mod shell;
pub mod summary;

pub use assistant::handle_ask_command;
pub use category::handle_categories_command;
pub use shell::{handle_shell_command, run_shell, ShellCommand};
pub use summary::{handle_summary_command, OutputFormat, SummaryArgs};
