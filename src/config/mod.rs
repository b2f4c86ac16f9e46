//! Configuration module
//!
//! - Platform-aware config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{ExpensePaths, CONFIG_DIR_ENV};
pub use settings::Settings;
