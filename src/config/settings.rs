//! User settings
//!
//! Display preferences and the budget a new session starts with. Settings
//! are stored as JSON; every field has a default so older or partial files
//! still load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::paths::ExpensePaths;
use crate::error::TrackerError;
use crate::models::{Money, DATE_FORMAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for showing expense dates (entry is always YYYY-MM-DD)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Budget a new session starts with
    #[serde(default)]
    pub default_budget: Money,

    /// Start the dashboard with the dark palette
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_budget: Money::zero(),
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if none were saved
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();
        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    pub fn save(&self, paths: &ExpensePaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date with the configured format, falling back to YYYY-MM-DD
    /// when the format string is not valid strftime
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => date.format(DATE_FORMAT).to_string(),
        }
    }
}
