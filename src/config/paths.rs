//! Path management for the expense tracker
//!
//! Only user preferences live on disk; expenses never do.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expense-tracker` or `~/.config/expense-tracker`
//! 3. Windows: `%APPDATA%\expense-tracker`

use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_TRACKER_CONFIG_DIR";

const APP_DIR_NAME: &str = "expense-tracker";

/// Locations used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory is known.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a specific base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to create config directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// Whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var_os("HOME").ok_or_else(|| {
                TrackerError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| TrackerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
