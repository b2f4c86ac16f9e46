//! Custom error types for the expense tracker
//!
//! Application-level failures (configuration, I/O, serialization, export,
//! terminal handling) share one error type. Rejected expense entries are not
//! errors at this level; see `services::ingest::Rejection`.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// User input that cannot be interpreted (budget values, shell commands)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Create an invalid input error for a value that failed to parse
    pub fn invalid_value(what: &'static str, value: impl AsRef<str>) -> Self {
        Self::InvalidInput(format!("{} '{}' is not valid", what, value.as_ref()))
    }

    /// Check if this error was caused by user input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TrackerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("bad field".into());
        assert_eq!(err.to_string(), "Configuration error: bad field");
    }

    #[test]
    fn test_invalid_value() {
        let err = TrackerError::invalid_value("Budget", "abc");
        assert_eq!(err.to_string(), "Invalid input: Budget 'abc' is not valid");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
        assert!(!err.is_invalid_input());
    }
}
