//! Export module
//!
//! Writes a session summary in machine-readable formats:
//! - JSON: full summary with the expense list
//! - YAML: the same structure, human-readable
//! - CSV: expense rows followed by category totals (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_summary_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;
