//! JSON export of a session summary

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;
use crate::reports::BudgetState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything written by the JSON and YAML exporters
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Recorded expenses in entry order
    pub expenses: &'a [Expense],

    /// Derived budget summary
    pub summary: &'a BudgetState,
}

impl<'a> SummaryExport<'a> {
    pub fn new(expenses: &'a [Expense], summary: &'a BudgetState) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            expenses,
            summary,
        }
    }
}

/// Write the summary as pretty-printed JSON
pub fn export_summary_json<W: Write>(
    expenses: &[Expense],
    summary: &BudgetState,
    writer: &mut W,
) -> TrackerResult<()> {
    let export = SummaryExport::new(expenses, summary);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FixedCategory, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_export_json() {
        let expenses = vec![Expense::new(
            Money::from_cents(1250),
            Category::Fixed(FixedCategory::Food),
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        )];
        let summary = BudgetState::compute(&expenses, Money::from_cents(10000));

        let mut out = Vec::new();
        export_summary_json(&expenses, &summary, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["expenses"][0]["category"], "Food");
        assert_eq!(value["summary"]["total_spent"], 12.5);
        assert_eq!(
            value["summary"]["status"]["advice"],
            "Great job! You're well within your budget!"
        );
    }
}
