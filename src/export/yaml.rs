//! YAML export of a session summary

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::SummaryExport;
use crate::models::Expense;
use crate::reports::BudgetState;

/// Write the summary as YAML with a short header comment
pub fn export_summary_yaml<W: Write>(
    expenses: &[Expense],
    summary: &BudgetState,
    writer: &mut W,
) -> TrackerResult<()> {
    let export = SummaryExport::new(expenses, summary);

    writeln!(writer, "# Expense tracker summary")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
