//! CSV export of a session summary
//!
//! Two sections share one file: the expense rows, then the category totals
//! with their share of spending. A blank record separates them.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, DATE_FORMAT};
use crate::reports::BudgetState;

/// Write expenses and category totals as CSV
pub fn export_summary_csv<W: Write>(
    expenses: &[Expense],
    summary: &BudgetState,
    writer: W,
) -> TrackerResult<()> {
    let mut out = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    out.write_record(["Date", "Category", "Amount"])?;
    for expense in expenses {
        out.write_record([
            expense.date.format(DATE_FORMAT).to_string(),
            expense.category_name().to_string(),
            expense.amount.to_decimal_string(),
        ])?;
    }

    out.write_record([""])?;
    out.write_record(["Category", "Total", "Count", "Percentage"])?;
    for entry in summary.category_totals.iter() {
        out.write_record([
            entry.name.clone(),
            entry.total.to_decimal_string(),
            entry.count.to_string(),
            format!("{:.2}", entry.percentage),
        ])?;
    }
    out.write_record([
        "TOTAL".to_string(),
        summary.total_spent.to_decimal_string(),
        expenses.len().to_string(),
        if summary.total_spent.is_zero() { "0.00" } else { "100.00" }.to_string(),
    ])?;

    out.flush().map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
