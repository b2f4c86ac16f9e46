//! CSV expense input
//!
//! Reads rows of `amount,category,date` into entry forms. Rows are not
//! validated here; every form goes through the same ingestion path as typed
//! entries, so malformed rows are dropped there.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;

use crate::error::{TrackerError, TrackerResult};
use crate::services::ingest::ExpenseForm;

/// Column positions located from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub amount_column: usize,
    pub category_column: usize,
    pub date_column: usize,
}

impl ColumnMapping {
    /// Locate columns by header name, ignoring case and surrounding spaces
    pub fn from_headers(headers: &StringRecord) -> TrackerResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| TrackerError::Csv(format!("missing '{}' column", name)))
        };

        Ok(Self {
            amount_column: find("amount")?,
            category_column: find("category")?,
            date_column: find("date")?,
        })
    }

    fn form_for(&self, record: &StringRecord) -> ExpenseForm {
        let field = |idx: usize| record.get(idx).unwrap_or("");
        ExpenseForm::from_category_name(
            field(self.amount_column),
            field(self.date_column),
            field(self.category_column),
        )
    }
}

/// Read every data row of a CSV document into an entry form
pub fn read_expense_forms<R: Read>(input: R) -> TrackerResult<Vec<ExpenseForm>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let mapping = ColumnMapping::from_headers(reader.headers()?)?;

    let mut forms = Vec::new();
    for record in reader.records() {
        forms.push(mapping.form_for(&record?));
    }
    Ok(forms)
}
