//! One-shot summary command
//!
//! Collects expenses from `--expense` flags and an optional CSV file, runs
//! each through the same ingestion path as the dashboard, and prints the
//! resulting budget summary.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_category_table, format_expense_table};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_summary_csv, export_summary_json, export_summary_yaml};
use crate::services::{parse_budget, read_expense_forms, ExpenseForm};
use crate::session::Session;

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Monthly budget (defaults to the configured budget)
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Expense as AMOUNT,CATEGORY,DATE; unknown categories are treated as custom (repeatable)
    #[arg(short, long = "expense", value_name = "AMOUNT,CATEGORY,DATE")]
    pub expenses: Vec<String>,

    /// CSV file with amount, category and date columns
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Split an `AMOUNT,CATEGORY,DATE` flag value into an entry form
///
/// The amount ends at the first comma and the date starts after the last,
/// so category names may themselves contain commas.
pub fn parse_expense_arg(value: &str) -> ExpenseForm {
    let (amount, rest) = value.split_once(',').unwrap_or((value, ""));
    let (category, date) = rest.rsplit_once(',').unwrap_or((rest, ""));
    ExpenseForm::from_category_name(amount.trim(), date.trim(), category)
}

/// Build the session described by the arguments
pub fn build_session(args: &SummaryArgs, settings: &Settings) -> TrackerResult<Session> {
    let budget = match &args.budget {
        Some(text) => parse_budget(text)?,
        None => settings.default_budget,
    };

    let mut forms: Vec<ExpenseForm> = args.expenses.iter().map(|s| parse_expense_arg(s)).collect();
    if let Some(path) = &args.file {
        let file = File::open(path).map_err(|e| {
            TrackerError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        forms.extend(read_expense_forms(BufReader::new(file))?);
    }

    let mut session = Session::new(budget);
    let rejected = forms
        .iter()
        .filter(|form| !session.submit(form).is_recorded())
        .count();
    if rejected > 0 {
        info!(rejected, "skipped malformed expense entries");
    }

    Ok(session)
}

/// Write the summary of a session in the requested format
pub fn write_summary<W: Write>(
    session: &Session,
    settings: &Settings,
    format: OutputFormat,
    writer: &mut W,
) -> TrackerResult<()> {
    let state = session.state();
    match format {
        OutputFormat::Table => {
            write!(
                writer,
                "{}\n{}\n{}",
                state.format_terminal(settings),
                format_category_table(&state.category_totals, settings),
                format_expense_table(session.expenses(), settings)
            )?;
            if let Some(warning) = session.warning() {
                writeln!(writer, "\n{}", warning)?;
            }
            Ok(())
        }
        OutputFormat::Json => export_summary_json(session.expenses(), &state, writer),
        OutputFormat::Yaml => export_summary_yaml(session.expenses(), &state, writer),
        OutputFormat::Csv => export_summary_csv(session.expenses(), &state, writer),
    }
}

/// Handle the `summary` command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> TrackerResult<()> {
    let session = build_session(&args, settings)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_summary(&session, settings, args.format, &mut writer)?;
            writer.flush()?;
            println!("Summary written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_summary(&session, settings, args.format, &mut handle)?;
        }
    }

    Ok(())
}
