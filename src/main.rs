use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use expense_tracker::cli::{
    handle_ask_command, handle_categories_command, handle_shell_command, handle_summary_command,
    SummaryArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track monthly expenses against a budget",
    long_about = "A personal expense tracker for the terminal. Enter expenses with a \
                  category and date, set a monthly budget, and see how much is left, \
                  where the money went, and how spending moved over time."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Print a budget summary for a batch of expenses
    Summary(SummaryArgs),

    /// Ask the budgeting assistant a question
    Ask {
        /// Question text
        question: Vec<String>,
    },

    /// List the expense category options
    Categories,

    /// Start a line-oriented session on stdin
    Shell,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let rust_log = std::env::var("RUST_LOG").is_ok();
    let filter = if rust_log {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // Log lines would be drawn over the dashboard unless explicitly requested
    let is_tui = matches!(cli.command, Some(Commands::Tui));
    if !is_tui || rust_log || cli.verbose {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init();
    }

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&settings)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&settings, args)?;
        }
        Some(Commands::Ask { question }) => {
            handle_ask_command(&question)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command()?;
        }
        Some(Commands::Shell) => {
            handle_shell_command(&settings)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default budget:  {}", settings.money(settings.default_budget));
            println!("  Dark mode:       {}", settings.dark_mode);
        }
        None => {
            println!("Expense Tracker - monthly budget tracking in the terminal");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
