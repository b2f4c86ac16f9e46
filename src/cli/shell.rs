//! Line-oriented session
//!
//! Reads one command per line and applies it to a `Session`. Rejected
//! expense entries produce no output, matching the dashboard.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_category_choices, format_expense_table};
use crate::error::TrackerResult;
use crate::models::CategoryChoice;
use crate::services::{parse_budget, ExpenseForm};
use crate::session::{Session, SubmitOutcome};

const HELP: &str = "\
Commands:
  budget <amount>                         Set the monthly budget
  add <amount> <date> <category> [text]   Record an expense (text names an Others category)
  ask <question>                          Ask the assistant
  summary                                 Show totals, advice and trends
  list                                    Show recorded expenses
  categories                              Show the category options
  help                                    Show this help
  quit                                    Leave the session
";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Budget(String),
    Add(ExpenseForm),
    Ask(String),
    Summary,
    List,
    Categories,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "budget" => Self::Budget(rest.to_string()),
            "add" => Self::Add(parse_add(rest)),
            "ask" => Self::Ask(rest.to_string()),
            "summary" => Self::Summary,
            "list" => Self::List,
            "categories" => Self::Categories,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// `<amount> <date> <category> [custom text]`
///
/// A category word that is not one of the built-in names is taken, together
/// with any following words, as custom text.
fn parse_add(args: &str) -> ExpenseForm {
    let words: Vec<&str> = args.split_whitespace().collect();
    let amount = words.first().copied().unwrap_or("");
    let date = words.get(1).copied().unwrap_or("");
    let category_words = words.get(2..).unwrap_or(&[]);

    match category_words.first().map(|w| w.parse::<CategoryChoice>()) {
        None => ExpenseForm::new(amount, date, CategoryChoice::default(), ""),
        Some(Ok(CategoryChoice::Others)) => {
            ExpenseForm::new(amount, date, CategoryChoice::Others, category_words[1..].join(" "))
        }
        Some(Ok(choice)) => ExpenseForm::new(amount, date, choice, ""),
        Some(Err(_)) => {
            ExpenseForm::new(amount, date, CategoryChoice::Others, category_words.join(" "))
        }
    }
}

/// Run commands from `input` until it ends or `quit` is read
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    settings: &Settings,
    input: R,
    output: &mut W,
    prompt: bool,
) -> TrackerResult<()> {
    if prompt {
        writeln!(output, "Expense tracker session. Type 'help' for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "> ")?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };

        match ShellCommand::parse(&line?) {
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
            ShellCommand::Budget(text) => match parse_budget(&text) {
                Ok(budget) => {
                    session.set_budget(budget);
                    let state = session.state();
                    writeln!(output, "Budget set to {}", settings.money(budget))?;
                    writeln!(output, "{}", state.status.advice)?;
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            ShellCommand::Add(form) => {
                if let SubmitOutcome::Recorded { warned } = session.submit(&form) {
                    if let Some(expense) = session.expenses().last() {
                        writeln!(
                            output,
                            "Recorded {} {} {}",
                            settings.date(expense.date),
                            expense.category_name(),
                            settings.money(expense.amount)
                        )?;
                    }
                    if warned {
                        if let Some(warning) = session.warning() {
                            writeln!(output, "{}", warning)?;
                        }
                    }
                }
            }
            ShellCommand::Ask(question) => {
                if let Some(reply) = session.ask(&question) {
                    writeln!(output, "{}", reply)?;
                }
            }
            ShellCommand::Summary => {
                write!(output, "{}", session.state().format_terminal(settings))?
            }
            ShellCommand::List => {
                write!(output, "{}", format_expense_table(session.expenses(), settings))?
            }
            ShellCommand::Categories => write!(output, "{}", format_category_choices())?,
            ShellCommand::Help => write!(output, "{}", HELP)?,
            ShellCommand::Unknown(verb) => {
                writeln!(output, "Unknown command '{}'. Type 'help' for commands.", verb)?
            }
        }
    }

    Ok(())
}

/// Handle the `shell` command on stdin/stdout
pub fn handle_shell_command(settings: &Settings) -> TrackerResult<()> {
    use std::io::IsTerminal;

    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut session = Session::new(settings.default_budget);
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    run_shell(&mut session, settings, stdin.lock(), &mut output, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedCategory, Money};

    fn run(script: &str) -> (Session, String) {
        let mut session = Session::default();
        let mut out = Vec::new();
        run_shell(&mut session, &Settings::default(), script.as_bytes(), &mut out, false).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("  "), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("BUDGET 100"), ShellCommand::Budget("100".into()));
        assert_eq!(ShellCommand::parse("ask  any tips? "), ShellCommand::Ask("any tips?".into()));
        assert_eq!(ShellCommand::parse("frobnicate"), ShellCommand::Unknown("frobnicate".into()));
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_add("12 2025-05-01 food"),
            ExpenseForm::new("12", "2025-05-01", CategoryChoice::Fixed(FixedCategory::Food), "")
        );
        assert_eq!(
            parse_add("12 2025-05-01 Others Yoga class"),
            ExpenseForm::new("12", "2025-05-01", CategoryChoice::Others, "Yoga class")
        );
        assert_eq!(
            parse_add("12 2025-05-01 Pet food"),
            ExpenseForm::new("12", "2025-05-01", CategoryChoice::Others, "Pet food")
        );
        assert_eq!(parse_add("12").date, "");
    }

    #[test]
    fn test_session_script() {
        let (session, out) = run(
            "budget 1000\n\
             add 600 2025-05-01 Rent\n\
             add  2025-05-02 Food\n\
             add 42.5 2025-05-03 Others Gym\n\
             ask Any budget tips?\n\
             ask   \n\
             quit\n\
             add 1 2025-05-04 Food\n",
        );

        assert_eq!(session.expenses().len(), 2);
        assert_eq!(session.budget(), Money::from_cents(100000));
        assert!(out.contains("Budget set to $1000.00"));
        assert!(out.contains("Recorded 2025-05-01 Rent $600.00"));
        assert!(out.contains("Warning: This expense is over 50% of your budget!"));
        assert!(out.contains("Recorded 2025-05-03 Gym $42.50"));
        assert_eq!(
            out.matches("Make sure your expenses don't exceed your budget!").count(),
            1
        );
    }

    #[test]
    fn test_rejected_add_is_silent() {
        let (session, out) = run("add 5 2025-05-01 Others\n");
        assert!(session.expenses().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_budget_reports_and_keeps_previous() {
        let (session, out) = run("budget 50\nbudget lots\n");
        assert_eq!(session.budget(), Money::from_cents(5000));
        assert!(out.contains("Invalid input: Budget 'lots' is not valid"));
    }

    #[test]
    fn test_unknown_command() {
        let (_, out) = run("dance\n");
        assert_eq!(out, "Unknown command 'dance'. Type 'help' for commands.\n");
    }
}
