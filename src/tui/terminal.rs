//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::Settings;
use crate::error::TrackerResult;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> TrackerResult<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> TrackerResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui(settings: &Settings) -> TrackerResult<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);
    let events = EventHandler::default();

    let result = event_loop(&mut terminal, &mut app, &events);

    // Restore before surfacing any loop error
    restore_terminal()?;
    info!(
        expenses = app.session.expenses().len(),
        "dashboard closed"
    );
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> TrackerResult<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?);
    }
    Ok(())
}
