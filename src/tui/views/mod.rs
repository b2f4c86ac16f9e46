//! TUI Views module
//!
//! One view per dashboard panel plus the status bar. The budget state is
//! recomputed once per frame and shared by every panel.

pub mod assistant;
pub mod budget;
pub mod distribution;
pub mod expense_form;
pub mod status_bar;
pub mod table;
pub mod trend;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use super::app::App;
use super::layout::AppLayout;
use super::theme::Theme;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let state = app.session.state();
    let layout = AppLayout::new(frame.area());

    frame.render_widget(Block::default().style(theme.base()), frame.area());

    budget::render(frame, app, &state, layout.budget);
    expense_form::render(frame, app, layout.expense_form);
    assistant::render(frame, app, layout.assistant);
    trend::render(frame, app, &state, layout.trend);
    distribution::render(frame, app, &state, layout.distribution);
    table::render(frame, app, layout.table);
    status_bar::render(frame, app, &state, layout.status_bar);
}

/// Bordered panel with a coloured title
fn panel<'a>(title: &'a str, accent: Color, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title(accent))
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .style(theme.base())
}

fn muted(theme: &Theme) -> Style {
    Style::default().fg(theme.muted)
}
