//! Monthly budget panel
//!
//! Budget input, the remaining or in-debt line and the advice, both
//! coloured by tier.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::reports::BudgetState;
use crate::tui::app::{App, Focus};

use super::panel;

pub fn render(frame: &mut Frame, app: &App, state: &BudgetState, area: Rect) {
    let theme = app.theme();
    let block = panel("Monthly Budget", Color::Blue, app.focus == Focus::Budget, &theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1),
            Constraint::Length(1), // Balance
            Constraint::Min(1),    // Advice
        ])
        .split(inner);
    let tier_style = theme.severity(state.status.severity);

    frame.render_widget(&app.budget_input, rows[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            state.balance.describe(&app.settings.currency_symbol),
            tier_style,
        ))),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(state.status.advice, tier_style)).wrap(Wrap { trim: true }),
        rows[3],
    );
}
