//! Assistant panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::Span,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Focus};

use super::{muted, panel};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let block = panel("AI Assistant", Color::Yellow, app.focus == Focus::Assistant, &theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    frame.render_widget(&app.assistant_input, chunks[0]);

    if let Some(reply) = app.session.assistant_reply() {
        frame.render_widget(
            Paragraph::new(Span::styled(reply, muted(&theme))).wrap(Wrap { trim: true }),
            chunks[1],
        );
    }
}
