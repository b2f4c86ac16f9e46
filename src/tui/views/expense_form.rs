//! Add expense panel
//!
//! The custom category field only appears while "Others" is selected.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::layout::field_rows;

use super::{muted, panel};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let focused = matches!(
        app.focus,
        Focus::Amount | Focus::Date | Focus::Category | Focus::Custom
    );
    let block = panel("Add Expense", Color::Green, focused, &theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = field_rows(inner, 7);

    if let Some(warning) = app.session.warning() {
        frame.render_widget(Paragraph::new(Span::styled(warning, theme.warning())), rows[0]);
    }

    frame.render_widget(&app.amount_input, rows[1]);
    frame.render_widget(&app.date_input, rows[2]);

    let selector_style = if app.focus == Focus::Category {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let selector = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("◀ {} ▶", app.category.label()), selector_style),
    ]);
    frame.render_widget(Paragraph::new(selector), rows[3]);

    if app.custom_visible() {
        frame.render_widget(&app.custom_input, rows[4]);
    }

    frame.render_widget(
        Paragraph::new(Span::styled("Enter: add expense", muted(&theme))),
        rows[6],
    );
}
