//! Status bar view
//!
//! Shows spending against the budget, the tier, the last status message and
//! key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::reports::BudgetState;
use crate::tui::app::App;

const HINTS: &str = " Tab:Next  ←/→:Category  Enter:Submit  Ctrl+T:Theme  Esc:Quit ";

pub fn render(frame: &mut Frame, app: &App, state: &BudgetState, area: Rect) {
    let theme = app.theme();
    let mut spans = vec![
        Span::styled(" Spent: ", Style::default().fg(theme.foreground)),
        Span::styled(
            app.settings.money(state.total_spent),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" of "),
        Span::styled(
            app.settings.money(state.budget),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled(state.status.tier.label(), theme.severity(state.status.severity)),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + HINTS.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.base()), area);
}
