//! Expense trends panel
//!
//! One bar per recorded expense in entry order. When the panel is too short
//! the most recent points are shown.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_bar;
use crate::reports::BudgetState;
use crate::tui::app::App;

use super::{muted, panel};

const LABEL_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 12;

pub fn render(frame: &mut Frame, app: &App, state: &BudgetState, area: Rect) {
    let theme = app.theme();
    let block = panel("Expense Trends", Color::Magenta, false, &theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.trend.is_empty() {
        frame.render_widget(Paragraph::new(Span::styled("No expenses yet", muted(&theme))), inner);
        return;
    }

    let max = state
        .trend
        .iter()
        .map(|p| p.amount.as_f64())
        .fold(0.0, f64::max);
    let bar_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + AMOUNT_WIDTH + 2);
    let skip = state.trend.len().saturating_sub(inner.height as usize);

    let lines: Vec<Line> = state
        .trend
        .iter()
        .skip(skip)
        .map(|point| {
            Line::from(vec![
                Span::raw(format!(
                    "{:<width$}",
                    app.settings.date(point.date),
                    width = LABEL_WIDTH
                )),
                Span::styled(
                    format_bar(point.amount.as_f64(), max, bar_width),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(format!(
                    " {:>width$}",
                    app.settings.money(point.amount),
                    width = AMOUNT_WIDTH
                )),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
