//! Expense distribution panel
//!
//! Category totals in first-seen order, each with its share of the total.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::{format_bar, format_percentage, truncate};
use crate::reports::BudgetState;
use crate::tui::app::App;
use crate::tui::theme::slice_color;

use super::{muted, panel};

const NAME_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, app: &App, state: &BudgetState, area: Rect) {
    let theme = app.theme();
    let block = panel("Expense Distribution", Color::Green, false, &theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.category_totals.is_empty() {
        frame.render_widget(Paragraph::new(Span::styled("No expenses yet", muted(&theme))), inner);
        return;
    }

    let max = state.category_totals.max_total().as_f64();
    let bar_width = (inner.width as usize).saturating_sub(NAME_WIDTH + 24);

    let lines: Vec<Line> = state
        .category_totals
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let color = slice_color(index);
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!(
                    "{:<width$}",
                    truncate(&entry.name, NAME_WIDTH),
                    width = NAME_WIDTH
                )),
                Span::styled(
                    format_bar(entry.total.as_f64(), max, bar_width),
                    Style::default().fg(color),
                ),
                Span::raw(format!(
                    " {:>12} {:>7}",
                    app.settings.money(entry.total),
                    format_percentage(entry.percentage)
                )),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
