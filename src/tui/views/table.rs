//! Expense table panel

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;

use super::{muted, panel};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let block = panel("Expense Table", Color::Gray, false, &theme);
    let expenses = app.session.expenses();

    if expenses.is_empty() {
        frame.render_widget(
            Paragraph::new("No expenses recorded.")
                .style(muted(&theme))
                .block(block),
            area,
        );
        return;
    }

    // Header row plus borders
    let visible = (area.height as usize).saturating_sub(3);
    let skip = expenses.len().saturating_sub(visible);

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Category"),
        Cell::from(Text::from("Amount").right_aligned()),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = expenses
        .iter()
        .skip(skip)
        .map(|expense| {
            Row::new(vec![
                Cell::from(app.settings.date(expense.date)),
                Cell::from(expense.category_name().to_string()),
                Cell::from(Text::from(app.settings.money(expense.amount)).right_aligned()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Length(14),
    ];
    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
