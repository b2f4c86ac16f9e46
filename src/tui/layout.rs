//! Layout definitions for the TUI
//!
//! Two columns above a one-line status bar. The left column holds the
//! input panels, the right column the charts and the expense table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel regions for the dashboard
pub struct AppLayout {
    pub budget: Rect,
    pub expense_form: Rect,
    pub assistant: Rect,
    pub trend: Rect,
    pub distribution: Rect,
    pub table: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Panels
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(56), Constraint::Min(40)])
            .split(vertical[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Budget
                Constraint::Length(9), // Add expense
                Constraint::Min(5),    // Assistant
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(30),
                Constraint::Percentage(35),
            ])
            .split(columns[1]);

        Self {
            budget: left[0],
            expense_form: left[1],
            assistant: left[2],
            trend: right[0],
            distribution: right[1],
            table: right[2],
            status_bar: vertical[1],
        }
    }
}

/// Rows inside a bordered block, one per field
pub fn field_rows(inner: Rect, count: usize) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(std::iter::repeat(Constraint::Length(1)).take(count))
        .split(inner)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_fit() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.budget.width, 56);
        assert_eq!(layout.trend.x, 56);
        assert!(layout.table.bottom() <= layout.status_bar.y);
    }

    #[test]
    fn test_field_rows() {
        let rows = field_rows(Rect::new(1, 1, 30, 5), 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].y, 3);
        assert!(rows.iter().all(|r| r.height == 1));
    }
}
