//! Report formatting helpers
//!
//! Text bars and percentages used by the CLI tables and the TUI charts.

/// Format a percentage with precision that suits its size
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar of `width` cells, filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate to at most `max_len` characters, marking the cut with "…"
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        assert_eq!(format_bar(-5.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(500.0, 100.0, 3), "███");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Entertainment", 6), "Enter…");
        assert_eq!(truncate("Food", 6), "Food");
        assert_eq!(truncate("Café au lait", 5), "Café…");
        assert_eq!(truncate("abc", 0), "");
    }
}
