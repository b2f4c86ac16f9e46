//! Light and dark palettes for the dashboard

use ratatui::style::{Color, Modifier, Style};

use crate::services::Severity;

/// Slice colours for the distribution panel, cycled by position
pub const SLICE_COLORS: [Color; 4] = [Color::Blue, Color::Green, Color::Yellow, Color::LightRed];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub focused_border: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::White,
        foreground: Color::Black,
        muted: Color::DarkGray,
        border: Color::Gray,
        focused_border: Color::Blue,
    };

    pub const DARK: Theme = Theme {
        background: Color::Black,
        foreground: Color::White,
        muted: Color::Gray,
        border: Color::DarkGray,
        focused_border: Color::Cyan,
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focused_border)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title(&self, accent: Color) -> Style {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    }

    pub fn severity(&self, severity: Severity) -> Style {
        let color = match severity {
            Severity::Bad => Color::Red,
            Severity::Caution => Color::Yellow,
            Severity::Good => Color::LightGreen,
            Severity::VeryGood => Color::Green,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }
}

pub fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}
