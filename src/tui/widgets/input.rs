//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so non-ASCII input edits correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    pub focused: bool,
    pub placeholder: String,
    pub label: String,
    pub accent: Color,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            accent: Color::Cyan,
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };

        if label_width > 0 {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(self.accent)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let input_start = area.x.saturating_add(label_width);
        let input_width = area.width.saturating_sub(label_width) as usize;

        let (text, style) = if self.content.is_empty() && !self.focused {
            (
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )
        } else if self.focused {
            (self.content.as_str(), Style::default().add_modifier(Modifier::BOLD))
        } else {
            (self.content.as_str(), Style::default())
        };
        buf.set_stringn(input_start, area.y, text, input_width, style);

        if self.focused {
            let cursor_x = input_start.saturating_add(self.cursor as u16);
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(self.accent),
                );
            }
        }
    }
}
