//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so multi-byte input is edited correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder shown while the field is empty
    pub placeholder: String,
    /// Label drawn before the value
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to its end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Spans for the value, with the cursor cell highlighted when focused
    pub fn value_spans(&self) -> Vec<Span<'static>> {
        if self.content.is_empty() && !self.focused {
            return vec![Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )];
        }

        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        if !self.focused {
            return vec![Span::styled(self.content.clone(), text_style)];
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
        let after: String = self.content.chars().skip(self.cursor + 1).collect();

        vec![
            Span::styled(before, text_style),
            Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(after, text_style),
        ]
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(format!("{:>14}: ", self.label), label_style));
        }
        spans.extend(self.value_spans());

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new();
        for c in "Cofee".chars() {
            input.insert(c);
        }
        input.move_left();
        input.move_left();
        input.insert('f');
        assert_eq!(input.value(), "Coffee");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "Coffe");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("café");
        assert_eq!(input.cursor, 4);
        input.backspace();
        assert_eq!(input.value(), "caf");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "af");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.clear();
        assert_eq!(input.value(), "");
    }
}
