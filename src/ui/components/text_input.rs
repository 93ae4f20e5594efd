//! Single-line text input with a character cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Text input state. `cursor` counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Replace the value and move the cursor to the end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_at(&self, char_index: usize) -> Option<char> {
        self.input.chars().nth(char_index)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Backspace
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete the character under the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
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

    /// Ctrl+U
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.drain(..at);
        self.cursor = 0;
    }

    /// Ctrl+K
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.truncate(at);
    }

    /// Alt+B
    pub fn move_word_left(&mut self) {
        while self.cursor > 0 && self.char_at(self.cursor - 1) == Some(' ') {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.char_at(self.cursor - 1) != Some(' ') {
            self.cursor -= 1;
        }
    }

    /// Alt+F
    pub fn move_word_right(&mut self) {
        let len = self.char_count();
        while self.cursor < len && self.char_at(self.cursor) != Some(' ') {
            self.cursor += 1;
        }
        while self.cursor < len && self.char_at(self.cursor) == Some(' ') {
            self.cursor += 1;
        }
    }

    /// Ctrl+W
    pub fn delete_word(&mut self) {
        let end = self.byte_index(self.cursor);
        self.move_word_left();
        let start = self.byte_index(self.cursor);
        self.input.drain(start..end);
    }

    /// Render the value, or `placeholder` when empty, with a block cursor
    pub fn render_with_placeholder(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: &str,
        placeholder_style: Style,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.input.is_empty() {
            Paragraph::new(placeholder)
                .style(placeholder_style)
                .render(area, buf);
            set_cursor(buf, area.x, area.y);
            return;
        }

        let (visible, cursor_col) = self.visible_window(area.width as usize);
        Paragraph::new(visible).style(style).render(area, buf);
        set_cursor(buf, area.x + cursor_col as u16, area.y);
    }

    /// Text from the first shown character on, and the cursor column inside
    /// `width`. Scrolls right just enough to keep the cursor cell on screen.
    fn visible_window(&self, width: usize) -> (&str, usize) {
        let room = width.saturating_sub(1);
        let chars: Vec<char> = self.input.chars().collect();
        let mut start = self.cursor.min(chars.len());
        let mut col = 0;
        while start > 0 {
            let w = chars[start - 1].width().unwrap_or(0);
            if col + w > room {
                break;
            }
            col += w;
            start -= 1;
        }
        (&self.input[self.byte_index(start)..], col)
    }
}

fn set_cursor(buf: &mut Buffer, x: u16, y: u16) {
    buf[(x, y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
}
