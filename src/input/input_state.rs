use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The single-line command input
pub struct InputState {
    pub textarea: TextArea<'static>,
    pub scroll_offset: usize,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            scroll_offset: 0,
        }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the line and put the cursor at its end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(single_line(text));
    }

    /// Replace the line and put the cursor at char column `col`
    pub fn replace(&mut self, text: &str, col: usize) {
        self.set_text(text);
        self.set_cursor(col);
    }

    pub fn clear(&mut self) {
        self.set_text("");
        self.scroll_offset = 0;
    }

    /// Cursor position as a char column
    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    pub fn set_cursor(&mut self, col: usize) {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        self.textarea.move_cursor(CursorMove::Jump(0, col));
    }

    /// Feed a key to the text area; returns whether the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            return false;
        }

        let before = self.text().to_string();
        self.textarea.input(key);

        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().join(" ");
            let col = self.cursor();
            self.replace(&joined, col);
        }

        self.text() != before
    }

    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        let cursor_col = self.cursor();
        let text_length = self.text().chars().count();

        let mut new_scroll = self.scroll_offset;

        if cursor_col < new_scroll {
            new_scroll = cursor_col;
        } else if cursor_col >= new_scroll + viewport_width {
            new_scroll = cursor_col + 1 - viewport_width;
        }

        if text_length < new_scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width);
            let max_scroll_for_cursor = cursor_col.saturating_sub(viewport_width.saturating_sub(1));
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_cursor));
        }

        self.scroll_offset = new_scroll;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
