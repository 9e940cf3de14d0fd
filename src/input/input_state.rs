use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use ratatui::crossterm::event::KeyEvent;
use tui_textarea::TextArea;

use crate::theme;

/// Single-line username entry
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Username ")
                .border_style(Style::default().fg(theme::input::BORDER)),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);
        textarea.set_placeholder_text("Enter your username");
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));

        Self { textarea }
    }

    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
    }

    pub fn set_value(&mut self, text: &str) {
        self.clear();
        self.insert_str(text);
    }

    /// Insert text, dropping line breaks so the field stays single-line
    pub fn insert_str(&mut self, text: &str) {
        let flattened: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.textarea.insert_str(&flattened);
    }

    /// Forward an editing key to the textarea, returns true if content changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }
}
