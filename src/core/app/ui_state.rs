use ratatui::style::Style;
use tui_textarea::{Input, TextArea};

use crate::ui::theme::Theme;

pub struct UiState {
    pub theme: Theme,
    pub textarea: TextArea<'static>,
    /// One-line notice shown under the input box (e.g. the missing-key prompt).
    pub notice: Option<String>,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll_from_bottom: u16,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        let mut ui = Self {
            theme,
            textarea: TextArea::default(),
            notice: None,
            scroll_from_bottom: 0,
        };
        ui.configure_textarea();
        ui
    }

    pub(crate) fn configure_textarea(&mut self) {
        let textarea_style = self
            .theme
            .input_text_style
            .patch(Style::default().bg(self.theme.background_color));
        self.textarea.set_style(textarea_style);
        self.textarea.set_cursor_style(self.theme.input_cursor_style);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_placeholder_text("Type your message...");
    }

    /// Current input with lines joined by `\n`.
    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn clear_input(&mut self) {
        self.textarea = TextArea::default();
        self.configure_textarea();
    }

    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        self.textarea.input(input)
    }

    pub fn paste(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }

    pub fn set_input_text(&mut self, text: &str) {
        self.clear_input();
        self.textarea.insert_str(text);
    }

    pub fn is_following(&self) -> bool {
        self.scroll_from_bottom == 0
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }
}
