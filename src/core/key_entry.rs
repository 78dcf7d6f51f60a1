//! Modal form that captures the Gemini API key.
//!
//! The surface is either [`KeyEntryState::Open`] or [`KeyEntryState::Closed`].
//! It starts open when no key is known, and closed otherwise. `open` moves
//! Closed→Open; `save` and `cancel` move Open→Closed, except that `save`
//! refuses a blank key and stays open with an inline validation message.

use std::error::Error;
use std::fmt;

use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, TextArea};

use crate::core::constants::EMPTY_KEY_MESSAGE;

const MASK_CHAR: char = '\u{2022}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEntryState {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEntryError {
    /// The field was blank or whitespace only.
    Empty,
    /// `save` was called while the surface was closed.
    NotOpen,
}

impl fmt::Display for KeyEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEntryError::Empty => f.write_str(EMPTY_KEY_MESSAGE),
            KeyEntryError::NotOpen => f.write_str("key entry is not open"),
        }
    }
}

impl Error for KeyEntryError {}

pub struct KeyEntry {
    state: KeyEntryState,
    field: TextArea<'static>,
    error: Option<String>,
}

impl KeyEntry {
    pub fn new(has_key: bool) -> Self {
        Self {
            state: if has_key {
                KeyEntryState::Closed
            } else {
                KeyEntryState::Open
            },
            field: masked_field(""),
            error: None,
        }
    }

    pub fn state(&self) -> KeyEntryState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == KeyEntryState::Open
    }

    /// Open the form, pre-filled with `current_key`. No-op when already open.
    pub fn open(&mut self, current_key: Option<&str>) {
        if self.is_open() {
            return;
        }
        self.field = masked_field(current_key.unwrap_or_default());
        self.error = None;
        self.state = KeyEntryState::Open;
    }

    /// Feed one key press to the secret field. Any edit clears the validation message.
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        if !self.is_open() {
            return false;
        }
        let modified = self.field.input(input);
        if modified {
            self.error = None;
        }
        modified
    }

    /// Insert pasted text; line breaks are dropped since the key is a single line.
    pub fn paste(&mut self, text: &str) {
        if !self.is_open() {
            return;
        }
        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if self.field.insert_str(cleaned) {
            self.error = None;
        }
    }

    pub fn draft(&self) -> String {
        self.field.lines().concat()
    }

    /// Validate and close. Returns the key to commit; surrounding whitespace is trimmed.
    pub fn save(&mut self) -> Result<String, KeyEntryError> {
        if !self.is_open() {
            return Err(KeyEntryError::NotOpen);
        }
        let draft = self.draft();
        let key = draft.trim();
        if key.is_empty() {
            self.error = Some(KeyEntryError::Empty.to_string());
            return Err(KeyEntryError::Empty);
        }
        let key = key.to_string();
        self.close();
        Ok(key)
    }

    /// Discard the draft and close without committing anything.
    pub fn cancel(&mut self) {
        self.close();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field(&self) -> &TextArea<'static> {
        &self.field
    }

    fn close(&mut self) {
        self.field = masked_field("");
        self.error = None;
        self.state = KeyEntryState::Closed;
    }
}

fn masked_field(initial: &str) -> TextArea<'static> {
    let mut field = TextArea::new(vec![initial.to_string()]);
    field.set_mask_char(MASK_CHAR);
    field.set_placeholder_text("Enter your API key...");
    field.set_cursor_line_style(Style::default());
    field.move_cursor(CursorMove::End);
    field
}
