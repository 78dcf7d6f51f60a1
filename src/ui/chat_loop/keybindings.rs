//! Key and paste dispatch for the chat screen.
//!
//! These functions only touch the [`App`]; anything that needs the network or
//! the keyring is handed back to the event loop as a [`KeyOutcome`].

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;
use tui_textarea::Input as TAInput;

use crate::core::app::{App, PendingRequest};
use crate::ui::layout::build_transcript_lines;
use crate::ui::renderer::transcript_height;

#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Quit,
    /// A send was accepted; the caller runs it against the gateway.
    Send(PendingRequest),
    /// A key was committed from the key entry form; the caller may persist it.
    KeySaved(String),
}

/// Largest useful `scroll_from_bottom` for the current transcript.
pub fn max_scroll(app: &App, term_width: u16, term_height: u16) -> u16 {
    let lines = build_transcript_lines(app.messages(), app.is_pending(), &app.ui.theme, term_width);
    let viewport = transcript_height(term_height) as usize;
    lines.len().saturating_sub(viewport).min(u16::MAX as usize) as u16
}

pub fn handle_key(app: &mut App, key: KeyEvent, term_width: u16, term_height: u16) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    if app.key_entry.is_open() {
        return handle_key_entry(app, key);
    }

    if ctrl && key.code == KeyCode::Char('k') {
        app.open_key_entry();
        return KeyOutcome::Handled;
    }

    if handle_navigation_keys(app, key.code, term_width, term_height) {
        return KeyOutcome::Handled;
    }

    let newline = key
        .modifiers
        .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);
    if key.code == KeyCode::Enter && !newline {
        return match app.submit_input() {
            Ok(request) => KeyOutcome::Send(request),
            Err(rejection) => {
                debug!(%rejection, "send dropped");
                KeyOutcome::Handled
            }
        };
    }

    if !app.is_pending() && app.ui.input(TAInput::from(key)) {
        app.clear_notice();
    }
    KeyOutcome::Handled
}

fn handle_key_entry(app: &mut App, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Enter => match app.save_key() {
            Ok(saved) => KeyOutcome::KeySaved(saved),
            Err(err) => {
                debug!(error = %err, "key entry rejected");
                KeyOutcome::Handled
            }
        },
        KeyCode::Esc => {
            app.cancel_key_entry();
            KeyOutcome::Handled
        }
        _ => {
            app.key_entry.input(TAInput::from(key));
            KeyOutcome::Handled
        }
    }
}

/// Up/Down/PageUp/PageDown/Home/End move the transcript.
fn handle_navigation_keys(app: &mut App, code: KeyCode, term_width: u16, term_height: u16) -> bool {
    let max = max_scroll(app, term_width, term_height);
    let page = transcript_height(term_height).max(1);
    match code {
        KeyCode::Up => app.ui.scroll_up(1),
        KeyCode::Down => app.ui.scroll_down(1),
        KeyCode::PageUp => app.ui.scroll_up(page),
        KeyCode::PageDown => app.ui.scroll_down(page),
        KeyCode::Home => app.ui.scroll_up(max),
        KeyCode::End => app.ui.scroll_to_bottom(),
        _ => return false,
    }
    app.ui.scroll_from_bottom = app.ui.scroll_from_bottom.min(max);
    true
}

/// Bracketed paste goes to whichever field has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    if app.key_entry.is_open() {
        app.key_entry.paste(&text);
    } else if !app.is_pending() {
        app.ui.paste(&text);
        app.clear_notice();
    }
}
