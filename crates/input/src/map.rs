//! Key mapping from terminal events to line edits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One edit to the move entry line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
}

/// Map keyboard input to a line edit.
///
/// Release events (reported by some terminals) and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<LineEdit> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(LineEdit::Cancel);
    }
    match key.code {
        KeyCode::Enter => Some(LineEdit::Submit),
        KeyCode::Backspace => Some(LineEdit::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                && !ch.is_control() =>
        {
            Some(LineEdit::Insert(ch))
        }
        _ => None,
    }
}

/// Check if key should abort the session.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
