//! Fixed-capacity line buffer for move entry.

use arrayvec::ArrayVec;

use crate::map::LineEdit;
use crate::types::MAX_INPUT_LEN;

/// What applying an edit did to the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    /// Still editing; the buffer may or may not have changed.
    Editing,
    /// Enter pressed: the finished line.
    Submitted(String),
    /// Aborted by the user.
    Cancelled,
}

/// The move being typed. Keys past capacity are dropped.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    chars: ArrayVec<char, MAX_INPUT_LEN>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn apply(&mut self, edit: LineEdit) -> LineStatus {
        match edit {
            LineEdit::Insert(ch) => {
                let _ = self.chars.try_push(ch);
                LineStatus::Editing
            }
            LineEdit::Backspace => {
                self.chars.pop();
                LineStatus::Editing
            }
            LineEdit::Submit => {
                let line = self.as_string();
                self.chars.clear();
                LineStatus::Submitted(line)
            }
            LineEdit::Cancel => {
                self.chars.clear();
                LineStatus::Cancelled
            }
        }
    }
}
