//! Editor form buffer.
//!
//! # Invariants
//! - `id = Some(..)` means "editing existing note"; `None` means
//!   "composing a new note".
//! - The buffer is owned by the page state and cleared only after a
//!   successful submit.

use crate::model::note::{validate_fields, Note, NoteId, NoteValidationError};

/// In-progress editor buffer for the note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub content: String,
    /// Target note when editing; `None` while composing a new note.
    pub id: Option<NoteId>,
}

impl FormState {
    /// Loads an existing note into the buffer, turning the form into an
    /// editor for that note.
    pub fn load_note(&mut self, note: &Note) {
        self.title = note.title.clone();
        self.content = note.content.clone();
        self.id = Some(note.id);
    }

    /// Resets the buffer to the all-empty compose state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks the buffer against the submit contract.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        validate_fields(&self.title, &self.content)
    }

    /// True when nothing has been typed and no edit is in progress.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.id.is_none()
    }
}
