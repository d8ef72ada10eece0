//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record shared by store and page layers.
//! - Enforce the only validation the system has: non-empty title and
//!   non-empty content on every write path.
//!
//! # Invariants
//! - `id` is stable once persisted and never reused for another note.
//! - A note is never written with an empty title or empty content.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a persisted note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Validation failure for a note draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty.
    EmptyTitle,
    /// Content is empty.
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title cannot be empty"),
            Self::EmptyContent => write!(f, "note content cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// Canonical record for one title+content note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for addressing updates and deletes.
    pub id: NoteId,
    /// Short display title.
    pub title: String,
    /// Free-form body text.
    pub content: String,
}

impl Note {
    /// Creates a new note draft with a generated stable ID.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, content)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by read paths where identity already exists in storage.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Checks the draft against the write contract.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is the empty string.
    /// - `EmptyContent` when `content` is the empty string.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        validate_fields(&self.title, &self.content)
    }
}

/// Validates loose title/content fields against the write contract.
///
/// Shared by the repository write path and the page form so both reject
/// exactly the same drafts.
pub fn validate_fields(title: &str, content: &str) -> Result<(), NoteValidationError> {
    if title.is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }
    if content.is_empty() {
        return Err(NoteValidationError::EmptyContent);
    }
    Ok(())
}
