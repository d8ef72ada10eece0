//! Note use-case service.
//!
//! # Responsibility
//! - Provide note create/update/get/list/delete APIs to the outer layers.
//! - Validate drafts before any SQL runs and log every mutation outcome.
//!
//! # Invariants
//! - `update` uses full title+content replacement semantics, in place,
//!   keeping the original note id.
//! - Service APIs never bypass repository validation/persistence contracts.

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Draft violates the non-empty title/content contract.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note and returns the persisted record.
    pub fn create_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Note, NoteServiceError> {
        let draft = Note::new(title, content);
        draft.validate().map_err(NoteServiceError::Validation)?;

        let id = self.repo.create_note(&draft)?;
        info!("event=note_create module=service status=ok id={id}");
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    /// Replaces title and content of an existing note, keeping its id.
    pub fn update_note(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
    ) -> Result<Note, NoteServiceError> {
        match self.repo.update_note(id, title, content) {
            Ok(()) => {
                info!("event=note_update module=service status=ok id={id}");
            }
            Err(err) => {
                warn!("event=note_update module=service status=error id={id} error={err}");
                return Err(err.into());
            }
        }

        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "updated note not found in read-back",
            ))
    }

    /// Gets one note by stable ID.
    pub fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.repo.get_note(id)
    }

    /// Lists all notes in store order.
    pub fn list_notes(&self) -> RepoResult<Vec<Note>> {
        self.repo.list_notes()
    }

    /// Deletes one note by stable ID.
    pub fn delete_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        match self.repo.delete_note(id) {
            Ok(()) => {
                info!("event=note_delete module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                warn!("event=note_delete module=service status=error id={id} error={err}");
                Err(err.into())
            }
        }
    }
}
