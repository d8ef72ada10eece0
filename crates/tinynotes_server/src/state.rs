//! Shared application state and the event-dispatch boundary.
//!
//! # Responsibility
//! - Own the SQLite connection and the page state behind mutexes.
//! - Execute the commands emitted by the page reducer against the note
//!   service, then report the outcome back into the reducer.
//!
//! # Invariants
//! - The page lock is never held across store I/O.
//! - Page-flow entry points absorb store failures into the banner; the
//!   JSON API entry points propagate them to the status-code mapping.

use crate::error::{AppError, AppResult};
use log::debug;
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;
use tinynotes_core::{
    Command, FormState, Note, NoteId, NoteService, PageEvent, PageState, SqliteNoteRepository,
};

/// Process-wide state shared by all request handlers.
pub struct AppState {
    db: Mutex<Connection>,
    page: Mutex<PageState>,
}

impl AppState {
    /// Wraps a migrated connection and a fresh page state.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Mutex::new(conn),
            page: Mutex::new(PageState::default()),
        }
    }

    // --- note store surface (JSON API) ---

    /// Creates one note, propagating validation errors to the caller.
    pub fn create_note(&self, title: &str, content: &str) -> AppResult<Note> {
        let conn = self.lock_db()?;
        let service = NoteService::new(SqliteNoteRepository::try_new(&conn)?);
        Ok(service.create_note(title, content)?)
    }

    /// Updates one note in place by id.
    pub fn update_note(&self, id: NoteId, title: &str, content: &str) -> AppResult<Note> {
        let conn = self.lock_db()?;
        let service = NoteService::new(SqliteNoteRepository::try_new(&conn)?);
        Ok(service.update_note(id, title, content)?)
    }

    /// Deletes one note by id.
    pub fn delete_note(&self, id: NoteId) -> AppResult<()> {
        let conn = self.lock_db()?;
        let service = NoteService::new(SqliteNoteRepository::try_new(&conn)?);
        Ok(service.delete_note(id)?)
    }

    /// Lists all notes in store order.
    pub fn list_notes(&self) -> AppResult<Vec<Note>> {
        let conn = self.lock_db()?;
        let service = NoteService::new(SqliteNoteRepository::try_new(&conn)?);
        Ok(service.list_notes().map_err(AppError::Repo)?)
    }

    // --- page flow (server-rendered UI) ---

    /// Loads the submitted buffer into the form and runs the submit flow.
    ///
    /// Validation failures and store failures both end up on the banner;
    /// only infrastructure errors (broken schema, poisoned lock) are
    /// returned.
    pub fn submit_form(&self, form: FormState) -> AppResult<()> {
        let commands = {
            let mut page = self.lock_page()?;
            page.form = form;
            page.apply(PageEvent::Submit, Instant::now())
        };
        if commands.is_empty() {
            // Invalid draft: the reducer already raised the banner.
            return Ok(());
        }

        match self.execute(&commands) {
            Ok(()) => {
                self.dispatch(PageEvent::SubmitCompleted)?;
                Ok(())
            }
            Err(AppError::Service(err)) => {
                self.dispatch(PageEvent::MutationFailed(err.to_string()))?;
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Copies the given note into the form for editing.
    ///
    /// Returns `false` when the note vanished between render and click.
    pub fn start_edit(&self, id: NoteId) -> AppResult<bool> {
        let note = {
            let conn = self.lock_db()?;
            let service = NoteService::new(SqliteNoteRepository::try_new(&conn)?);
            service.get_note(id).map_err(AppError::Repo)?
        };

        match note {
            Some(note) => {
                self.dispatch(PageEvent::StartEdit(note))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Runs the delete flow for one card; store failure goes to the banner.
    pub fn request_delete(&self, id: NoteId) -> AppResult<()> {
        let commands = self
            .lock_page()?
            .apply(PageEvent::RequestDelete(id), Instant::now());

        match self.execute(&commands) {
            Ok(()) => Ok(()),
            Err(AppError::Service(err)) => {
                self.dispatch(PageEvent::MutationFailed(err.to_string()))?;
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Toggles one card's detail overlay.
    pub fn toggle_overlay(&self, id: NoteId) -> AppResult<()> {
        self.dispatch(PageEvent::ToggleOverlay(id))
    }

    /// Surfaces an out-of-band failure (e.g. a malformed form field) on
    /// the banner.
    pub fn report_failure(&self, message: impl Into<String>) -> AppResult<()> {
        self.dispatch(PageEvent::MutationFailed(message.into()))
    }

    /// Toggles the dark/light theme flag.
    pub fn toggle_theme(&self) -> AppResult<()> {
        self.dispatch(PageEvent::ToggleTheme)
    }

    /// Renders the whole page from current store and page state.
    pub fn render_index(&self) -> AppResult<String> {
        let notes = self.list_notes()?;
        let mut page = self.lock_page()?;
        page.prune_overlays(&notes);
        Ok(crate::render::render_page(&page, &notes, Instant::now()))
    }

    /// Snapshot of the page state, for assertions and diagnostics.
    pub fn page_snapshot(&self) -> AppResult<PageState> {
        Ok(self.lock_page()?.clone())
    }

    // --- internals ---

    fn dispatch(&self, event: PageEvent) -> AppResult<()> {
        let commands = self.lock_page()?.apply(event, Instant::now());
        debug_assert!(
            commands.is_empty(),
            "dispatch is for command-free events only"
        );
        Ok(())
    }

    fn execute(&self, commands: &[Command]) -> AppResult<()> {
        for command in commands {
            match command {
                Command::CreateNote { title, content } => {
                    self.create_note(title, content)?;
                }
                Command::UpdateNote { id, title, content } => {
                    self.update_note(*id, title, content)?;
                }
                Command::DeleteNote(id) => {
                    self.delete_note(*id)?;
                }
                Command::Refresh => {
                    // The follow-up GET / after the redirect is the refresh.
                    debug!("event=refresh_requested module=server");
                }
            }
        }
        Ok(())
    }

    fn lock_db(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.db.lock().map_err(|_| AppError::StatePoisoned)
    }

    fn lock_page(&self) -> AppResult<MutexGuard<'_, PageState>> {
        self.page.lock().map_err(|_| AppError::StatePoisoned)
    }
}
