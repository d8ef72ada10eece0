//! Page controller reducer.
//!
//! # Responsibility
//! - Translate user events into note-store commands.
//! - Own the error banner timer and the per-card overlay map.
//!
//! # Invariants
//! - `apply` performs no I/O; command execution and the follow-up
//!   `SubmitCompleted`/`MutationFailed` dispatch belong to the caller.
//! - An invalid submit emits no commands at all.
//! - Banner visibility is a pure function of `now`; re-triggering while
//!   the banner is pending replaces the hide deadline.

use crate::model::note::{Note, NoteId};
use crate::page::form::FormState;
use log::debug;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How long the error banner stays visible once shown.
pub const BANNER_HIDE_DELAY: Duration = Duration::from_secs(6);

/// User-triggered event entering the page state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The form was submitted with its current buffer.
    Submit,
    /// The commands emitted by the last submit all executed successfully.
    SubmitCompleted,
    /// A store command failed; the message is surfaced on the banner.
    MutationFailed(String),
    /// An "Update" affordance copied a note into the form.
    StartEdit(Note),
    /// A "Delete" affordance fired for the given note.
    RequestDelete(NoteId),
    /// A card body was clicked, toggling its detail overlay.
    ToggleOverlay(NoteId),
    /// The theme switch was clicked.
    ToggleTheme,
}

/// Store mutation requested by the reducer, executed by the outer layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateNote { title: String, content: String },
    UpdateNote {
        id: NoteId,
        title: String,
        content: String,
    },
    DeleteNote(NoteId),
    /// Re-fetch the note list and re-render.
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Banner {
    message: String,
    hide_at: Instant,
}

/// Whole-page UI state: form buffer, theme, banner and overlay map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub form: FormState,
    pub dark_mode: bool,
    banner: Option<Banner>,
    overlays: BTreeMap<NoteId, bool>,
}

impl PageState {
    /// Applies one event and returns the store commands it implies.
    pub fn apply(&mut self, event: PageEvent, now: Instant) -> Vec<Command> {
        match event {
            PageEvent::Submit => self.submit(now),
            PageEvent::SubmitCompleted => {
                self.form.clear();
                Vec::new()
            }
            PageEvent::MutationFailed(message) => {
                // Form buffer is deliberately left intact so the user's
                // input is not lost on a store failure.
                debug!("event=mutation_failed module=page message={message}");
                self.show_banner(message, now);
                Vec::new()
            }
            PageEvent::StartEdit(note) => {
                self.form.load_note(&note);
                Vec::new()
            }
            PageEvent::RequestDelete(id) => {
                self.overlays.remove(&id);
                vec![Command::DeleteNote(id), Command::Refresh]
            }
            PageEvent::ToggleOverlay(id) => {
                let flag = self.overlays.entry(id).or_insert(false);
                *flag = !*flag;
                Vec::new()
            }
            PageEvent::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                Vec::new()
            }
        }
    }

    fn submit(&mut self, now: Instant) -> Vec<Command> {
        if let Err(err) = self.form.validate() {
            self.show_banner(err.to_string(), now);
            return Vec::new();
        }

        let title = self.form.title.clone();
        let content = self.form.content.clone();
        let mutation = match self.form.id {
            Some(id) => Command::UpdateNote { id, title, content },
            None => Command::CreateNote { title, content },
        };
        vec![mutation, Command::Refresh]
    }

    fn show_banner(&mut self, message: String, now: Instant) {
        self.banner = Some(Banner {
            message,
            hide_at: now + BANNER_HIDE_DELAY,
        });
    }

    /// Returns the banner message while its hide deadline has not passed.
    pub fn banner_message(&self, now: Instant) -> Option<&str> {
        self.banner
            .as_ref()
            .filter(|banner| now < banner.hide_at)
            .map(|banner| banner.message.as_str())
    }

    /// Returns whether the given card's detail overlay is expanded.
    pub fn overlay_expanded(&self, id: NoteId) -> bool {
        self.overlays.get(&id).copied().unwrap_or(false)
    }

    /// Drops overlay entries for notes no longer present in the list.
    ///
    /// Called after each refresh so the overlay map tracks the rendered
    /// items instead of accumulating stale ids.
    pub fn prune_overlays(&mut self, live: &[Note]) {
        self.overlays
            .retain(|id, _| live.iter().any(|note| note.id == *id));
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, PageEvent, PageState, BANNER_HIDE_DELAY};
    use crate::model::note::Note;
    use std::time::Instant;

    #[test]
    fn banner_hides_after_delay_and_resubmit_resets_timer() {
        let mut page = PageState::default();
        let t0 = Instant::now();

        assert!(page.apply(PageEvent::Submit, t0).is_empty());
        assert!(page.banner_message(t0).is_some());
        assert!(page
            .banner_message(t0 + BANNER_HIDE_DELAY)
            .is_none());

        // A second empty submit while pending pushes the deadline out.
        let t1 = t0 + BANNER_HIDE_DELAY / 2;
        page.apply(PageEvent::Submit, t1);
        assert!(page.banner_message(t0 + BANNER_HIDE_DELAY).is_some());
        assert!(page.banner_message(t1 + BANNER_HIDE_DELAY).is_none());
    }

    #[test]
    fn prune_overlays_drops_entries_for_missing_notes() {
        let mut page = PageState::default();
        let kept = Note::new("kept", "body");
        let gone = Note::new("gone", "body");
        let now = Instant::now();

        page.apply(PageEvent::ToggleOverlay(kept.id), now);
        page.apply(PageEvent::ToggleOverlay(gone.id), now);
        page.prune_overlays(std::slice::from_ref(&kept));

        assert!(page.overlay_expanded(kept.id));
        assert!(!page.overlay_expanded(gone.id));
    }

    #[test]
    fn delete_clears_the_deleted_cards_overlay() {
        let mut page = PageState::default();
        let note = Note::new("n", "b");
        let now = Instant::now();

        page.apply(PageEvent::ToggleOverlay(note.id), now);
        let commands = page.apply(PageEvent::RequestDelete(note.id), now);

        assert_eq!(
            commands,
            vec![Command::DeleteNote(note.id), Command::Refresh]
        );
        assert!(!page.overlay_expanded(note.id));
    }
}
