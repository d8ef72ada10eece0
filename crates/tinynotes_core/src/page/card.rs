//! Card/list item view model.
//!
//! # Responsibility
//! - Project one note into what the list renders: title, content, the
//!   "see more" marker and the overlay flag.
//!
//! # Invariants
//! - The "see more" marker is a display-length heuristic only; stored
//!   content is never truncated.
//! - Overlay state comes from the page state, not from the card itself.

use crate::model::note::Note;

/// Content length above which the card shows a "see more" marker.
pub const SEE_MORE_MAX_CHARS: usize = 63;

/// Render-ready projection of one note in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub content: String,
    /// True when the content is long enough to warrant the marker.
    pub see_more: bool,
    /// True when this card's detail overlay is open.
    pub expanded: bool,
}

impl CardView {
    /// Builds the card projection for one note.
    pub fn new(note: &Note, expanded: bool) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            see_more: note.content.chars().count() > SEE_MORE_MAX_CHARS,
            expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CardView, SEE_MORE_MAX_CHARS};
    use crate::model::note::Note;

    fn card_for_content_len(len: usize) -> CardView {
        let note = Note::new("t", "x".repeat(len));
        CardView::new(&note, false)
    }

    #[test]
    fn see_more_boundary_is_exactly_sixty_three() {
        assert!(!card_for_content_len(60).see_more);
        assert!(!card_for_content_len(SEE_MORE_MAX_CHARS).see_more);
        assert!(card_for_content_len(SEE_MORE_MAX_CHARS + 1).see_more);
        assert!(card_for_content_len(70).see_more);
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        let note = Note::new("t", "é".repeat(SEE_MORE_MAX_CHARS));
        assert!(!CardView::new(&note, false).see_more);
    }
}
