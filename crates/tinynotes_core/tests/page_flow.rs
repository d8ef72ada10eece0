use std::time::Instant;
use tinynotes_core::{
    CardView, Command, Note, PageEvent, PageState, BANNER_HIDE_DELAY,
};
use uuid::Uuid;

fn submit_with(page: &mut PageState, title: &str, content: &str, now: Instant) -> Vec<Command> {
    page.form.title = title.to_string();
    page.form.content = content.to_string();
    page.apply(PageEvent::Submit, now)
}

#[test]
fn empty_submission_emits_no_commands_and_shows_banner() {
    let now = Instant::now();

    for (title, content) in [("", ""), ("title only", ""), ("", "content only")] {
        let mut page = PageState::default();
        let commands = submit_with(&mut page, title, content, now);
        assert!(commands.is_empty(), "({title:?}, {content:?}) issued commands");
        assert!(page.banner_message(now).is_some());
    }
}

#[test]
fn valid_new_submission_emits_exactly_one_create_then_refresh() {
    let mut page = PageState::default();
    let now = Instant::now();

    let commands = submit_with(&mut page, "A", "B", now);
    assert_eq!(
        commands,
        vec![
            Command::CreateNote {
                title: "A".to_string(),
                content: "B".to_string(),
            },
            Command::Refresh,
        ]
    );
    assert!(page.banner_message(now).is_none());

    // Form clears only once the mutation is reported successful.
    assert_eq!(page.form.title, "A");
    page.apply(PageEvent::SubmitCompleted, now);
    assert!(page.form.is_blank());
}

#[test]
fn editing_submission_emits_single_in_place_update() {
    let mut page = PageState::default();
    let now = Instant::now();
    let original = Note::new("old title", "old content");

    page.apply(PageEvent::StartEdit(original.clone()), now);
    assert_eq!(page.form.id, Some(original.id));

    page.form.title = "new title".to_string();
    let commands = page.apply(PageEvent::Submit, now);
    assert_eq!(
        commands,
        vec![
            Command::UpdateNote {
                id: original.id,
                title: "new title".to_string(),
                content: "old content".to_string(),
            },
            Command::Refresh,
        ]
    );
    // No delete of the original id: the note keeps its identity.
    assert!(!commands
        .iter()
        .any(|command| matches!(command, Command::DeleteNote(_))));

    page.apply(PageEvent::SubmitCompleted, now);
    assert!(page.form.is_blank());
}

#[test]
fn delete_request_emits_delete_then_refresh() {
    let mut page = PageState::default();
    let now = Instant::now();
    let id = Uuid::new_v4();

    let commands = page.apply(PageEvent::RequestDelete(id), now);
    assert_eq!(commands, vec![Command::DeleteNote(id), Command::Refresh]);
}

#[test]
fn store_failure_keeps_form_and_surfaces_banner() {
    let mut page = PageState::default();
    let now = Instant::now();

    submit_with(&mut page, "A", "B", now);
    page.apply(
        PageEvent::MutationFailed("note store unavailable".to_string()),
        now,
    );

    assert_eq!(page.form.title, "A");
    assert_eq!(page.form.content, "B");
    assert_eq!(page.banner_message(now), Some("note store unavailable"));
}

#[test]
fn banner_auto_hides_after_fixed_delay() {
    let mut page = PageState::default();
    let t0 = Instant::now();

    submit_with(&mut page, "", "", t0);
    assert!(page.banner_message(t0).is_some());
    assert!(page
        .banner_message(t0 + BANNER_HIDE_DELAY / 2)
        .is_some());
    assert!(page.banner_message(t0 + BANNER_HIDE_DELAY).is_none());
}

#[test]
fn overlay_toggles_are_independent_per_card() {
    let mut page = PageState::default();
    let now = Instant::now();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    page.apply(PageEvent::ToggleOverlay(first), now);
    assert!(page.overlay_expanded(first));
    assert!(!page.overlay_expanded(second));

    page.apply(PageEvent::ToggleOverlay(second), now);
    assert!(page.overlay_expanded(first));
    assert!(page.overlay_expanded(second));

    // Collapsed -> expanded -> collapsed, indefinitely.
    page.apply(PageEvent::ToggleOverlay(first), now);
    assert!(!page.overlay_expanded(first));
    page.apply(PageEvent::ToggleOverlay(first), now);
    assert!(page.overlay_expanded(first));
}

#[test]
fn theme_toggle_flips_dark_mode_without_commands() {
    let mut page = PageState::default();
    let now = Instant::now();

    assert!(!page.dark_mode);
    assert!(page.apply(PageEvent::ToggleTheme, now).is_empty());
    assert!(page.dark_mode);
    page.apply(PageEvent::ToggleTheme, now);
    assert!(!page.dark_mode);
}

#[test]
fn card_view_reflects_overlay_state_from_page() {
    let mut page = PageState::default();
    let now = Instant::now();
    let note = Note::new("title", "short body");

    let collapsed = CardView::new(&note, page.overlay_expanded(note.id));
    assert!(!collapsed.expanded);

    page.apply(PageEvent::ToggleOverlay(note.id), now);
    let expanded = CardView::new(&note, page.overlay_expanded(note.id));
    assert!(expanded.expanded);
    assert!(!expanded.see_more);
}
