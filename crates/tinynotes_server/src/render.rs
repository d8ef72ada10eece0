//! Server-side HTML rendering.
//!
//! # Responsibility
//! - Render the whole notes page as a pure function of page state, the
//!   fetched note list, and the current instant.
//! - Escape every piece of user-provided text.
//!
//! # Invariants
//! - No I/O and no state mutation happens here.
//! - Overlay and see-more decisions come from `CardView`, never from
//!   ad-hoc checks in the markup code.

use std::time::Instant;
use tinynotes_core::{CardView, Note, PageState};

const PAGE_STYLE: &str = "\
body{font-family:sans-serif;max-width:40rem;margin:0 auto;padding:1rem}\
body.dark{background:#0f172a;color:#e2e8f0}\
.banner{background:#f87171;color:#fff;padding:.5rem 1rem;border-radius:4px}\
form.note-form{display:flex;flex-direction:column;gap:.5rem;margin:1rem 0}\
ul.notes{list-style:none;padding:0}\
li.card{border-bottom:1px solid #64748b;padding:.5rem 0}\
.see-more{font-style:italic;font-size:.8rem}\
.overlay{border:1px solid #64748b;padding:.5rem;margin-top:.5rem;white-space:pre-wrap}";

/// Renders the full notes page.
pub fn render_page(page: &PageState, notes: &[Note], now: Instant) -> String {
    let mut html = String::with_capacity(2048);
    let body_class = if page.dark_mode { " class=\"dark\"" } else { "" };

    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str("<title>TinyNotes</title>");
    html.push_str(&format!("<style>{PAGE_STYLE}</style>"));
    html.push_str(&format!("</head><body{body_class}>"));

    html.push_str("<form method=\"post\" action=\"/page/theme\"><button type=\"submit\">");
    html.push_str(if page.dark_mode { "Light" } else { "Dark" });
    html.push_str("</button></form>");

    if let Some(message) = page.banner_message(now) {
        html.push_str(&format!(
            "<div class=\"banner\" role=\"alert\">{}</div>",
            escape_html(message)
        ));
    }

    html.push_str("<h1>Notes</h1>");
    render_form(&mut html, page);

    html.push_str("<ul class=\"notes\">");
    for note in notes {
        render_card(&mut html, note, CardView::new(note, page.overlay_expanded(note.id)));
    }
    html.push_str("</ul>");

    html.push_str("</body></html>");
    html
}

fn render_form(html: &mut String, page: &PageState) {
    let id_value = page
        .form
        .id
        .map(|id| id.to_string())
        .unwrap_or_default();

    html.push_str("<form class=\"note-form\" method=\"post\" action=\"/submit\">");
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"id\" value=\"{}\">",
        escape_html(&id_value)
    ));
    html.push_str(&format!(
        "<input type=\"text\" name=\"title\" placeholder=\"Title\" value=\"{}\">",
        escape_html(&page.form.title)
    ));
    html.push_str(&format!(
        "<textarea name=\"content\" placeholder=\"Content\">{}</textarea>",
        escape_html(&page.form.content)
    ));
    html.push_str("<button type=\"submit\">Add +</button></form>");
}

fn render_card(html: &mut String, note: &Note, card: CardView) {
    html.push_str("<li class=\"card\">");

    // The card body is a button so a plain form click toggles the overlay.
    html.push_str(&format!(
        "<form method=\"post\" action=\"/page/overlay/{}\"><button type=\"submit\" class=\"card-body\">",
        note.id
    ));
    html.push_str(&format!("<h3>{}</h3>", escape_html(&card.title)));
    html.push_str(&format!("<p>{}</p>", escape_html(&card.content)));
    if card.see_more {
        html.push_str("<span class=\"see-more\">See more...</span>");
    }
    html.push_str("</button></form>");

    html.push_str(&format!(
        "<form method=\"post\" action=\"/notes/{}/edit\"><button type=\"submit\">Update</button></form>",
        note.id
    ));
    html.push_str(&format!(
        "<form method=\"post\" action=\"/notes/{}/delete\"><button type=\"submit\">X</button></form>",
        note.id
    ));

    if card.expanded {
        html.push_str(&format!(
            "<div class=\"overlay\"><h3>{}</h3><p>{}</p></div>",
            escape_html(&card.title),
            escape_html(&card.content)
        ));
    }

    html.push_str("</li>");
}

/// Escapes text for safe interpolation into HTML bodies and attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, render_page};
    use std::time::Instant;
    use tinynotes_core::{Note, PageEvent, PageState, BANNER_HIDE_DELAY};

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>\"x\" & 'y'</script>"),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn page_escapes_user_content() {
        let note = Note::new("<b>t</b>", "a & b");
        let html = render_page(&PageState::default(), &[note], Instant::now());

        assert!(!html.contains("<b>t</b>"));
        assert!(html.contains("&lt;b&gt;t&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn banner_renders_only_while_deadline_pending() {
        let mut page = PageState::default();
        let t0 = Instant::now();
        page.apply(PageEvent::Submit, t0);

        let visible = render_page(&page, &[], t0);
        assert!(visible.contains("class=\"banner\""));

        let expired = render_page(&page, &[], t0 + BANNER_HIDE_DELAY);
        assert!(!expired.contains("class=\"banner\""));
    }

    #[test]
    fn see_more_marker_follows_content_length() {
        let short = Note::new("s", "x".repeat(60));
        let long = Note::new("l", "y".repeat(70));
        let html = render_page(&PageState::default(), &[short, long], Instant::now());

        assert_eq!(html.matches("See more...").count(), 1);
    }

    #[test]
    fn expanded_card_renders_overlay_section() {
        let note = Note::new("t", "body");
        let mut page = PageState::default();
        let now = Instant::now();

        let collapsed = render_page(&page, std::slice::from_ref(&note), now);
        assert!(!collapsed.contains("class=\"overlay\""));

        page.apply(PageEvent::ToggleOverlay(note.id), now);
        let expanded = render_page(&page, std::slice::from_ref(&note), now);
        assert!(expanded.contains("class=\"overlay\""));
    }

    #[test]
    fn form_preserves_buffer_values_and_edit_target() {
        let note = Note::new("editing", "buffer");
        let mut page = PageState::default();
        page.apply(PageEvent::StartEdit(note.clone()), Instant::now());

        let html = render_page(&page, &[], Instant::now());
        assert!(html.contains("value=\"editing\""));
        assert!(html.contains(">buffer</textarea>"));
        assert!(html.contains(&note.id.to_string()));
    }
}
