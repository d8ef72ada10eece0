//! HTTP routing and request handlers.
//!
//! # Responsibility
//! - Wire the server-rendered page flow and the JSON note API onto the
//!   shared application state.
//! - Keep handlers thin: parse, call into `AppState`, shape the response.
//!
//! # Invariants
//! - Page-flow handlers always answer with a redirect to `/`; outcomes
//!   (including failures) are visible on the re-rendered page.
//! - JSON handlers never redirect; they map errors to status codes.

use crate::error::AppResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::{get, post, put};
use axum::{Form, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tinynotes_core::{FormState, Note, NoteId};
use uuid::Uuid;

/// Builds the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Server-rendered page flow
        .route("/", get(index))
        .route("/submit", post(submit))
        .route("/notes/{id}/edit", post(edit_note))
        .route("/notes/{id}/delete", post(delete_note_card))
        .route("/page/theme", post(toggle_theme))
        .route("/page/overlay/{id}", post(toggle_overlay))
        // JSON note API
        .route("/api/notes", get(api_list))
        .route("/api/create", post(api_create))
        .route("/api/note/{id}", put(api_update).delete(api_delete))
        // Probes
        .route("/healthz", get(healthz))
        .with_state(state)
}

// --- page flow ---

async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    Ok(Html(state.render_index()?))
}

/// Form-encoded submit payload; `id` is empty while composing a new note.
#[derive(Debug, Deserialize)]
struct SubmitPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    id: String,
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<SubmitPayload>,
) -> AppResult<Redirect> {
    let id = if payload.id.is_empty() {
        None
    } else {
        match Uuid::parse_str(&payload.id) {
            Ok(id) => Some(id),
            Err(_) => {
                state.report_failure("submitted note id is not valid")?;
                return Ok(Redirect::to("/"));
            }
        }
    };

    state.submit_form(FormState {
        title: payload.title,
        content: payload.content,
        id,
    })?;
    Ok(Redirect::to("/"))
}

async fn edit_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
) -> AppResult<Redirect> {
    if !state.start_edit(id)? {
        state.report_failure(format!("note not found: {id}"))?;
    }
    Ok(Redirect::to("/"))
}

async fn delete_note_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
) -> AppResult<Redirect> {
    state.request_delete(id)?;
    Ok(Redirect::to("/"))
}

async fn toggle_theme(State(state): State<Arc<AppState>>) -> AppResult<Redirect> {
    state.toggle_theme()?;
    Ok(Redirect::to("/"))
}

async fn toggle_overlay(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
) -> AppResult<Redirect> {
    state.toggle_overlay(id)?;
    Ok(Redirect::to("/"))
}

// --- JSON note API ---

/// JSON note payload; a client-sent `id` is accepted and ignored by
/// create semantics.
#[derive(Debug, Deserialize)]
struct NotePayload {
    title: String,
    content: String,
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<String>,
}

async fn api_list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Note>>> {
    Ok(Json(state.list_notes()?))
}

async fn api_create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NotePayload>,
) -> AppResult<(StatusCode, Json<Note>)> {
    let note = state.create_note(&payload.title, &payload.content)?;
    Ok((StatusCode::CREATED, Json(note)))
}

async fn api_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
    Json(payload): Json<NotePayload>,
) -> AppResult<Json<Note>> {
    Ok(Json(state.update_note(id, &payload.title, &payload.content)?))
}

async fn api_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
) -> AppResult<StatusCode> {
    state.delete_note(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn healthz() -> &'static str {
    tinynotes_core::ping()
}
