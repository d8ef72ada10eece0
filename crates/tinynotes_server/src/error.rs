//! Server-side error type and HTTP status mapping.
//!
//! # Responsibility
//! - Collapse core-layer errors into one type handlers can return.
//! - Map semantic failures onto status codes: validation -> 422,
//!   missing note -> 404, everything else -> 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::warn;
use serde_json::json;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tinynotes_core::{NoteServiceError, RepoError};

pub type AppResult<T> = Result<T, AppError>;

/// Failure surfaced by a request handler.
#[derive(Debug)]
pub enum AppError {
    /// Note use-case failure from the core service.
    Service(NoteServiceError),
    /// Repository bootstrap failure (unmigrated or broken schema).
    Repo(RepoError),
    /// A shared-state mutex was poisoned by a panicking holder.
    StatePoisoned,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::StatePoisoned => write!(f, "shared state lock poisoned"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::StatePoisoned => None,
        }
    }
}

impl From<NoteServiceError> for AppError {
    fn from(value: NoteServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl AppError {
    /// Status code this failure maps to on the JSON API.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(NoteServiceError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(NoteServiceError::NoteNotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!("event=request_failed module=server status=error error={self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
