//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the note store contract consumed by services.
//! - Isolate SQLite query details from page/service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Note::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod note_repo;
