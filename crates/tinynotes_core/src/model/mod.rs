//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the canonical note record used by store and page logic.
//! - Own the draft validation contract ("non-empty title and content").
//!
//! # Invariants
//! - Every persisted note is identified by a stable `NoteId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod note;
