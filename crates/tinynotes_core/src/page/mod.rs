//! Page state machine for the notes UI.
//!
//! # Responsibility
//! - Model form, theme, banner and per-card overlay state explicitly.
//! - Reduce user events into store commands without performing I/O.
//!
//! # Invariants
//! - Reducers are pure given `(state, event, now)`; all I/O happens in the
//!   layer executing the emitted commands.
//! - The form is only cleared after a mutation is reported successful, so
//!   user input survives store failures.

pub mod card;
pub mod controller;
pub mod form;
