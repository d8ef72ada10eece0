//! HTTP layer for TinyNotes: configuration, shared state, rendering and
//! routing. The binary in `main.rs` is a thin bootstrap over this crate.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
