//! Bell engine: UniFFI surface for the pager-style keyboard.
//!
//! The input logic lives in `bell-core` (character map, voicing, conversion)
//! and `bell-session` (the input state machine). This crate wraps them for the
//! Swift keyboard extension and demo app.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use bell_core;
pub use bell_session;
