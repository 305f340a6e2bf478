mod composition;
pub(crate) use composition::*;

use serde::Serialize;

use bell_core::keymap::Digit;

/// Hosting context, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// The session owns the visible text; no host document.
    Standalone,
    /// Keyboard extension: finalized text goes to the host, composing text is
    /// shown there as marked text.
    Extension,
}

/// Digit-pair entry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingSecondDigit(Digit),
}

/// Input event, for callers that drive the session from a key stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Digit(Digit),
    Delete,
    Confirm,
    SelectCandidate(String),
}

/// Conversion work handed to the caller when conversion is deferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub reading: String,
    pub generation: u64,
}

/// Plain copy of everything a presentation layer needs to draw the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub mode: SessionMode,
    pub pending_digit: Option<u8>,
    pub preview: String,
    pub composing: String,
    pub committed: String,
    pub current_candidate: String,
    pub candidates: Vec<String>,
}
