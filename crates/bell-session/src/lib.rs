//! Digit-pair input session.
//!
//! `InputSession` turns a stream of digit presses and control actions into
//! composing text, candidates and committed text. One type serves both the
//! standalone demo screen and the keyboard extension; the difference is the
//! `SessionMode` fixed at construction and the `HostSink` that receives
//! side effects.

pub(crate) mod types;

mod candidate_gen;
mod commit;
mod composing;
mod key_handlers;
mod response;
mod sink;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use bell_core::converter::KanaConverter;
use bell_core::keymap::Keymap;
use bell_core::settings::{settings, Settings};

pub use bell_core::keymap::Digit;
pub use sink::{EventLog, HostEvent, HostSink, NullSink};
pub use types::{ConversionRequest, KeyEvent, SessionMode, SessionSnapshot, SessionState};

use types::Composition;

/// Stateful digit-pair input session.
pub struct InputSession<S: HostSink = NullSink> {
    keymap: Arc<Keymap>,
    converter: Option<Arc<dyn KanaConverter>>,
    sink: S,
    mode: SessionMode,

    state: SessionState,
    composition: Composition,
    /// Finalized text. Only grows in standalone mode.
    committed: String,

    // Settings
    /// Resolved characters skip composition and are inserted directly.
    direct_input: bool,
    /// When true, composing changes record a `ConversionRequest` instead of
    /// calling the converter synchronously.
    defer_conversion: bool,
    max_candidates: usize,
    max_composing_length: usize,
    preview_cursor: String,

    conversion_generation: u64,
    conversion_request: Option<ConversionRequest>,
}

impl InputSession<NullSink> {
    /// Standalone session without host callbacks.
    pub fn standalone(keymap: Arc<Keymap>, converter: Option<Arc<dyn KanaConverter>>) -> Self {
        Self::new(keymap, SessionMode::Standalone, converter, NullSink)
    }
}

impl<S: HostSink> InputSession<S> {
    pub fn new(
        keymap: Arc<Keymap>,
        mode: SessionMode,
        converter: Option<Arc<dyn KanaConverter>>,
        sink: S,
    ) -> Self {
        let mut session = Self {
            keymap,
            converter,
            sink,
            mode,
            state: SessionState::Idle,
            composition: Composition::default(),
            committed: String::new(),
            direct_input: false,
            defer_conversion: false,
            max_candidates: 0,
            max_composing_length: 0,
            preview_cursor: String::new(),
            conversion_generation: 0,
            conversion_request: None,
        };
        session.apply_settings(settings());
        session
    }

    pub fn apply_settings(&mut self, s: &Settings) {
        self.max_candidates = s.candidates.max_results;
        self.max_composing_length = s.composing.max_length;
        self.preview_cursor = s.preview.cursor.clone();
    }

    pub fn set_direct_input(&mut self, enabled: bool) {
        self.direct_input = enabled;
    }

    pub fn set_defer_conversion(&mut self, enabled: bool) {
        self.defer_conversion = enabled;
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pending_digit(&self) -> Option<Digit> {
        match self.state {
            SessionState::AwaitingSecondDigit(d) => Some(d),
            SessionState::Idle => None,
        }
    }

    /// Live preview of a half-entered pair, e.g. `"2_"`. Empty when idle.
    pub fn preview(&self) -> String {
        match self.state {
            SessionState::AwaitingSecondDigit(d) => format!("{d}{}", self.preview_cursor),
            SessionState::Idle => String::new(),
        }
    }

    pub fn composing_text(&self) -> &str {
        &self.composition.kana
    }

    pub fn is_composing(&self) -> bool {
        !self.composition.is_empty()
    }

    /// Finalized text. Always empty in extension mode.
    pub fn committed_text(&self) -> &str {
        &self.committed
    }

    pub fn current_candidate(&self) -> &str {
        &self.composition.candidates.best
    }

    pub fn candidates(&self) -> &[String] {
        &self.composition.candidates.surfaces
    }

    /// The demo screen's output line: committed + composing + preview.
    pub fn display_text(&self) -> String {
        format!("{}{}{}", self.committed, self.composition.kana, self.preview())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            pending_digit: self.pending_digit().map(Digit::value),
            preview: self.preview(),
            composing: self.composition.kana.clone(),
            committed: self.committed.clone(),
            current_candidate: self.composition.candidates.best.clone(),
            candidates: self.composition.candidates.surfaces.clone(),
        }
    }

    /// Clear the standalone output area. Composition is left alone.
    pub fn clear_committed(&mut self) {
        self.committed.clear();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
