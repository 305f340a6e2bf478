use tracing::{debug, trace};

use bell_core::voicing::Voicing;

use super::sink::HostSink;
use super::types::{voice_last_char, SessionMode};
use super::InputSession;

impl<S: HostSink> InputSession<S> {
    pub(super) fn append_text(&mut self, text: &str) {
        if self.direct_input {
            if self.mode == SessionMode::Standalone {
                self.committed.push_str(text);
            }
            self.sink.on_text_change(text);
            return;
        }

        // Overflow: confirm what is there and start a fresh composition
        let incoming = text.chars().count();
        if self.is_composing()
            && self.composition.char_count() + incoming > self.max_composing_length
        {
            debug!(
                len = self.composition.char_count(),
                max = self.max_composing_length,
                "composing overflow, confirming"
            );
            self.confirm_composition();
        }

        self.composition.kana.push_str(text);
        self.composing_changed();
    }

    /// Mutate the most recently entered kana. Composing text takes priority;
    /// standalone mode falls back to the end of its committed text. Host text
    /// is never touched.
    pub(super) fn apply_voicing(&mut self, voicing: Voicing) {
        if self.is_composing() {
            if voice_last_char(&mut self.composition.kana, voicing) {
                self.composing_changed();
            } else {
                trace!(?voicing, "no voiced form for last composing char");
            }
            return;
        }

        if self.mode == SessionMode::Standalone && !voice_last_char(&mut self.committed, voicing) {
            trace!(?voicing, "no voiced form for last committed char");
        }
    }

    /// Refresh candidates and marked text after any composing change.
    pub(super) fn composing_changed(&mut self) {
        self.refresh_conversion();
        self.publish_marked_text();
    }
}
