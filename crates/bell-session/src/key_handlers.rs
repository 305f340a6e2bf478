use std::sync::Arc;

use tracing::{debug_span, trace};

use bell_core::keymap::{Digit, DigitPair, PairAction};

use super::sink::HostSink;
use super::types::{KeyEvent, SessionMode, SessionState};
use super::InputSession;

impl<S: HostSink> InputSession<S> {
    /// Process one input event.
    pub fn handle_key(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Digit(d) => self.press_digit(d),
            KeyEvent::Delete => self.delete_last_character(),
            KeyEvent::Confirm => self.confirm_input(),
            KeyEvent::SelectCandidate(text) => self.select_candidate(&text),
        }
    }

    /// Feed one keypad digit.
    ///
    /// The first digit of a pair is held as pending. The second resolves the
    /// pair: a voicing operator mutates the last entered kana, a mapped pair
    /// appends its text, and an unmapped pair restarts entry with this digit.
    pub fn press_digit(&mut self, digit: Digit) {
        let _span = debug_span!("press_digit", digit = digit.value()).entered();

        let SessionState::AwaitingSecondDigit(first) = self.state else {
            self.state = SessionState::AwaitingSecondDigit(digit);
            return;
        };

        let pair = DigitPair::new(first, digit);
        let keymap = Arc::clone(&self.keymap);
        match keymap.classify(pair) {
            PairAction::Voicing(voicing) => {
                self.state = SessionState::Idle;
                self.apply_voicing(voicing);
            }
            PairAction::Text(text) => {
                self.state = SessionState::Idle;
                self.append_text(text);
            }
            PairAction::Unmapped => {
                trace!(%pair, "unmapped pair, restarting with second digit");
                self.state = SessionState::AwaitingSecondDigit(digit);
            }
        }
    }

    /// Cancel a pending digit, else remove one character.
    ///
    /// Composing text is trimmed first. With nothing composing, standalone
    /// mode trims its committed text and extension mode asks the host to
    /// delete backward.
    pub fn delete_last_character(&mut self) {
        let _span = debug_span!("delete_last_character").entered();

        if let SessionState::AwaitingSecondDigit(_) = self.state {
            self.state = SessionState::Idle;
            return;
        }

        if self.is_composing() {
            self.composition.kana.pop();
            self.composing_changed();
            return;
        }

        match self.mode {
            SessionMode::Standalone => {
                self.committed.pop();
            }
            SessionMode::Extension => self.sink.on_delete_backward(),
        }
    }
}
