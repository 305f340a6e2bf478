use tracing::debug_span;

use super::sink::HostSink;
use super::types::{SessionMode, SessionState};
use super::InputSession;

impl<S: HostSink> InputSession<S> {
    /// Finalize the composition ("CLR"): commits the best candidate, or the
    /// raw kana when there is none. Only clears the pending digit when
    /// nothing is composing.
    pub fn confirm_input(&mut self) {
        let _span = debug_span!("confirm_input").entered();
        self.state = SessionState::Idle;
        self.confirm_composition();
    }

    /// Commit `candidate` verbatim and clear the composition. The text is not
    /// checked against the candidate list.
    pub fn select_candidate(&mut self, candidate: &str) {
        let _span = debug_span!("select_candidate", candidate).entered();
        self.state = SessionState::Idle;
        self.commit_text(candidate);
        self.reset_composition();
    }

    pub(super) fn confirm_composition(&mut self) {
        if !self.is_composing() {
            return;
        }
        let text = self.composition.commit_text().to_string();
        self.commit_text(&text);
        self.reset_composition();
    }

    fn commit_text(&mut self, text: &str) {
        match self.mode {
            SessionMode::Standalone => self.committed.push_str(text),
            SessionMode::Extension => {
                self.sink.on_commit_text(text);
                self.sink.on_clear_marked_text();
            }
        }
    }

    pub(super) fn reset_composition(&mut self) {
        self.composition.clear();
        self.invalidate_conversion();
    }
}
