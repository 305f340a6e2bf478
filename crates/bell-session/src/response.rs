use super::sink::HostSink;
use super::types::SessionMode;
use super::InputSession;

impl<S: HostSink> InputSession<S> {
    /// Mirror the raw composing kana to the host as marked text (extension
    /// mode only). Candidates are offered separately, never shown inline.
    pub(super) fn publish_marked_text(&mut self) {
        if self.mode != SessionMode::Extension {
            return;
        }
        if self.composition.is_empty() {
            self.sink.on_clear_marked_text();
        } else {
            self.sink.on_marked_text_change(&self.composition.kana);
        }
    }
}
