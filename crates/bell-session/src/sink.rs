//! Output side of a session: what the host text field is asked to do.

/// Receives host side effects. All methods default to no-ops so a sink only
/// implements what its context needs.
pub trait HostSink {
    /// Text inserted directly, bypassing composition.
    fn on_text_change(&mut self, _text: &str) {}
    /// Provisional composing text to show at the host cursor.
    fn on_marked_text_change(&mut self, _text: &str) {}
    /// Finalize text into the host document.
    fn on_commit_text(&mut self, _text: &str) {}
    /// Remove provisional text.
    fn on_clear_marked_text(&mut self) {}
    /// Delete one character of already committed host text.
    fn on_delete_backward(&mut self) {}
}

/// Discards every side effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl HostSink for NullSink {}

impl<T: HostSink + ?Sized> HostSink for Box<T> {
    fn on_text_change(&mut self, text: &str) {
        (**self).on_text_change(text)
    }

    fn on_marked_text_change(&mut self, text: &str) {
        (**self).on_marked_text_change(text)
    }

    fn on_commit_text(&mut self, text: &str) {
        (**self).on_commit_text(text)
    }

    fn on_clear_marked_text(&mut self) {
        (**self).on_clear_marked_text()
    }

    fn on_delete_backward(&mut self) {
        (**self).on_delete_backward()
    }
}

/// One recorded side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    TextChange(String),
    MarkedText(String),
    Commit(String),
    ClearMarkedText,
    DeleteBackward,
}

/// Sink that records events in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<HostEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Take recorded events, clearing the log.
    pub fn take(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replay the log against a simple text model of the host field:
    /// returns (document text, marked text).
    pub fn render(&self) -> (String, String) {
        let mut document = String::new();
        let mut marked = String::new();
        for event in &self.events {
            match event {
                HostEvent::TextChange(t) | HostEvent::Commit(t) => {
                    marked.clear();
                    document.push_str(t);
                }
                HostEvent::MarkedText(t) => marked = t.clone(),
                HostEvent::ClearMarkedText => marked.clear(),
                HostEvent::DeleteBackward => {
                    document.pop();
                }
            }
        }
        (document, marked)
    }
}

impl HostSink for EventLog {
    fn on_text_change(&mut self, text: &str) {
        self.events.push(HostEvent::TextChange(text.to_string()));
    }

    fn on_marked_text_change(&mut self, text: &str) {
        self.events.push(HostEvent::MarkedText(text.to_string()));
    }

    fn on_commit_text(&mut self, text: &str) {
        self.events.push(HostEvent::Commit(text.to_string()));
    }

    fn on_clear_marked_text(&mut self) {
        self.events.push(HostEvent::ClearMarkedText);
    }

    fn on_delete_backward(&mut self) {
        self.events.push(HostEvent::DeleteBackward);
    }
}
