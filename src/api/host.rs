//! Foreign callback traits implemented on the Swift side.

use bell_session::HostEvent;

use super::BellConversion;

/// Host text field of the keyboard extension.
#[uniffi::export(with_foreign)]
pub trait BellHost: Send + Sync {
    fn on_text_change(&self, text: String);
    fn on_marked_text_change(&self, text: String);
    fn on_commit_text(&self, text: String);
    fn on_clear_marked_text(&self);
    fn on_delete_backward(&self);
}

/// Kana-kanji converter. Never called with an empty reading.
#[uniffi::export(with_foreign)]
pub trait BellConverter: Send + Sync {
    fn convert(&self, reading: String) -> BellConversion;
}

/// Replay recorded session side effects on the host, in order.
pub(super) fn dispatch(host: &dyn BellHost, events: Vec<HostEvent>) {
    for event in events {
        match event {
            HostEvent::TextChange(text) => host.on_text_change(text),
            HostEvent::MarkedText(text) => host.on_marked_text_change(text),
            HostEvent::Commit(text) => host.on_commit_text(text),
            HostEvent::ClearMarkedText => host.on_clear_marked_text(),
            HostEvent::DeleteBackward => host.on_delete_backward(),
        }
    }
}
