mod simulator;

use std::sync::{Arc, Mutex};

use bell_core::converter::{Conversion, KanaConverter};
use bell_core::keymap::{Digit, Keymap};
use bell_core::settings::{parse_settings_toml, Settings, DEFAULT_SETTINGS_TOML};

use super::{EventLog, HostSink, InputSession, SessionMode};

pub(super) fn make_keymap() -> Arc<Keymap> {
    Arc::new(Keymap::default_keymap())
}

/// Converter that answers every reading with one fixed candidate.
pub(super) fn fixed_converter(candidate: &str) -> Arc<dyn KanaConverter> {
    let candidate = candidate.to_string();
    Arc::new(move |_: &str| Conversion::new(candidate.clone(), vec![candidate.clone()]))
}

/// Converter that records every reading it is asked for.
pub(super) struct RecordingConverter {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingConverter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl KanaConverter for RecordingConverter {
    fn convert(&self, reading: &str) -> Conversion {
        assert!(!reading.is_empty(), "converter called with empty reading");
        self.calls.lock().unwrap().push(reading.to_string());
        Conversion::new(format!("[{reading}]"), vec![format!("[{reading}]")])
    }
}

pub(super) fn standalone(converter: Option<Arc<dyn KanaConverter>>) -> InputSession<EventLog> {
    InputSession::new(make_keymap(), SessionMode::Standalone, converter, EventLog::new())
}

pub(super) fn extension(converter: Option<Arc<dyn KanaConverter>>) -> InputSession<EventLog> {
    InputSession::new(make_keymap(), SessionMode::Extension, converter, EventLog::new())
}

pub(super) fn settings_with(from: &str, to: &str) -> Settings {
    parse_settings_toml(&DEFAULT_SETTINGS_TOML.replace(from, to)).unwrap()
}

// Helper: press each digit of `digits`, ignoring spaces
pub(super) fn type_digits<S: HostSink>(session: &mut InputSession<S>, digits: &str) {
    for ch in digits.chars().filter(|c| !c.is_whitespace()) {
        let digit = Digit::from_char(ch).unwrap();
        session.press_digit(digit);
    }
}

pub(super) fn digit(v: u8) -> Digit {
    Digit::new(v).unwrap()
}
