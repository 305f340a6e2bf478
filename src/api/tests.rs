use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock};

use super::*;

#[derive(Default)]
struct RecordingHost {
    calls: Mutex<Vec<String>>,
}

impl RecordingHost {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl BellHost for RecordingHost {
    fn on_text_change(&self, text: String) {
        self.calls.lock().unwrap().push(format!("text:{text}"));
    }
    fn on_marked_text_change(&self, text: String) {
        self.calls.lock().unwrap().push(format!("marked:{text}"));
    }
    fn on_commit_text(&self, text: String) {
        self.calls.lock().unwrap().push(format!("commit:{text}"));
    }
    fn on_clear_marked_text(&self) {
        self.calls.lock().unwrap().push("clear".to_string());
    }
    fn on_delete_backward(&self) {
        self.calls.lock().unwrap().push("delete".to_string());
    }
}

struct FixedConverter;

impl BellConverter for FixedConverter {
    fn convert(&self, reading: String) -> BellConversion {
        BellConversion {
            best: format!("<{reading}>"),
            candidates: vec![format!("<{reading}>"), reading],
        }
    }
}

fn press(session: &BellSession, digits: &str) {
    for ch in digits.chars().filter(|c| !c.is_whitespace()) {
        session.press_digit(ch.to_digit(10).unwrap() as u8).unwrap();
    }
}

#[test]
fn test_engine_version() {
    assert_eq!(engine_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_keymap_functions() {
    assert_eq!(keymap_lookup(1, 1).as_deref(), Some("あ"));
    assert_eq!(keymap_lookup(0, 4), None);
    assert_eq!(keymap_lookup(1, 10), None);
    assert_eq!(keymap_rows(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);

    let row0 = keymap_row(0).unwrap();
    let codes: Vec<&str> = row0.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, ["00", "01", "02", "03"]);
    assert!(matches!(keymap_row(10), Err(BellError::InvalidInput { .. })));
}

#[test]
fn test_default_configs_are_exposed() {
    assert!(keymap_default_config().contains("[pairs]"));
    assert!(settings_default_config().contains("[candidates]"));
}

#[test]
fn test_load_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml").to_string_lossy().into_owned();
    assert!(matches!(
        keymap_load_config(missing.clone()),
        Err(BellError::Io { .. })
    ));
    assert!(matches!(
        settings_load_config(missing),
        Err(BellError::Io { .. })
    ));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[pairs]\n\"7\" = \"x\"\n").unwrap();
    assert!(matches!(
        keymap_load_config(bad.to_string_lossy().into_owned()),
        Err(BellError::InvalidData { .. })
    ));
}

#[test]
fn test_standalone_session_snapshot() {
    let session = BellSession::new(BellMode::Standalone, Some(Arc::new(FixedConverter)), None);
    press(&session, "21 04 3");

    let snap = session.snapshot();
    assert_eq!(snap.mode, BellMode::Standalone);
    assert_eq!(snap.composing, "が");
    assert_eq!(snap.pending_digit, Some(3));
    assert_eq!(snap.current_candidate, "<が>");
    assert_eq!(snap.candidates, ["<が>", "が"]);

    session.confirm_input();
    assert_eq!(session.display_text(), "<が>");
    session.clear_committed();
    assert_eq!(session.display_text(), "");
}

#[test]
fn test_press_digit_rejects_out_of_range() {
    let session = BellSession::new(BellMode::Standalone, None, None);
    assert!(matches!(
        session.press_digit(10),
        Err(BellError::InvalidInput { .. })
    ));
    assert_eq!(session.snapshot().pending_digit, None);
}

#[test]
fn test_extension_session_drives_host() {
    let host = Arc::new(RecordingHost::default());
    let session = BellSession::new(
        BellMode::Extension,
        Some(Arc::new(FixedConverter)),
        Some(host.clone()),
    );

    press(&session, "11 12");
    session.confirm_input();
    session.delete_last_character();
    session.select_candidate("藍".into());

    assert_eq!(
        host.calls(),
        [
            "marked:あ",
            "marked:あい",
            "commit:<あい>",
            "clear",
            "delete",
            "commit:藍",
            "clear"
        ]
    );
    assert_eq!(session.snapshot().committed, "");
}

#[test]
fn test_direct_input_reaches_host() {
    let host = Arc::new(RecordingHost::default());
    let session = BellSession::new(BellMode::Extension, None, Some(host.clone()));
    session.set_direct_input(true);
    press(&session, "81 83");
    assert_eq!(host.calls(), ["text:や", "text:ゆ"]);
}

/// Host that reads the session from inside its callbacks.
struct ReentrantHost {
    session: OnceLock<Arc<BellSession>>,
    seen: Mutex<Vec<String>>,
}

impl BellHost for ReentrantHost {
    fn on_text_change(&self, _text: String) {}
    fn on_marked_text_change(&self, _text: String) {
        if let Some(session) = self.session.get() {
            self.seen.lock().unwrap().push(session.snapshot().composing);
        }
    }
    fn on_commit_text(&self, _text: String) {}
    fn on_clear_marked_text(&self) {}
    fn on_delete_backward(&self) {}
}

#[test]
fn test_host_may_call_back_into_session() {
    let host = Arc::new(ReentrantHost {
        session: OnceLock::new(),
        seen: Mutex::new(Vec::new()),
    });
    let session = BellSession::new(BellMode::Extension, None, Some(host.clone()));
    let _ = host.session.set(Arc::clone(&session));

    press(&session, "11 12");
    assert_eq!(*host.seen.lock().unwrap(), ["あ", "あい"]);
}

/// Converter that reads the session while converting.
struct ReentrantConverter {
    session: OnceLock<Arc<BellSession>>,
    seen: Mutex<Vec<String>>,
}

impl BellConverter for ReentrantConverter {
    fn convert(&self, reading: String) -> BellConversion {
        if let Some(session) = self.session.get() {
            self.seen.lock().unwrap().push(session.snapshot().composing);
        }
        BellConversion {
            best: format!("<{reading}>"),
            candidates: vec![format!("<{reading}>")],
        }
    }
}

#[test]
fn test_converter_may_call_back_into_session() {
    let converter = Arc::new(ReentrantConverter {
        session: OnceLock::new(),
        seen: Mutex::new(Vec::new()),
    });
    let session = BellSession::new(BellMode::Standalone, Some(converter.clone()), None);
    let _ = converter.session.set(Arc::clone(&session));

    press(&session, "11 12");
    assert_eq!(*converter.seen.lock().unwrap(), ["あ", "あい"]);
    assert_eq!(session.snapshot().current_candidate, "<あい>");

    session.confirm_input();
    assert_eq!(session.display_text(), "<あい>");
}

#[test]
fn test_host_deferral_bypasses_converter() {
    let converter = Arc::new(ReentrantConverter {
        session: OnceLock::new(),
        seen: Mutex::new(Vec::new()),
    });
    let session = BellSession::new(BellMode::Standalone, Some(converter.clone()), None);
    let _ = converter.session.set(Arc::clone(&session));
    session.set_defer_conversion(true);
    press(&session, "11");

    assert!(converter.seen.lock().unwrap().is_empty());
    assert_eq!(session.snapshot().candidates, ["あ"]);
    let req = session.take_conversion_request().unwrap();
    assert_eq!(req.reading, "あ");
}

#[test]
fn test_deferred_conversion_roundtrip() {
    let session = BellSession::new(BellMode::Standalone, None, None);
    session.set_defer_conversion(true);
    press(&session, "21 31");

    let req = session.take_conversion_request().unwrap();
    assert_eq!(req.reading, "かさ");
    assert!(session.take_conversion_request().is_none());

    let result = BellConversion {
        best: "傘".into(),
        candidates: vec!["傘".into(), "笠".into()],
    };
    assert!(!session.receive_conversion(req.reading.clone(), req.generation + 1, result.clone()));
    assert!(session.receive_conversion(req.reading, req.generation, result));
    assert_eq!(session.snapshot().candidates, ["傘", "笠"]);
    assert!(session.is_composing());
}

#[test]
fn test_dictionary_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[entries]\n\"でんわ\" = [\"電話\"]").unwrap();
    let dict = dictionary_load(file.path().to_string_lossy().into_owned()).unwrap();
    assert_eq!(dict.convert("でんわ".into()).best, "電話");

    let session = BellSession::new(BellMode::Standalone, Some(dict), None);
    press(&session, "44 04 03 01");
    session.confirm_input();
    assert_eq!(session.snapshot().committed, "電話");
}

#[test]
fn test_dictionary_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("none.toml").to_string_lossy().into_owned();
    assert!(matches!(dictionary_load(missing), Err(BellError::Io { .. })));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "entries = 3\n").unwrap();
    assert!(matches!(
        dictionary_load(bad.to_string_lossy().into_owned()),
        Err(BellError::InvalidData { .. })
    ));
}
