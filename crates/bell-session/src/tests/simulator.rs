use bell_core::converter::DictionaryConverter;

use super::*;
use crate::SessionSnapshot;

const TEST_DICT: &str = r#"
[entries]
"でんわ" = ["電話"]
"でん" = ["電", "田"]
"あい" = ["愛", "藍", "哀"]
"かさ" = ["傘", "笠"]
"#;

/// Headless pager keyboard for end-to-end tests.
///
/// Drives an `InputSession` from a script: digits are keypad presses, `<` is
/// delete and `.` is confirm. Whitespace is ignored. Conversion is deferred
/// and resolved after every key, matching a host that converts off the input
/// thread.
pub(super) struct HeadlessPager {
    pub session: InputSession<EventLog>,
    converter: DictionaryConverter,
}

impl HeadlessPager {
    pub fn new(mode: SessionMode) -> Self {
        let converter = DictionaryConverter::from_toml(TEST_DICT).unwrap();
        let mut session = InputSession::new(make_keymap(), mode, None, EventLog::new());
        session.set_defer_conversion(true);
        Self { session, converter }
    }

    pub fn run(&mut self, script: &str) -> SessionSnapshot {
        for ch in script.chars().filter(|c| !c.is_whitespace()) {
            match ch {
                '<' => self.session.delete_last_character(),
                '.' => self.session.confirm_input(),
                _ => self.session.press_digit(Digit::from_char(ch).unwrap()),
            }
            self.resolve();
        }
        self.session.snapshot()
    }

    /// Pick the candidate at `index` from the current list.
    pub fn select(&mut self, index: usize) {
        let candidate = self.session.candidates()[index].clone();
        self.session.select_candidate(&candidate);
    }

    /// Text the host document would now contain (extension) or the
    /// committed text (standalone).
    pub fn document(&self) -> String {
        match self.session.mode() {
            SessionMode::Standalone => self.session.committed_text().to_string(),
            SessionMode::Extension => self.session.sink().render().0,
        }
    }

    fn resolve(&mut self) {
        if let Some(req) = self.session.take_conversion_request() {
            let conversion = self.converter.convert(&req.reading);
            self.session
                .receive_conversion(&req.reading, req.generation, conversion);
        }
    }
}

#[test]
fn test_headless_convert_word() {
    for mode in [SessionMode::Standalone, SessionMode::Extension] {
        let mut pager = HeadlessPager::new(mode);
        let snap = pager.run("44 04 03 01");
        assert_eq!(snap.composing, "でんわ");
        assert_eq!(snap.current_candidate, "電話");

        pager.run(".");
        assert_eq!(pager.document(), "電話");
    }
}

#[test]
fn test_headless_prediction_while_typing() {
    let mut pager = HeadlessPager::new(SessionMode::Standalone);
    let snap = pager.run("44 04 03");
    assert_eq!(snap.composing, "でん");
    assert_eq!(snap.candidates, ["電", "田", "電話", "でん"]);
}

#[test]
fn test_headless_select_candidate() {
    let mut pager = HeadlessPager::new(SessionMode::Extension);
    pager.run("11 12");
    pager.select(1);
    pager.run("21 31");
    pager.select(1);

    assert_eq!(pager.document(), "藍笠");
    assert!(!pager.session.is_composing());
}

#[test]
fn test_headless_unknown_reading_commits_kana() {
    let mut pager = HeadlessPager::new(SessionMode::Standalone);
    let snap = pager.run("71 72");
    assert_eq!(snap.candidates, ["まみ"]);
    pager.run(".");
    assert_eq!(pager.document(), "まみ");
}

#[test]
fn test_headless_edit_then_convert() {
    let mut pager = HeadlessPager::new(SessionMode::Extension);
    // あう, delete う, type い
    pager.run("11 13 < 12");
    assert_eq!(pager.session.current_candidate(), "愛");
    pager.run(". <");
    assert_eq!(pager.document(), "");
    assert_eq!(
        pager.session.sink().events().last(),
        Some(&crate::HostEvent::DeleteBackward)
    );
}

#[test]
fn test_headless_standalone_display() {
    let mut pager = HeadlessPager::new(SessionMode::Standalone);
    pager.run("21 31 . 11 1");
    assert_eq!(pager.session.display_text(), "傘あ1_");
}
