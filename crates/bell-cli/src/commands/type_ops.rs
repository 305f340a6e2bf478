//! Replay a keypad script through an `InputSession`.
//!
//! Script syntax: digits are keypad presses, `<` deletes, `.` confirms and
//! `#N` selects candidate N (1-based, one digit). Whitespace is ignored.

use std::process;
use std::sync::Arc;

use serde::Serialize;

use bell_core::converter::KanaConverter;
use bell_core::keymap::{Digit, Keymap};
use bell_session::{EventLog, HostEvent, InputSession, KeyEvent, SessionMode, SessionSnapshot};

use super::{load_converter, load_keymap};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unexpected character {0:?} at position {1}")]
    UnexpectedChar(char, usize),
    #[error("'#' at position {0} must be followed by a candidate number 1-9")]
    BadSelect(usize),
    #[error("no candidate #{0} at this point")]
    NoCandidate(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Key(KeyEvent),
    /// 1-based index into the current candidate list.
    Pick(usize),
}

pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    let mut chars = script.chars().enumerate().peekable();
    while let Some((pos, ch)) = chars.next() {
        let step = match ch {
            c if c.is_whitespace() => continue,
            '<' => ScriptStep::Key(KeyEvent::Delete),
            '.' => ScriptStep::Key(KeyEvent::Confirm),
            '#' => match chars.next().and_then(|(_, c)| c.to_digit(10)) {
                Some(n) if n > 0 => ScriptStep::Pick(n as usize),
                _ => return Err(ScriptError::BadSelect(pos)),
            },
            c => match Digit::from_char(c) {
                Some(d) if c.is_ascii_digit() => ScriptStep::Key(KeyEvent::Digit(d)),
                _ => return Err(ScriptError::UnexpectedChar(c, pos)),
            },
        };
        steps.push(step);
    }
    Ok(steps)
}

pub fn replay<S: bell_session::HostSink>(
    session: &mut InputSession<S>,
    steps: &[ScriptStep],
) -> Result<(), ScriptError> {
    for step in steps {
        match step {
            ScriptStep::Key(event) => session.handle_key(event.clone()),
            ScriptStep::Pick(n) => {
                let candidate = session
                    .candidates()
                    .get(n - 1)
                    .cloned()
                    .ok_or(ScriptError::NoCandidate(*n))?;
                session.select_candidate(&candidate);
            }
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TypeReport {
    pub snapshot: SessionSnapshot,
    pub display: String,
    /// Host document and marked text (extension mode).
    pub document: String,
    pub marked: String,
    pub events: Vec<String>,
}

pub struct TypeOptions<'a> {
    pub keymap_file: Option<&'a str>,
    pub dict_file: Option<&'a str>,
    pub mode: SessionMode,
    pub direct: bool,
    pub json: bool,
}

pub fn run_script(
    keymap: Keymap,
    converter: Option<Arc<dyn KanaConverter>>,
    mode: SessionMode,
    direct: bool,
    script: &str,
) -> Result<TypeReport, ScriptError> {
    let steps = parse_script(script)?;
    let mut session = InputSession::new(Arc::new(keymap), mode, converter, EventLog::new());
    session.set_direct_input(direct);
    replay(&mut session, &steps)?;

    let snapshot = session.snapshot();
    let display = session.display_text();
    let log = session.into_sink();
    let (document, marked) = log.render();
    let events = log.events().iter().map(describe).collect();
    Ok(TypeReport {
        snapshot,
        display,
        document,
        marked,
        events,
    })
}

fn describe(event: &HostEvent) -> String {
    match event {
        HostEvent::TextChange(t) => format!("text {t:?}"),
        HostEvent::MarkedText(t) => format!("marked {t:?}"),
        HostEvent::Commit(t) => format!("commit {t:?}"),
        HostEvent::ClearMarkedText => "clear-marked".to_string(),
        HostEvent::DeleteBackward => "delete-backward".to_string(),
    }
}

pub fn type_cmd(script: &str, opts: &TypeOptions) {
    let keymap = load_keymap(opts.keymap_file);
    let converter = load_converter(opts.dict_file);
    let report = die!(
        run_script(keymap, converter, opts.mode, opts.direct, script),
        "Error: {}"
    );

    if opts.json {
        println!("{}", die!(serde_json::to_string_pretty(&report), "Error: {}"));
        return;
    }

    let snap = &report.snapshot;
    match snap.mode {
        SessionMode::Standalone => println!("display:    {}", report.display),
        SessionMode::Extension => {
            println!("document:   {}", report.document);
            println!("marked:     {}", report.marked);
        }
    }
    println!("composing:  {}", snap.composing);
    if !snap.preview.is_empty() {
        println!("pending:    {}", snap.preview);
    }
    if !snap.candidates.is_empty() {
        let list: Vec<String> = snap
            .candidates
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}.{c}", i + 1))
            .collect();
        println!("candidates: {}", list.join(" "));
    }
    for event in &report.events {
        println!("  > {event}");
    }
}
