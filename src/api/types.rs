use bell_core::converter::Conversion;
use bell_session::{ConversionRequest, SessionMode, SessionSnapshot};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum BellError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("invalid input: {msg}")]
    InvalidInput { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// Everything the keyboard view needs to redraw.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct BellSnapshot {
    pub mode: BellMode,
    pub pending_digit: Option<u8>,
    pub preview: String,
    pub composing: String,
    pub committed: String,
    pub current_candidate: String,
    pub candidates: Vec<String>,
}

/// One row of the key reference table.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct BellKeyEntry {
    pub code: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct BellConversion {
    pub best: String,
    pub candidates: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct BellConversionRequest {
    pub reading: String,
    pub generation: u64,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum BellMode {
    Standalone,
    Extension,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<BellMode> for SessionMode {
    fn from(mode: BellMode) -> Self {
        match mode {
            BellMode::Standalone => SessionMode::Standalone,
            BellMode::Extension => SessionMode::Extension,
        }
    }
}

impl From<SessionMode> for BellMode {
    fn from(mode: SessionMode) -> Self {
        match mode {
            SessionMode::Standalone => BellMode::Standalone,
            SessionMode::Extension => BellMode::Extension,
        }
    }
}

impl From<SessionSnapshot> for BellSnapshot {
    fn from(s: SessionSnapshot) -> Self {
        Self {
            mode: s.mode.into(),
            pending_digit: s.pending_digit,
            preview: s.preview,
            composing: s.composing,
            committed: s.committed,
            current_candidate: s.current_candidate,
            candidates: s.candidates,
        }
    }
}

impl From<BellConversion> for Conversion {
    fn from(c: BellConversion) -> Self {
        Conversion::new(c.best, c.candidates)
    }
}

impl From<Conversion> for BellConversion {
    fn from(c: Conversion) -> Self {
        Self {
            best: c.best,
            candidates: c.candidates,
        }
    }
}

impl From<ConversionRequest> for BellConversionRequest {
    fn from(r: ConversionRequest) -> Self {
        Self {
            reading: r.reading,
            generation: r.generation,
        }
    }
}
