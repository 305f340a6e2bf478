//! Kana-kanji conversion seam.
//!
//! The session hands the full composing reading to a `KanaConverter` and
//! stores what comes back. The real engine lives outside this crate; the
//! bundled `DictionaryConverter` covers tools and tests.

mod dictionary;

pub use dictionary::{DictionaryConverter, DictionaryError};

/// Best guess plus the ranked list returned for one reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub best: String,
    pub candidates: Vec<String>,
}

impl Conversion {
    pub fn new(best: impl Into<String>, candidates: Vec<String>) -> Self {
        Self {
            best: best.into(),
            candidates,
        }
    }

    /// The reading itself as the only candidate.
    pub fn passthrough(reading: &str) -> Self {
        Self {
            best: reading.to_string(),
            candidates: vec![reading.to_string()],
        }
    }

    /// Cap the list at `max_results` for display.
    ///
    /// An empty list shows `[reading]` so there is always something to pick.
    /// `best` is kept as returned; an empty best commits the raw reading.
    pub fn normalized(mut self, reading: &str, max_results: usize) -> Self {
        if self.candidates.is_empty() {
            self.candidates.push(reading.to_string());
        }
        self.candidates.truncate(max_results.max(1));
        self
    }
}

/// Kana-kanji converter. Never called with an empty reading.
pub trait KanaConverter: Send + Sync {
    fn convert(&self, reading: &str) -> Conversion;
}

impl<F> KanaConverter for F
where
    F: Fn(&str) -> Conversion + Send + Sync,
{
    fn convert(&self, reading: &str) -> Conversion {
        self(reading)
    }
}
