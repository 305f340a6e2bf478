use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, trace};

use super::{Conversion, KanaConverter};

#[derive(Deserialize)]
struct DictionaryFile {
    entries: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty reading")]
    EmptyReading,
    #[error("empty surface for reading: {0}")]
    EmptySurface(String),
}

/// Reading → surfaces table loaded from TOML.
///
/// ```toml
/// [entries]
/// "あい" = ["愛", "藍"]
/// ```
///
/// Conversion returns exact matches first, then surfaces of longer readings
/// that start with the input (in reading order), then the reading itself.
#[derive(Debug, Clone, Default)]
pub struct DictionaryConverter {
    entries: BTreeMap<String, Vec<String>>,
    max_predictions: usize,
}

const DEFAULT_MAX_PREDICTIONS: usize = 10;

impl DictionaryConverter {
    pub fn from_entries<I, R, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (R, Vec<S>)>,
        R: Into<String>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(r, s)| (r.into(), s.into_iter().map(Into::into).collect()))
            .collect();
        Self {
            entries,
            max_predictions: DEFAULT_MAX_PREDICTIONS,
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, DictionaryError> {
        let file: DictionaryFile =
            toml::from_str(toml_str).map_err(|e| DictionaryError::Parse(e.to_string()))?;
        for (reading, surfaces) in &file.entries {
            if reading.is_empty() {
                return Err(DictionaryError::EmptyReading);
            }
            if surfaces.iter().any(|s| s.is_empty()) {
                return Err(DictionaryError::EmptySurface(reading.clone()));
            }
        }
        Ok(Self {
            entries: file.entries,
            max_predictions: DEFAULT_MAX_PREDICTIONS,
        })
    }

    pub fn open(path: &Path) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path)?;
        let dict = Self::from_toml(&content)?;
        debug!(path = %path.display(), readings = dict.len(), "dictionary loaded");
        Ok(dict)
    }

    pub fn with_max_predictions(mut self, n: usize) -> Self {
        self.max_predictions = n;
        self
    }

    pub fn lookup(&self, reading: &str) -> Option<&[String]> {
        self.entries.get(reading).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_unique(list: &mut Vec<String>, s: &str) {
        if !list.iter().any(|x| x == s) {
            list.push(s.to_string());
        }
    }
}

impl KanaConverter for DictionaryConverter {
    fn convert(&self, reading: &str) -> Conversion {
        let mut candidates = Vec::new();
        if let Some(exact) = self.lookup(reading) {
            for s in exact {
                Self::push_unique(&mut candidates, s);
            }
        }

        let predictions = self
            .entries
            .range::<str, _>((std::ops::Bound::Excluded(reading), std::ops::Bound::Unbounded))
            .take_while(|(r, _)| r.starts_with(reading))
            .flat_map(|(_, surfaces)| surfaces.iter())
            .take(self.max_predictions);
        for s in predictions {
            Self::push_unique(&mut candidates, s);
        }

        Self::push_unique(&mut candidates, reading);
        trace!(reading, n = candidates.len(), "dictionary convert");
        Conversion::new(candidates[0].clone(), candidates)
    }
}
