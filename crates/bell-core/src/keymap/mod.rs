//! Digit-pair character map.
//!
//! Two keypad digits (row, position) select one kana or symbol. The table is
//! sparse: rows are not uniformly filled and unused pairs have no mapping.
//! Two designated pairs are voicing operators rather than characters.

mod config;
mod table;

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

pub use config::{parse_keymap_toml, KeymapConfigError, KeymapDefinition};

use crate::voicing::Voicing;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Row display order used by key reference views (keypad order, 0 last).
pub const ROW_ORDER: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

/// A single keypad digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|v| Self(v as u8))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered (first, second) lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitPair {
    pub first: Digit,
    pub second: Digit,
}

impl DigitPair {
    pub const fn new(first: Digit, second: Digit) -> Self {
        Self { first, second }
    }

    /// Build a pair from raw values; `None` if either is outside 0..=9.
    pub fn from_values(first: u8, second: u8) -> Option<Self> {
        Some(Self::new(Digit::new(first)?, Digit::new(second)?))
    }

    /// Parse a two-character code such as `"21"`.
    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        if !a.is_ascii_digit() || !b.is_ascii_digit() {
            return None;
        }
        Some(Self::new(Digit::from_char(a)?, Digit::from_char(b)?))
    }

    fn index(self) -> usize {
        self.first.value() as usize * 10 + self.second.value() as usize
    }
}

impl fmt::Display for DigitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// What a completed digit pair means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairAction<'a> {
    Text(&'a str),
    Voicing(Voicing),
    Unmapped,
}

/// Immutable digit-pair table. Build once and share by reference or `Arc`.
#[derive(Debug, Clone)]
pub struct Keymap {
    slots: Vec<Option<String>>,
    dakuten: DigitPair,
    handakuten: DigitPair,
}

impl Keymap {
    pub fn from_definition(def: KeymapDefinition) -> Self {
        let mut slots = vec![None; 100];
        for (pair, text) in def.pairs {
            slots[pair.index()] = Some(text);
        }
        Self {
            slots,
            dakuten: def.dakuten,
            handakuten: def.handakuten,
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, KeymapConfigError> {
        parse_keymap_toml(toml_str).map(Self::from_definition)
    }

    /// A fresh copy of the built-in table.
    pub fn default_keymap() -> Self {
        Self::from_toml(table::DEFAULT_TOML).expect("default keymap TOML must be valid")
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KeymapConfigError> {
        // Validate eagerly
        parse_keymap_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KeymapConfigError::AlreadyInitialized)
    }

    /// Get or initialize the shared keymap.
    pub fn global() -> &'static Keymap {
        static INSTANCE: OnceLock<Keymap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(table::DEFAULT_TOML);
            let keymap = Self::from_toml(toml_str).expect("keymap TOML must be valid");
            debug!(entries = keymap.len(), custom = CUSTOM_TOML.get().is_some(), "keymap loaded");
            keymap
        })
    }

    /// Text mapped to `first`,`second`. `None` for unused pairs, operator
    /// pairs, and values outside 0..=9.
    pub fn lookup(&self, first: u8, second: u8) -> Option<&str> {
        DigitPair::from_values(first, second).and_then(|p| self.get(p))
    }

    pub fn get(&self, pair: DigitPair) -> Option<&str> {
        self.slots[pair.index()].as_deref()
    }

    pub fn is_dakuten_operator(&self, first: u8, second: u8) -> bool {
        DigitPair::from_values(first, second) == Some(self.dakuten)
    }

    pub fn is_handakuten_operator(&self, first: u8, second: u8) -> bool {
        DigitPair::from_values(first, second) == Some(self.handakuten)
    }

    pub fn operator_code(&self, voicing: Voicing) -> DigitPair {
        match voicing {
            Voicing::Dakuten => self.dakuten,
            Voicing::Handakuten => self.handakuten,
        }
    }

    pub fn classify(&self, pair: DigitPair) -> PairAction<'_> {
        if pair == self.dakuten {
            PairAction::Voicing(Voicing::Dakuten)
        } else if pair == self.handakuten {
            PairAction::Voicing(Voicing::Handakuten)
        } else {
            match self.get(pair) {
                Some(text) => PairAction::Text(text),
                None => PairAction::Unmapped,
            }
        }
    }

    /// Mapped entries of one row as `(code, text)`, ordered by position.
    /// Operator pairs are not included.
    pub fn characters_for_row(&self, row: u8) -> Vec<(String, String)> {
        let Some(row) = Digit::new(row) else {
            return Vec::new();
        };
        (0..=9)
            .filter_map(Digit::new)
            .map(|col| DigitPair::new(row, col))
            .filter_map(|pair| self.get(pair).map(|t| (pair.to_string(), t.to_string())))
            .collect()
    }

    pub fn rows(&self) -> [u8; 10] {
        ROW_ORDER
    }

    /// All text entries in code order.
    pub fn entries(&self) -> impl Iterator<Item = (DigitPair, &str)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let pair = DigitPair::from_values((i / 10) as u8, (i % 10) as u8)?;
            slot.as_deref().map(|t| (pair, t))
        })
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::default_keymap()
    }
}

pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
