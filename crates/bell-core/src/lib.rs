//! Core data for digit-pair ("pager") kana input: the character map, voicing
//! tables, the kana-kanji converter seam and engine-wide settings.

pub mod converter;
pub mod keymap;
pub mod settings;
pub mod voicing;
