//! UniFFI export layer: type-safe Swift bindings for the Bell engine.
//!
//! Each public type here maps to a generated Swift class, struct, protocol,
//! or enum.

mod host;
mod resources;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use host::{BellConverter, BellHost};
pub use session::BellSession;
pub use types::{
    BellConversion, BellConversionRequest, BellError, BellKeyEntry, BellMode, BellSnapshot,
};

use std::path::Path;
use std::sync::Arc;

use bell_core::keymap::Keymap;

use resources::BellDictionary;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn keymap_lookup(first: u8, second: u8) -> Option<String> {
    Keymap::global().lookup(first, second).map(str::to_string)
}

#[uniffi::export]
fn keymap_row(row: u8) -> Result<Vec<BellKeyEntry>, BellError> {
    if row > 9 {
        return Err(BellError::InvalidInput {
            msg: format!("row out of range: {row}"),
        });
    }
    Ok(Keymap::global()
        .characters_for_row(row)
        .into_iter()
        .map(|(code, text)| BellKeyEntry { code, text })
        .collect())
}

#[uniffi::export]
fn keymap_rows() -> Vec<u8> {
    Keymap::global().rows().to_vec()
}

#[uniffi::export]
fn keymap_load_config(path: String) -> Result<(), BellError> {
    let content = read_config(&path)?;
    Keymap::init_custom(content).map_err(|e| BellError::InvalidData { msg: e.to_string() })
}

#[uniffi::export]
fn keymap_default_config() -> String {
    bell_core::keymap::default_toml().to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), BellError> {
    let content = read_config(&path)?;
    bell_core::settings::init_custom(content)
        .map_err(|e| BellError::InvalidData { msg: e.to_string() })
}

#[uniffi::export]
fn settings_default_config() -> String {
    bell_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn dictionary_load(path: String) -> Result<Arc<dyn BellConverter>, BellError> {
    let dict = BellDictionary::open(&path)?;
    Ok(Arc::new(dict))
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

fn read_config(path: &str) -> Result<String, BellError> {
    std::fs::read_to_string(path).map_err(|e| BellError::Io {
        msg: format!("{path}: {e}"),
    })
}
