//! Session tunables: candidate list length, composing buffer cap and the
//! pending-digit cursor.
//!
//! Built-in values come from `default_settings.toml`. A host may install its
//! own file once, before the first session reads `settings()`. From then on
//! the values are fixed for the life of the process.

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static OVERRIDE_TOML: OnceLock<String> = OnceLock::new();
static ACTIVE: OnceLock<Settings> = OnceLock::new();

/// Install settings from `toml_content`.
///
/// Fails on invalid TOML, and once `settings()` has been read or another
/// file was installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if ACTIVE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    OVERRIDE_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Settings every new session starts from.
pub fn settings() -> &'static Settings {
    ACTIVE.get_or_init(|| {
        let custom = OVERRIDE_TOML.get();
        debug!(custom = custom.is_some(), "settings loaded");
        match custom {
            // init_custom already validated it
            Some(toml_str) => parse_settings_toml(toml_str).unwrap_or_default(),
            None => Settings::default(),
        }
    })
}

/// The built-in settings file, for export.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub candidates: CandidateSettings,
    pub composing: ComposingSettings,
    pub preview: PreviewSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComposingSettings {
    pub max_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewSettings {
    pub cursor: String,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(candidates.max_results);
    check_positive_usize!(composing.max_length);

    if s.preview.cursor.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "preview.cursor".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}
