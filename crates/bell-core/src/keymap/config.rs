use std::collections::BTreeMap;

use serde::Deserialize;

use super::DigitPair;

#[derive(Deserialize)]
struct KeymapConfig {
    operators: OperatorConfig,
    pairs: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct OperatorConfig {
    dakuten: String,
    handakuten: String,
}

#[derive(Debug, thiserror::Error)]
pub enum KeymapConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[pairs] table is empty")]
    Empty,
    #[error("invalid pair code: {0:?} (expected two ASCII digits)")]
    InvalidCode(String),
    #[error("empty value for code: {0}")]
    EmptyValue(String),
    #[error("operator code {0} is also mapped in [pairs]")]
    OperatorConflict(String),
    #[error("dakuten and handakuten share code {0}")]
    DuplicateOperator(String),
    #[error("keymap already initialized")]
    AlreadyInitialized,
}

/// Validated contents of a keymap TOML file.
#[derive(Debug, Clone)]
pub struct KeymapDefinition {
    pub pairs: BTreeMap<DigitPair, String>,
    pub dakuten: DigitPair,
    pub handakuten: DigitPair,
}

fn parse_code(code: &str) -> Result<DigitPair, KeymapConfigError> {
    DigitPair::parse(code).ok_or_else(|| KeymapConfigError::InvalidCode(code.to_string()))
}

/// Parse TOML text into a validated keymap definition.
pub fn parse_keymap_toml(toml_str: &str) -> Result<KeymapDefinition, KeymapConfigError> {
    let config: KeymapConfig =
        toml::from_str(toml_str).map_err(|e| KeymapConfigError::Parse(e.to_string()))?;

    if config.pairs.is_empty() {
        return Err(KeymapConfigError::Empty);
    }

    let mut pairs = BTreeMap::new();
    for (code, value) in config.pairs {
        let pair = parse_code(&code)?;
        if value.is_empty() {
            return Err(KeymapConfigError::EmptyValue(code));
        }
        pairs.insert(pair, value);
    }

    let dakuten = parse_code(&config.operators.dakuten)?;
    let handakuten = parse_code(&config.operators.handakuten)?;
    if dakuten == handakuten {
        return Err(KeymapConfigError::DuplicateOperator(dakuten.to_string()));
    }
    for op in [dakuten, handakuten] {
        if pairs.contains_key(&op) {
            return Err(KeymapConfigError::OperatorConflict(op.to_string()));
        }
    }

    Ok(KeymapDefinition {
        pairs,
        dakuten,
        handakuten,
    })
}
