//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! phonetic table and layouts.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
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
    pub composition: CompositionSettings,
    pub scoring: ScoringSettings,
    /// Key identifier remaps: host identifier → layout identifier.
    #[serde(default)]
    keymap: HashMap<String, String>,
}

impl Settings {
    /// Look up a remapped key identifier.
    pub fn keymap_get(&self, key_id: &str) -> Option<&str> {
        self.keymap.get(key_id).map(String::as_str)
    }
}

/// Policy for a vowel sign typed with no consonant to attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanSignPolicy {
    Standalone,
    Independent,
    Drop,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompositionSettings {
    pub orphan_sign: OrphanSignPolicy,
    pub phonetic_conjuncts: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    pub chars_per_word: u32,
    pub flush_at_prompt_end: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.scoring.chars_per_word == 0 {
        return Err(SettingsError::InvalidValue {
            field: "scoring.chars_per_word".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    for (from, to) in &s.keymap {
        if from.is_empty() || to.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("keymap.{}", from),
                reason: "key identifiers must be non-empty".to_string(),
            });
        }
    }
    Ok(())
}
