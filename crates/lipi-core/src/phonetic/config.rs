use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::PhoneticRule;

#[derive(Deserialize)]
struct PhoneticConfig {
    #[serde(default)]
    consonants: BTreeMap<String, String>,
    #[serde(default)]
    vowels: BTreeMap<String, (String, String)>,
    #[serde(default)]
    symbols: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PhoneticConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no phonetic rules defined")]
    Empty,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("key defined in more than one section: {0}")]
    DuplicateKey(String),
    #[error("character {0:?} is used in a rule but has no rule of its own")]
    MissingSingleCharacter(char),
    #[error("phonetic table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<latin, rule>`.
pub fn parse_phonetic_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, PhoneticRule>, PhoneticConfigError> {
    let config: PhoneticConfig =
        toml::from_str(toml_str).map_err(|e| PhoneticConfigError::Parse(e.to_string()))?;

    let mut rules = BTreeMap::new();
    let mut insert = |key: String, rule: PhoneticRule| {
        if key.is_empty() || !key.is_ascii() {
            return Err(PhoneticConfigError::NonAsciiKey(key));
        }
        if rules.contains_key(&key) {
            return Err(PhoneticConfigError::DuplicateKey(key));
        }
        rules.insert(key, rule);
        Ok(())
    };

    for (key, value) in config.consonants {
        if value.is_empty() {
            return Err(PhoneticConfigError::EmptyValue(key));
        }
        insert(key, PhoneticRule::Consonant(value))?;
    }
    for (key, (independent, sign)) in config.vowels {
        // An empty sign is allowed: it stands for the inherent vowel.
        if independent.is_empty() {
            return Err(PhoneticConfigError::EmptyValue(key));
        }
        insert(key, PhoneticRule::Vowel { independent, sign })?;
    }
    for (key, value) in config.symbols {
        if value.is_empty() {
            return Err(PhoneticConfigError::EmptyValue(key));
        }
        insert(key, PhoneticRule::Symbol(value))?;
    }

    if rules.is_empty() {
        return Err(PhoneticConfigError::Empty);
    }

    // Longest-match resolution falls back one character at a time, so every
    // character must resolve on its own.
    let singles: HashSet<char> = rules
        .keys()
        .filter(|k| k.len() == 1)
        .filter_map(|k| k.chars().next())
        .collect();
    for key in rules.keys() {
        if let Some(c) = key.chars().find(|c| !singles.contains(c)) {
            return Err(PhoneticConfigError::MissingSingleCharacter(c));
        }
    }

    Ok(rules)
}
