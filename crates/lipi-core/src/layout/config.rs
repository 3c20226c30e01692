use std::collections::HashSet;

use serde::Deserialize;

use super::KeyDefinition;

#[derive(Deserialize)]
struct LayoutConfig {
    name: String,
    rows: Vec<RowConfig>,
}

#[derive(Deserialize)]
struct RowConfig {
    keys: Vec<KeyDefinition>,
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("layout name is empty")]
    EmptyName,
    #[error("layout {0} declares no keys")]
    Empty(String),
    #[error("empty key identifier in layout {0}")]
    EmptyKey(String),
    #[error("duplicate key identifier {key} in layout {layout}")]
    DuplicateKey { layout: String, key: String },
    #[error("custom layouts already initialized")]
    AlreadyInitialized,
}

/// Parse a layout TOML document into its name and rows.
///
/// Both the primary and the shifted identifiers of every key must be unique
/// across the whole layout, since either one resolves to the key.
pub fn parse_layout_toml(
    toml_str: &str,
) -> Result<(String, Vec<Vec<KeyDefinition>>), LayoutConfigError> {
    let config: LayoutConfig =
        toml::from_str(toml_str).map_err(|e| LayoutConfigError::Parse(e.to_string()))?;

    if config.name.trim().is_empty() {
        return Err(LayoutConfigError::EmptyName);
    }
    let name = config.name;

    let rows: Vec<Vec<KeyDefinition>> = config
        .rows
        .into_iter()
        .map(|r| r.keys)
        .filter(|keys| !keys.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(LayoutConfigError::Empty(name));
    }

    let mut seen = HashSet::new();
    for def in rows.iter().flatten() {
        for id in std::iter::once(def.key.as_str()).chain(def.shift_key.as_deref()) {
            if id.is_empty() {
                return Err(LayoutConfigError::EmptyKey(name));
            }
            if !seen.insert(id.to_string()) {
                return Err(LayoutConfigError::DuplicateKey {
                    layout: name,
                    key: id.to_string(),
                });
            }
        }
    }

    Ok((name, rows))
}
