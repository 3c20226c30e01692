//! Keyboard layout tables for layout-driven input (Inscript, Remington).
//!
//! A layout is pure data: rows of [`KeyDefinition`]s for the on-screen
//! keyboard plus an index from key identifier to definition for the engine.
//! All layouts are parsed once into a process-wide [`Layouts`] table and are
//! read-only afterwards.

mod config;
mod table;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

pub use config::{parse_layout_toml, LayoutConfigError};

static CUSTOM_TOML: OnceLock<Vec<String>> = OnceLock::new();

/// One physical key in one layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyDefinition {
    pub key: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub shift_key: Option<String>,
    #[serde(default)]
    pub shift_output: Option<String>,
}

impl KeyDefinition {
    /// Output typed by this key for the given identifier and shift state.
    ///
    /// The shifted output is used when shift is held or when `key_id` is the
    /// shifted identifier itself. Empty outputs resolve to `None`.
    pub fn resolve(&self, key_id: &str, shift: bool) -> Option<&str> {
        let shifted = shift || self.shift_key.as_deref() == Some(key_id);
        let out = if shifted {
            self.shift_output.as_deref()?
        } else {
            self.output.as_str()
        };
        (!out.is_empty()).then_some(out)
    }

    /// Label for the on-screen keyboard.
    pub fn label(&self) -> &str {
        &self.key
    }
}

#[derive(Debug)]
pub struct Layout {
    name: String,
    rows: Vec<Vec<KeyDefinition>>,
    /// key identifier → (row, column)
    index: HashMap<String, (usize, usize)>,
}

impl Layout {
    pub fn from_toml(toml_str: &str) -> Result<Self, LayoutConfigError> {
        let (name, rows) = parse_layout_toml(toml_str)?;
        let mut index = HashMap::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, def) in row.iter().enumerate() {
                index.insert(def.key.clone(), (r, c));
                if let Some(shift_key) = &def.shift_key {
                    index.insert(shift_key.clone(), (r, c));
                }
            }
        }
        Ok(Self { name, rows, index })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<KeyDefinition>] {
        &self.rows
    }

    pub fn lookup(&self, key_id: &str) -> Option<&KeyDefinition> {
        let &(r, c) = self.index.get(key_id)?;
        Some(&self.rows[r][c])
    }

    /// Resolve a key event to its output. `None` for undeclared keys and
    /// keys with no output in the requested shift state.
    pub fn resolve(&self, key_id: &str, shift: bool) -> Option<(&KeyDefinition, &str)> {
        let def = self.lookup(key_id)?;
        def.resolve(key_id, shift).map(|out| (def, out))
    }
}

pub struct Layouts {
    layouts: Vec<Layout>,
}

impl Layouts {
    /// Set custom layout TOML documents before first `global()` call.
    ///
    /// A custom layout replaces the built-in layout of the same name; other
    /// names are added after the built-in ones.
    pub fn init_custom(toml_contents: Vec<String>) -> Result<(), LayoutConfigError> {
        // Validate eagerly
        for toml_str in &toml_contents {
            parse_layout_toml(toml_str)?;
        }
        CUSTOM_TOML
            .set(toml_contents)
            .map_err(|_| LayoutConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Layouts {
        static INSTANCE: OnceLock<Layouts> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let custom = CUSTOM_TOML.get().map(Vec::as_slice).unwrap_or(&[]);
            let layouts = Self::build(
                table::BUILTIN
                    .iter()
                    .copied()
                    .chain(custom.iter().map(String::as_str)),
            )
            .expect("layout TOML must be valid");
            debug!(layouts = layouts.layouts.len(), custom = custom.len(), "layouts loaded");
            layouts
        })
    }

    fn build<'a>(tomls: impl Iterator<Item = &'a str>) -> Result<Self, LayoutConfigError> {
        let mut layouts: Vec<Layout> = Vec::new();
        for toml_str in tomls {
            let layout = Layout::from_toml(toml_str)?;
            match layouts.iter_mut().find(|l| l.name == layout.name) {
                Some(slot) => *slot = layout,
                None => layouts.push(layout),
            }
        }
        Ok(Self { layouts })
    }

    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.name == name)
    }

    pub fn lookup(&self, layout_name: &str, key_id: &str) -> Option<&KeyDefinition> {
        self.get(layout_name)?.lookup(key_id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layouts.iter().map(|l| l.name.as_str())
    }
}

/// Embedded TOML of a built-in layout.
pub fn builtin_toml(name: &str) -> Option<&'static str> {
    match name {
        "inscript" => Some(table::INSCRIPT_TOML),
        "remington" => Some(table::REMINGTON_TOML),
        _ => None,
    }
}

/// Map a DOM `KeyboardEvent.code` name to the layout key identifier.
/// Identifiers that are already layout identifiers pass through unchanged.
pub fn normalize_key_id(code: &str) -> Cow<'_, str> {
    if let Some(letter) = code.strip_prefix("Key") {
        if letter.len() == 1 && letter.as_bytes()[0].is_ascii_uppercase() {
            return Cow::Owned(letter.to_ascii_lowercase());
        }
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() {
            return Cow::Borrowed(digit);
        }
    }
    let id = match code {
        "Backquote" => "`",
        "Minus" => "-",
        "Equal" => "=",
        "BracketLeft" => "[",
        "BracketRight" => "]",
        "Backslash" => "\\",
        "Semicolon" => ";",
        "Quote" => "'",
        "Comma" => ",",
        "Period" => ".",
        "Slash" => "/",
        _ => return Cow::Borrowed(code),
    };
    Cow::Borrowed(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layouts_loaded() {
        let layouts = Layouts::global();
        let names: Vec<&str> = layouts.names().collect();
        assert!(names.contains(&"inscript"));
        assert!(names.contains(&"remington"));
    }

    #[test]
    fn test_inscript_lookup() {
        let layouts = Layouts::global();
        let def = layouts.lookup("inscript", "k").unwrap();
        assert_eq!(def.output, "क");
        assert_eq!(def.shift_output.as_deref(), Some("ख"));
    }

    #[test]
    fn test_shift_identifier_resolves_same_key() {
        let layouts = Layouts::global();
        let a = layouts.lookup("inscript", "k").unwrap();
        let b = layouts.lookup("inscript", "K").unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(b.resolve("K", false), Some("ख"));
        assert_eq!(a.resolve("k", true), Some("ख"));
        assert_eq!(a.resolve("k", false), Some("क"));
    }

    #[test]
    fn test_lookup_idempotent() {
        let layouts = Layouts::global();
        let first = layouts.lookup("remington", "d").cloned();
        for _ in 0..3 {
            assert_eq!(layouts.lookup("remington", "d").cloned(), first);
        }
        assert_eq!(first.unwrap().output, "क");
    }

    #[test]
    fn test_undeclared_key_not_found() {
        let layouts = Layouts::global();
        assert!(layouts.lookup("inscript", "F13").is_none());
        assert!(layouts.lookup("dvorak", "k").is_none());
    }

    #[test]
    fn test_multi_glyph_outputs() {
        let layout = Layouts::global().get("inscript").unwrap();
        assert_eq!(layout.resolve("&", false).map(|(_, o)| o), Some("क्ष"));
        assert_eq!(layout.resolve("3", true).map(|(_, o)| o), Some("्र"));
    }

    #[test]
    fn test_missing_shift_output() {
        let layout = Layouts::global().get("inscript").unwrap();
        assert_eq!(layout.resolve("Space", false).map(|(_, o)| o), Some(" "));
        assert!(layout.resolve("Space", true).is_none());
    }

    #[test]
    fn test_rows_for_visualizer() {
        let layout = Layouts::global().get("inscript").unwrap();
        assert_eq!(layout.rows().len(), 5);
        assert_eq!(layout.rows()[2][0].label(), "a");
    }

    #[test]
    fn test_custom_layout_replaces_builtin() {
        let custom = r#"
name = "inscript"

[[rows]]
keys = [{ key = "k", output = "ক" }]
"#;
        let layouts = Layouts::build(
            table::BUILTIN
                .iter()
                .copied()
                .chain(std::iter::once(custom)),
        )
        .unwrap();
        assert_eq!(layouts.names().count(), 2);
        assert_eq!(layouts.lookup("inscript", "k").unwrap().output, "ক");
        assert!(layouts.lookup("inscript", "j").is_none());
    }

    #[test]
    fn test_normalize_key_id() {
        assert_eq!(normalize_key_id("KeyK"), "k");
        assert_eq!(normalize_key_id("Digit7"), "7");
        assert_eq!(normalize_key_id("Semicolon"), ";");
        assert_eq!(normalize_key_id("Backslash"), "\\");
        assert_eq!(normalize_key_id("Space"), "Space");
        assert_eq!(normalize_key_id("k"), "k");
        assert_eq!(normalize_key_id("Keyboard"), "Keyboard");
    }
}
