use std::borrow::Cow;

use lipi_core::layout::{normalize_key_id, Layout, Layouts};
use lipi_core::phonetic::{PhoneticRule, PhoneticTable};
use lipi_core::script::{classify, GlyphClass};
use lipi_core::settings::settings;
use lipi_core::{ConfigurationError, TransliterationMode};

use crate::types::InputUnit;

/// How raw input is turned into script, chosen once per session.
#[derive(Clone, Copy)]
pub(crate) enum Strategy {
    LayoutDriven(&'static Layout),
    Phonetic(&'static PhoneticTable),
    Passthrough,
}

impl Strategy {
    pub(crate) fn for_mode(mode: TransliterationMode) -> Result<Self, ConfigurationError> {
        Ok(match mode {
            TransliterationMode::Remington | TransliterationMode::Inscript => {
                let name = mode.as_str();
                let layout = Layouts::global()
                    .get(name)
                    .ok_or_else(|| ConfigurationError::MissingLayout(name.to_string()))?;
                Self::LayoutDriven(layout)
            }
            TransliterationMode::Phonetic => Self::Phonetic(PhoneticTable::global()),
            TransliterationMode::English => Self::Passthrough,
        })
    }
}

/// A resolved unit of script, classified for composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Glyph {
    Consonant(String),
    Sign(String),
    Vowel { independent: String, sign: String },
    Other(String),
}

impl Glyph {
    pub(crate) fn from_output(out: &str) -> Self {
        match classify(out) {
            GlyphClass::Consonant => Self::Consonant(out.to_string()),
            GlyphClass::Sign => Self::Sign(out.to_string()),
            GlyphClass::Other => Self::Other(out.to_string()),
        }
    }

    pub(crate) fn from_rule(rule: &PhoneticRule) -> Self {
        match rule {
            PhoneticRule::Consonant(s) => Self::Consonant(s.clone()),
            PhoneticRule::Vowel { independent, sign } => Self::Vowel {
                independent: independent.clone(),
                sign: sign.clone(),
            },
            PhoneticRule::Symbol(s) => Self::from_output(s),
        }
    }
}

/// Layout key identifier and shift state for a unit, after DOM code
/// normalisation and the settings keymap. Typed characters are treated as
/// the unshifted identifier of the key that produces them.
pub(crate) fn key_of(unit: &InputUnit) -> (Cow<'_, str>, bool) {
    let (id, shift): (Cow<'_, str>, bool) = match unit {
        InputUnit::Key { key, shift } => (normalize_key_id(key), *shift),
        InputUnit::Char(' ') => (Cow::Borrowed("Space"), false),
        InputUnit::Char(c) => (Cow::Owned(c.to_string()), false),
    };
    match settings().keymap_get(&id) {
        Some(mapped) => (Cow::Owned(mapped.to_string()), shift),
        None => (id, shift),
    }
}
