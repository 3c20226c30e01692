//! Phonetic (Romanized) transliteration rules.
//!
//! Typed Latin characters are resolved by longest match against a rule
//! table. Digraphs and trigraphs such as `kh` or `ksh` win over their
//! single-character prefixes, so a sequence that may still grow is held in
//! a small lookahead window until the next character decides it.

mod config;
mod convert;
mod table;
mod trie;

pub use config::{parse_phonetic_toml, PhoneticConfigError};
pub use convert::{drain, RuleMatch};
pub use trie::{PhoneticTable, RuleLookupResult};

/// Returns the embedded default phonetic rules TOML content.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}

/// Output of one phonetic rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneticRule {
    /// A consonant or conjunct carrying the inherent vowel.
    Consonant(String),
    /// A vowel with its independent letter and its dependent sign. The sign
    /// is empty for the inherent vowel `a`.
    Vowel { independent: String, sign: String },
    /// Anything else: marks, punctuation, digits, whitespace.
    Symbol(String),
}
