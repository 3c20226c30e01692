use std::collections::BTreeMap;
use std::sync::OnceLock;

use lexime_trie::{DoubleArray, TrieSearch};
use tracing::debug;

use super::config::{parse_phonetic_toml, PhoneticConfigError};
use super::table::DEFAULT_TOML;
use super::PhoneticRule;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, PartialEq)]
pub enum RuleLookupResult<'a> {
    None,
    Prefix,
    Exact(&'a PhoneticRule),
    ExactAndPrefix(&'a PhoneticRule),
}

pub struct PhoneticTable {
    da: DoubleArray<u8>,
    values: Vec<PhoneticRule>,
    max_key_len: usize,
}

impl PhoneticTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), PhoneticConfigError> {
        // Validate eagerly
        parse_phonetic_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| PhoneticConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PhoneticTable {
        static INSTANCE: OnceLock<PhoneticTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let rules = parse_phonetic_toml(toml_str).expect("phonetic TOML must be valid");
            let table = Self::from_rules(rules);
            debug!(
                rules = table.len(),
                custom = CUSTOM_TOML.get().is_some(),
                "phonetic table loaded"
            );
            table
        })
    }

    pub fn from_rules(rules: BTreeMap<String, PhoneticRule>) -> Self {
        let max_key_len = rules.keys().map(String::len).max().unwrap_or(0);
        // BTreeMap keys are sorted, as DoubleArray::build requires
        let keys: Vec<&[u8]> = rules.keys().map(|k| k.as_bytes()).collect();
        let da = DoubleArray::<u8>::build(&keys);
        let values = rules.into_values().collect();
        Self {
            da,
            values,
            max_key_len,
        }
    }

    pub fn lookup(&self, latin: &str) -> RuleLookupResult<'_> {
        if latin.is_empty() {
            return RuleLookupResult::None;
        }
        let pr = self.da.probe(latin.as_bytes());
        let rule = pr.value.and_then(|id| self.values.get(id as usize));
        match (rule, pr.has_children) {
            (None, false) => RuleLookupResult::None,
            (None, true) => RuleLookupResult::Prefix,
            (Some(rule), false) => RuleLookupResult::Exact(rule),
            (Some(rule), true) => RuleLookupResult::ExactAndPrefix(rule),
        }
    }

    /// Whether `c` can start or continue a phonetic sequence.
    pub fn accepts(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        matches!(
            self.lookup(c.encode_utf8(&mut buf)),
            RuleLookupResult::Exact(_) | RuleLookupResult::ExactAndPrefix(_)
        )
    }

    /// Length of the longest rule key; the lookahead window never needs to
    /// hold more than this many characters.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
