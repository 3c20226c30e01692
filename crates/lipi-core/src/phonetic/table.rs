pub(crate) const DEFAULT_TOML: &str = include_str!("default_phonetic.toml");
