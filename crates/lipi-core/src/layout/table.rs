pub(crate) const INSCRIPT_TOML: &str = include_str!("inscript.toml");
pub(crate) const REMINGTON_TOML: &str = include_str!("remington.toml");

/// Layouts compiled into the binary, in display order.
pub(crate) const BUILTIN: [&str; 2] = [INSCRIPT_TOML, REMINGTON_TOML];
