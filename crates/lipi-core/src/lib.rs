pub mod layout;
pub mod mode;
pub mod phonetic;
pub mod script;
pub mod settings;

pub use mode::{ConfigurationError, Language, TransliterationMode};
