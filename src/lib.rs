//! Hindi transliteration and typing-practice scoring.
//!
//! Facade over the workspace crates: `lipi_core` holds the layouts, phonetic
//! rules and settings; `lipi_session` holds the engine, the scorer and the
//! `TypingSession` that ties them together.

pub mod trace_init;

pub use lipi_core::{ConfigurationError, Language, TransliterationMode};
pub use lipi_session::{
    EngineState, Feed, InputUnit, KeyEvent, KeyResponse, Metrics, Phase, RecordError,
    SessionConfig, SessionRecorder, SessionScoreState, SessionSummary, TypingSession,
};

pub use lipi_core;
pub use lipi_session;

/// Crate version, as reported to hosts.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
