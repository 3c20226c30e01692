//! Typing-practice session: transliteration engine plus per-character scoring.
//!
//! `TypingSession` owns one `EngineState` and one `SessionScoreState` and
//! routes each key event through both, returning a `KeyResponse` the caller
//! renders. Timing is supplied by the caller; nothing here performs I/O.

pub mod engine;
pub mod scorer;

mod key_handlers;
mod summary;
mod types;

#[cfg(test)]
mod tests;

use lipi_core::settings::settings;
use lipi_core::{ConfigurationError, TransliterationMode};
use serde::Deserialize;
use tracing::debug;

pub use engine::{CommittedUnit, EngineOptions, EngineState, Feed, RawInput};
pub use scorer::{Applied, Classification, Metrics, Phase, SessionScoreState};
pub use summary::{RecordError, SessionRecorder, SessionSummary};
pub use types::{InputUnit, KeyEvent, KeyResponse};

/// Parameters a host supplies to start a session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub mode: String,
    pub prompt: String,
}

pub struct TypingSession {
    engine: EngineState,
    scorer: SessionScoreState,
    /// Flush pending composition once it exactly completes the prompt.
    flush_at_prompt_end: bool,
}

impl TypingSession {
    /// Validate the configuration and create a session in the Idle phase.
    pub fn start(config: &SessionConfig) -> Result<Self, ConfigurationError> {
        let mode: TransliterationMode = config.mode.parse()?;
        Self::new(mode, &config.prompt)
    }

    pub fn new(mode: TransliterationMode, prompt: &str) -> Result<Self, ConfigurationError> {
        Self::with_engine(EngineState::new(mode)?, prompt)
    }

    /// Build around a preconfigured engine (custom composition options).
    pub fn with_engine(engine: EngineState, prompt: &str) -> Result<Self, ConfigurationError> {
        if prompt.is_empty() {
            return Err(ConfigurationError::EmptyPrompt);
        }
        debug!(mode = %engine.mode(), prompt_chars = prompt.chars().count(), "session start");
        Ok(Self {
            engine,
            scorer: SessionScoreState::new(prompt),
            flush_at_prompt_end: settings().scoring.flush_at_prompt_end,
        })
    }

    pub fn set_flush_at_prompt_end(&mut self, enabled: bool) {
        self.flush_at_prompt_end = enabled;
    }

    pub fn mode(&self) -> TransliterationMode {
        self.engine.mode()
    }

    pub fn engine(&self) -> &EngineState {
        &self.engine
    }

    pub fn scorer(&self) -> &SessionScoreState {
        &self.scorer
    }

    pub fn phase(&self) -> Phase {
        self.scorer.phase()
    }

    pub fn is_complete(&self) -> bool {
        self.scorer.is_complete()
    }

    pub fn pending(&self) -> String {
        self.engine.pending_text()
    }

    pub fn metrics(&self, elapsed_seconds: f64) -> Metrics {
        self.scorer.metrics(elapsed_seconds)
    }
}
