use lipi_core::{Language, TransliterationMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TypingSession;

/// Final metrics of a session, handed to the recorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub wpm: f64,
    pub accuracy: f64,
    pub duration_seconds: f64,
    pub mode: TransliterationMode,
    pub language: Language,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("session is not complete")]
    Incomplete,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Destination for finished session summaries.
pub trait SessionRecorder {
    fn record(&self, summary: &SessionSummary) -> Result<(), RecordError>;
}

impl TypingSession {
    /// Summary at `elapsed_seconds`, whether or not the prompt is finished.
    pub fn summary(&self, elapsed_seconds: f64) -> SessionSummary {
        let metrics = self.scorer.metrics(elapsed_seconds);
        let mode = self.engine.mode();
        SessionSummary {
            wpm: metrics.wpm,
            accuracy: metrics.accuracy,
            duration_seconds: elapsed_seconds.max(0.0),
            mode,
            language: mode.language(),
        }
    }

    /// Hand the summary of a completed session to `recorder`.
    pub fn finish(
        &self,
        elapsed_seconds: f64,
        recorder: &dyn SessionRecorder,
    ) -> Result<SessionSummary, RecordError> {
        if !self.is_complete() {
            return Err(RecordError::Incomplete);
        }
        let summary = self.summary(elapsed_seconds);
        recorder.record(&summary)?;
        debug!(wpm = summary.wpm, accuracy = summary.accuracy, "session recorded");
        Ok(summary)
    }
}
