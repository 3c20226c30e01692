mod composition;

use lipi_core::settings::OrphanSignPolicy;
use lipi_core::TransliterationMode;

use crate::engine::{EngineOptions, EngineState, Feed};
use crate::types::{InputUnit, KeyEvent, KeyResponse};
use crate::TypingSession;

/// Engine with fixed composition options, independent of loaded settings.
pub(super) fn engine(mode: TransliterationMode) -> EngineState {
    engine_with(mode, OrphanSignPolicy::Standalone)
}

pub(super) fn engine_with(mode: TransliterationMode, orphan_sign: OrphanSignPolicy) -> EngineState {
    let options = EngineOptions {
        orphan_sign,
        join_conjuncts: mode == TransliterationMode::Phonetic,
    };
    EngineState::with_options(mode, options).unwrap()
}

/// Feed `(key, shift)` pairs and collect every committed unit.
pub(super) fn feed_keys(engine: &mut EngineState, keys: &[(&str, bool)]) -> Vec<String> {
    let mut out = Vec::new();
    for (key, shift) in keys {
        if let Feed::Accepted { committed } = engine.feed(InputUnit::key(key, *shift)) {
            out.extend(committed);
        }
    }
    out
}

/// Feed typed characters and collect every committed unit.
pub(super) fn feed_str(engine: &mut EngineState, text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for c in text.chars() {
        if let Feed::Accepted { committed } = engine.feed(InputUnit::Char(c)) {
            out.extend(committed);
        }
    }
    out
}

pub(super) fn session(mode: TransliterationMode, prompt: &str) -> TypingSession {
    let mut s = TypingSession::with_engine(engine(mode), prompt).unwrap();
    s.set_flush_at_prompt_end(true);
    s
}

pub(super) fn press(session: &mut TypingSession, key: &str, shift: bool) -> KeyResponse {
    session.handle_key(KeyEvent::key(key, shift))
}

pub(super) fn type_string(session: &mut TypingSession, text: &str) -> Vec<KeyResponse> {
    text.chars()
        .map(|c| session.handle_key(KeyEvent::text(c)))
        .collect()
}
