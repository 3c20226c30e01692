use tracing::{debug, debug_span, trace};

use super::engine::Feed;
use super::scorer::Applied;
use super::types::{InputUnit, KeyEvent, KeyResponse};
use super::TypingSession;

impl TypingSession {
    /// Process a key event. Once the prompt is complete every event is ignored.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        if self.scorer.is_complete() {
            trace!("session complete, event ignored");
            return self.response(false);
        }
        self.scorer.note_keystroke();

        let response = match event {
            KeyEvent::Input(unit) => self.handle_input(unit),
            KeyEvent::Backspace => self.handle_backspace(),
            KeyEvent::Commit => {
                let committed = self.engine.flush();
                let mut r = self.score(committed);
                r.consumed = true;
                r
            }
        };

        if self.scorer.is_complete() {
            let metrics = self.scorer.metrics(0.0);
            debug!(
                accuracy = metrics.accuracy,
                keystrokes = self.scorer.keystrokes(),
                errors = self.scorer.errors(),
                "prompt complete"
            );
        }
        response
    }

    fn handle_input(&mut self, unit: InputUnit) -> KeyResponse {
        let mut committed = match self.engine.feed(unit) {
            Feed::Ignored => return self.response(false),
            Feed::Accepted { committed } => committed,
        };
        if self.pending_completes_prompt(&committed) {
            committed.extend(self.engine.flush());
        }
        let mut r = self.score(committed);
        r.consumed = true;
        r
    }

    /// Whether flushing now would make the committed text finish the prompt
    /// exactly, given the units this event is about to score.
    fn pending_completes_prompt(&self, committed: &[String]) -> bool {
        if !self.flush_at_prompt_end || !self.engine.has_pending() {
            return false;
        }
        let mut probe = self.engine.clone();
        let flushed = probe.flush();
        let text: String = committed.iter().chain(flushed.iter()).map(String::as_str).collect();
        text == self.scorer.remaining()
    }

    fn handle_backspace(&mut self) -> KeyResponse {
        let Some(removed) = self.engine.undo() else {
            return self.response(false);
        };
        let chars: usize = removed.iter().map(|u| u.chars().count()).sum();
        for _ in 0..chars {
            self.scorer.undo();
        }
        let mut r = self.response(true);
        r.removed = removed;
        r
    }

    /// Feed committed units to the scorer one character at a time.
    fn score(&mut self, committed: Vec<String>) -> KeyResponse {
        for c in committed.iter().flat_map(|u| u.chars()) {
            if self.scorer.apply(c) == Applied::Ignored {
                break;
            }
        }
        let mut r = self.response(!committed.is_empty());
        r.committed = committed;
        r
    }

    fn response(&self, consumed: bool) -> KeyResponse {
        KeyResponse::new(consumed, self.engine.pending_text(), self.scorer.phase())
    }
}
