//! Stateful transliteration engine.
//!
//! `EngineState` consumes one input unit at a time and commits Devanagari
//! units in strict input order. Composition is deferred where the next input
//! may still change the result: a consonant is held until it is known
//! whether a vowel sign follows, and in phonetic mode Latin characters wait
//! in a lookahead window until the longest matching rule is known.
//!
//! Every accepted input is journalled with a snapshot of the pending state,
//! so `undo` reverses the last input exactly. When that input completed a
//! composed unit (consonant + vowel sign), the inputs composed into it are
//! removed in the same step.

mod compose;
mod strategy;

use lipi_core::layout::{KeyDefinition, Layout};
use lipi_core::settings::{settings, OrphanSignPolicy};
use lipi_core::{ConfigurationError, TransliterationMode};
use tracing::{debug, debug_span, trace};

pub use compose::{CommittedUnit, RawInput};

use compose::Pending;
use strategy::Strategy;

use crate::types::InputUnit;

/// Result of [`EngineState::feed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// The input has no mapping in the active mode; nothing changed.
    Ignored,
    /// The input was taken; `committed` lists the units it finalised (often
    /// none while composition is pending).
    Accepted { committed: Vec<String> },
}

/// Composition policy, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub orphan_sign: OrphanSignPolicy,
    /// Commit a held consonant with a virama when another consonant follows.
    pub join_conjuncts: bool,
}

impl EngineOptions {
    /// Options from the global settings for the given mode. Conjunct joining
    /// only applies to phonetic input; layouts type the virama explicitly.
    pub fn for_mode(mode: TransliterationMode) -> Self {
        let composition = &settings().composition;
        Self {
            orphan_sign: composition.orphan_sign,
            join_conjuncts: mode == TransliterationMode::Phonetic
                && composition.phonetic_conjuncts,
        }
    }
}

#[derive(Clone)]
struct JournalEntry {
    seq: u64,
    committed_len: usize,
    pending: Pending,
}

#[derive(Clone)]
pub struct EngineState {
    mode: TransliterationMode,
    strategy: Strategy,
    options: EngineOptions,
    pending: Pending,
    committed: Vec<CommittedUnit>,
    journal: Vec<JournalEntry>,
    next_seq: u64,
    last_key: Option<&'static KeyDefinition>,
}

impl EngineState {
    pub fn new(mode: TransliterationMode) -> Result<Self, ConfigurationError> {
        Self::with_options(mode, EngineOptions::for_mode(mode))
    }

    pub fn with_options(
        mode: TransliterationMode,
        options: EngineOptions,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            mode,
            strategy: Strategy::for_mode(mode)?,
            options,
            pending: Pending::default(),
            committed: Vec::new(),
            journal: Vec::new(),
            next_seq: 0,
            last_key: None,
        })
    }

    /// Consume one input unit.
    pub fn feed(&mut self, input: InputUnit) -> Feed {
        let _span = debug_span!("feed", ?input).entered();

        if !self.accepts(&input) {
            trace!("unmapped input ignored");
            return Feed::Ignored;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.journal.push(JournalEntry {
            seq,
            committed_len: self.committed.len(),
            pending: self.pending.clone(),
        });

        let units = self.step(RawInput { seq, unit: input });
        // A phonetic orphan sign under the drop policy only shows up once its
        // rule resolves; leave no journal entry when nothing changed.
        if units.is_empty() && self.journal.last().is_some_and(|e| e.pending == self.pending) {
            self.journal.pop();
            self.next_seq = seq;
            trace!("input resolved to nothing");
            return Feed::Ignored;
        }
        let committed = units.iter().map(|u| u.text.clone()).collect();
        self.committed.extend(units);
        Feed::Accepted { committed }
    }

    /// Commit everything pending. Returns the committed texts.
    pub fn flush(&mut self) -> Vec<String> {
        let units = self.flush_pending();
        let texts = units.iter().map(|u| u.text.clone()).collect();
        self.committed.extend(units);
        texts
    }

    /// Reverse the most recent accepted input.
    ///
    /// Returns the texts of the committed units removed (empty when the input
    /// had only changed pending state), or `None` when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> Option<Vec<String>> {
        let entry = self.journal.pop()?;
        let removed = self.committed.split_off(entry.committed_len);
        let mut pending = entry.pending;

        // The undone input completed a composed unit: drop the inputs that
        // were composed into it as well, so the unit goes away in one step.
        if let Some(unit) = removed.last() {
            let completed_here = unit.inputs.last().is_some_and(|r| r.seq == entry.seq);
            if completed_here && unit.raw_count() > 1 {
                let absorbed: Vec<u64> = unit.inputs[..unit.raw_count() - 1]
                    .iter()
                    .map(|r| r.seq)
                    .collect();
                let oldest = absorbed.iter().copied().min().unwrap_or(entry.seq);
                while self.journal.last().is_some_and(|e| e.seq >= oldest) {
                    self.journal.pop();
                }
                let keep: Vec<RawInput> = pending
                    .inputs()
                    .filter(|r| !absorbed.contains(&r.seq))
                    .cloned()
                    .collect();
                if let Some(rebuilt) = self.replay(keep) {
                    pending = rebuilt;
                }
            }
        }

        debug!(removed = removed.len(), "undo");
        self.pending = pending;
        self.last_key = None;
        Some(removed.into_iter().map(|u| u.text).collect())
    }

    /// Rebuild pending state from raw inputs that never commit anything on
    /// their own. `None` if they unexpectedly do.
    fn replay(&mut self, inputs: Vec<RawInput>) -> Option<Pending> {
        let saved = std::mem::take(&mut self.pending);
        let mut committed_any = false;
        for raw in inputs {
            committed_any |= !self.step(raw).is_empty();
        }
        let rebuilt = std::mem::replace(&mut self.pending, saved);
        (!committed_any).then_some(rebuilt)
    }

    pub fn mode(&self) -> TransliterationMode {
        self.mode
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Active layout, for layout-driven modes.
    pub fn layout(&self) -> Option<&'static Layout> {
        match self.strategy {
            Strategy::LayoutDriven(layout) => Some(layout),
            Strategy::Phonetic(_) | Strategy::Passthrough => None,
        }
    }

    /// Definition of the last key resolved by a layout-driven feed.
    pub fn last_key(&self) -> Option<&'static KeyDefinition> {
        self.last_key
    }

    pub fn committed(&self) -> &[CommittedUnit] {
        &self.committed
    }

    pub fn committed_text(&self) -> String {
        self.committed.iter().map(|u| u.text.as_str()).collect()
    }

    /// Uncommitted text: a held consonant followed by any raw Latin
    /// characters still in the lookahead window.
    pub fn pending_text(&self) -> String {
        self.pending.text()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Whether `undo` has anything to reverse.
    pub fn can_undo(&self) -> bool {
        !self.journal.is_empty()
    }
}
