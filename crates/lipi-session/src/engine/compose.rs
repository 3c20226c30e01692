use lipi_core::phonetic::drain;
use lipi_core::script::{is_consonant_final, to_independent, VIRAMA};
use lipi_core::settings::OrphanSignPolicy;
use tracing::trace;

use super::strategy::{key_of, Glyph, Strategy};
use super::EngineState;
use crate::types::InputUnit;

/// An accepted input unit tagged with its position in the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub seq: u64,
    pub unit: InputUnit,
}

/// Text the engine has finalised, with the raw inputs it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedUnit {
    pub text: String,
    pub inputs: Vec<RawInput>,
}

impl CommittedUnit {
    pub fn raw_count(&self) -> usize {
        self.inputs.len()
    }
}

/// A consonant awaiting a possible vowel sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Held {
    pub(crate) text: String,
    pub(crate) inputs: Vec<RawInput>,
}

/// Uncommitted composition state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Pending {
    pub(crate) held: Option<Held>,
    /// Phonetic lookahead window, one ASCII char per entry of `latin_inputs`.
    pub(crate) latin: String,
    pub(crate) latin_inputs: Vec<RawInput>,
}

impl Pending {
    pub(crate) fn is_empty(&self) -> bool {
        self.held.is_none() && self.latin.is_empty()
    }

    /// Raw inputs held, oldest first.
    pub(crate) fn inputs(&self) -> impl Iterator<Item = &RawInput> {
        self.held
            .iter()
            .flat_map(|h| h.inputs.iter())
            .chain(self.latin_inputs.iter())
    }

    pub(crate) fn text(&self) -> String {
        let held = self.held.as_ref().map_or("", |h| h.text.as_str());
        format!("{}{}", held, self.latin)
    }
}

impl EngineState {
    /// Whether `unit` maps to anything in the active mode.
    pub(super) fn accepts(&self, unit: &InputUnit) -> bool {
        match self.strategy {
            Strategy::LayoutDriven(layout) => {
                let (id, shift) = key_of(unit);
                match layout.resolve(&id, shift) {
                    Some((_, out)) => !self.is_dropped_orphan(&Glyph::from_output(out)),
                    None => false,
                }
            }
            Strategy::Phonetic(table) => unit.as_char().is_some_and(|c| table.accepts(c)),
            Strategy::Passthrough => unit
                .as_char()
                .is_some_and(|c| c == ' ' || c.is_ascii_graphic()),
        }
    }

    fn is_dropped_orphan(&self, glyph: &Glyph) -> bool {
        matches!(glyph, Glyph::Sign(_))
            && self.pending.held.is_none()
            && self.options.orphan_sign == OrphanSignPolicy::Drop
    }

    /// Apply one accepted input to the pending state, returning the units it
    /// commits. Does not touch the committed sequence or the journal.
    pub(super) fn step(&mut self, raw: RawInput) -> Vec<CommittedUnit> {
        let mut out = Vec::new();
        match self.strategy {
            Strategy::LayoutDriven(layout) => {
                let (id, shift) = key_of(&raw.unit);
                let Some((def, text)) = layout.resolve(&id, shift) else {
                    return out;
                };
                self.last_key = Some(def);
                let glyph = Glyph::from_output(text);
                self.compose(glyph, vec![raw], &mut out);
            }
            Strategy::Phonetic(_) => {
                let Some(c) = raw.unit.as_char() else {
                    return out;
                };
                self.pending.latin.push(c);
                self.pending.latin_inputs.push(raw);
                self.drain_latin(false, &mut out);
            }
            Strategy::Passthrough => {
                if let Some(c) = raw.unit.as_char() {
                    out.push(CommittedUnit {
                        text: c.to_string(),
                        inputs: vec![raw],
                    });
                }
            }
        }
        out
    }

    /// Commit everything pending: the lookahead window is resolved by force,
    /// then any held consonant is committed with its inherent vowel.
    pub(super) fn flush_pending(&mut self) -> Vec<CommittedUnit> {
        let mut out = Vec::new();
        self.drain_latin(true, &mut out);
        if let Some(held) = self.pending.held.take() {
            out.push(commit(held));
        }
        out
    }

    fn drain_latin(&mut self, force: bool, out: &mut Vec<CommittedUnit>) {
        let Strategy::Phonetic(table) = self.strategy else {
            return;
        };
        if self.pending.latin.is_empty() {
            return;
        }
        let (matches, consumed) = drain(table, &self.pending.latin, force);
        let mut inputs = std::mem::take(&mut self.pending.latin_inputs).into_iter();
        for m in matches {
            let raws: Vec<RawInput> = inputs.by_ref().take(m.len).collect();
            match m.rule {
                Some(rule) => self.compose(Glyph::from_rule(rule), raws, out),
                None => trace!(?raws, "unresolvable phonetic input dropped"),
            }
        }
        self.pending.latin_inputs = inputs.collect();
        self.pending.latin.drain(..consumed);
    }

    fn compose(&mut self, glyph: Glyph, inputs: Vec<RawInput>, out: &mut Vec<CommittedUnit>) {
        trace!(?glyph, held = ?self.pending.held.as_ref().map(|h| &h.text), "compose");
        match glyph {
            Glyph::Consonant(text) => {
                if let Some(mut prev) = self.pending.held.take() {
                    if self.options.join_conjuncts {
                        prev.text.push(VIRAMA);
                    }
                    out.push(commit(prev));
                }
                self.pending.held = Some(Held { text, inputs });
            }
            Glyph::Sign(text) => match self.pending.held.take() {
                Some(mut held) => {
                    held.text.push_str(&text);
                    held.inputs.extend(inputs);
                    // Rakar or nukta leave a consonant that can still take a vowel sign.
                    if is_consonant_final(&held.text) {
                        self.pending.held = Some(held);
                    } else {
                        out.push(commit(held));
                    }
                }
                None => match self.options.orphan_sign {
                    OrphanSignPolicy::Standalone => out.push(CommittedUnit { text, inputs }),
                    OrphanSignPolicy::Independent => out.push(CommittedUnit {
                        text: to_independent(&text),
                        inputs,
                    }),
                    OrphanSignPolicy::Drop => trace!(%text, "orphan sign dropped"),
                },
            },
            Glyph::Vowel { independent, sign } => match self.pending.held.take() {
                Some(mut held) => {
                    held.text.push_str(&sign);
                    held.inputs.extend(inputs);
                    out.push(commit(held));
                }
                None => out.push(CommittedUnit {
                    text: independent,
                    inputs,
                }),
            },
            Glyph::Other(text) => {
                if let Some(held) = self.pending.held.take() {
                    out.push(commit(held));
                }
                out.push(CommittedUnit { text, inputs });
            }
        }
    }
}

fn commit(held: Held) -> CommittedUnit {
    CommittedUnit {
        text: held.text,
        inputs: held.inputs,
    }
}
