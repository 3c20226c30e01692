use lipi_core::layout::normalize_key_id;

use crate::scorer::Phase;

/// One raw input unit as delivered by the input source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputUnit {
    /// Physical key event (layout-driven modes).
    Key { key: String, shift: bool },
    /// Typed character (phonetic and pass-through modes).
    Char(char),
}

impl InputUnit {
    pub fn key(key: &str, shift: bool) -> Self {
        Self::Key {
            key: key.to_string(),
            shift,
        }
    }

    /// The character this unit types, for character-driven modes. Key
    /// identifiers and DOM codes naming a single character are accepted too
    /// (uppercased with shift).
    pub(crate) fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::Key { key, shift } if key == "Space" => (!*shift).then_some(' '),
            Self::Key { key, shift } => {
                let id = normalize_key_id(key);
                let mut chars = id.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if *shift => Some(c.to_ascii_uppercase()),
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
        }
    }
}

/// Key events handled by a [`crate::TypingSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Input(InputUnit),
    Backspace,
    /// Commit everything still pending (Enter).
    Commit,
}

impl KeyEvent {
    pub fn key(key: &str, shift: bool) -> Self {
        Self::Input(InputUnit::key(key, shift))
    }

    pub fn text(c: char) -> Self {
        Self::Input(InputUnit::Char(c))
    }
}

/// What a key event did, for the caller's display.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResponse {
    /// False when the event was ignored (unmapped input, nothing to undo,
    /// session already complete).
    pub consumed: bool,
    /// Units committed by this event, in order.
    pub committed: Vec<String>,
    /// Units removed by a backspace, in order.
    pub removed: Vec<String>,
    /// Uncommitted composition text after the event.
    pub pending: String,
    pub phase: Phase,
}

impl KeyResponse {
    pub(crate) fn new(consumed: bool, pending: String, phase: Phase) -> Self {
        Self {
            consumed,
            committed: Vec::new(),
            removed: Vec::new(),
            pending,
            phase,
        }
    }
}
