//! Typing scripts: a compact text form of a key event sequence.
//!
//! Plain characters are typed as-is. In layout modes each character names
//! the US-QWERTY key that produces it (`K` is shift+k) and a space is the
//! space bar. Angle-bracket escapes add the other events: `<bs>` (backspace),
//! `<enter>` (commit pending), `<lt>` (a literal `<`) and `<Key...>` for a
//! DOM key code such as `<KeyK>` or `<Digit3>`; prefix `S-` for shift
//! (`<S-Digit3>`).

use lipi_core::TransliterationMode;
use lipi_session::KeyEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unterminated escape starting at column {0}")]
    Unterminated(usize),
    #[error("unknown escape <{0}>")]
    UnknownEscape(String),
}

/// Parse a typing script into key events for `mode`.
pub fn parse_script(script: &str, mode: TransliterationMode) -> Result<Vec<KeyEvent>, ScriptError> {
    let layout_driven = mode.layout_name().is_some();
    let mut events = Vec::new();
    let mut rest = script;
    let mut column = 0;

    while let Some(c) = rest.chars().next() {
        if c == '<' {
            let end = rest.find('>').ok_or(ScriptError::Unterminated(column))?;
            let name = &rest[1..end];
            events.push(parse_escape(name, layout_driven)?);
            column += rest[..=end].chars().count();
            rest = &rest[end + 1..];
            continue;
        }
        if c != '\n' && c != '\r' {
            events.push(char_event(c, layout_driven));
        }
        column += 1;
        rest = &rest[c.len_utf8()..];
    }
    Ok(events)
}

fn char_event(c: char, layout_driven: bool) -> KeyEvent {
    match (layout_driven, c) {
        (true, ' ') => KeyEvent::key("Space", false),
        (true, c) => KeyEvent::key(c.encode_utf8(&mut [0u8; 4]), false),
        (false, c) => KeyEvent::text(c),
    }
}

fn parse_escape(name: &str, layout_driven: bool) -> Result<KeyEvent, ScriptError> {
    match name {
        "bs" => return Ok(KeyEvent::Backspace),
        "enter" => return Ok(KeyEvent::Commit),
        "lt" => return Ok(char_event('<', layout_driven)),
        _ => {}
    }
    let (code, shift) = match name.strip_prefix("S-") {
        Some(code) => (code, true),
        None => (name, false),
    };
    if code.starts_with("Key") || code.starts_with("Digit") || code == "Space" {
        Ok(KeyEvent::key(code, shift))
    } else {
        Err(ScriptError::UnknownEscape(name.to_string()))
    }
}
