use lipi_core::{ConfigurationError, TransliterationMode};
use lipi_session::{EngineState, KeyEvent};

use crate::script::parse_script;

/// Run `events` through a fresh engine and flush what is left pending.
/// Backspace undoes the last input; commit flushes.
pub fn transliterate(
    mode: TransliterationMode,
    events: Vec<KeyEvent>,
) -> Result<EngineState, ConfigurationError> {
    let mut engine = EngineState::new(mode)?;
    for event in events {
        match event {
            KeyEvent::Input(unit) => {
                engine.feed(unit);
            }
            KeyEvent::Backspace => {
                engine.undo();
            }
            KeyEvent::Commit => {
                engine.flush();
            }
        }
    }
    engine.flush();
    Ok(engine)
}

pub fn translit_cmd(mode: &str, script: &str, units: bool) {
    let mode: TransliterationMode = die!(mode.parse(), "Error: {}");
    let events = die!(parse_script(script, mode), "Error parsing script: {}");
    let engine = die!(transliterate(mode, events), "Error: {}");

    if units {
        for unit in engine.committed() {
            println!("{}\t{} input(s)", unit.text, unit.raw_count());
        }
    } else {
        println!("{}", engine.committed_text());
    }
}
