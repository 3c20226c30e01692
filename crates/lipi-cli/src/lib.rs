//! Diagnostics for the lipi engine: transliterate typing scripts, render
//! layouts, replay practice sessions and record their summaries.

pub mod commands;
pub mod grid;
pub mod recorder;
pub mod script;

pub use recorder::JsonlRecorder;
pub use script::{parse_script, ScriptError};
