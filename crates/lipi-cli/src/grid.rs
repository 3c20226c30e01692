//! Text rendering of a layout for the terminal.

use lipi_core::layout::{KeyDefinition, Layout};
use lipi_core::script::is_combining;
use unicode_width::UnicodeWidthStr;

const DOTTED_CIRCLE: char = '\u{25CC}';

/// Output as displayed on a key cap. Marks are shown on a dotted circle so
/// they have a base to render on.
fn cap_text(output: &str) -> String {
    match output.chars().next() {
        Some(c) if is_combining(c) => format!("{DOTTED_CIRCLE}{output}"),
        Some(' ') | None => String::new(),
        Some(_) => output.to_string(),
    }
}

fn cell(def: &KeyDefinition) -> String {
    let shifted = def.shift_output.as_deref().map(cap_text).unwrap_or_default();
    let cap = cap_text(&def.output);
    if shifted.is_empty() {
        format!("{} {}", def.label(), cap)
    } else {
        format!("{} {} {}", def.label(), cap, shifted)
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Render rows of `[label output shifted]` cells, all padded to the widest
/// cell. The `highlight` key is drawn with `*` brackets.
pub fn render_layout(layout: &Layout, highlight: Option<&KeyDefinition>) -> String {
    let cells: Vec<Vec<(String, bool)>> = layout
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|def| (cell(def), highlight.is_some_and(|h| h == def)))
                .collect()
        })
        .collect();
    let width = cells
        .iter()
        .flatten()
        .map(|(text, _)| UnicodeWidthStr::width(text.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", layout.name());
    for (i, row) in cells.iter().enumerate() {
        // Stagger rows like a physical keyboard.
        out.push_str(&" ".repeat(i * 2));
        for (text, lit) in row {
            let (open, close) = if *lit { ('*', '*') } else { ('[', ']') };
            out.push(open);
            out.push_str(&pad(text, width));
            out.push(close);
        }
        out.push('\n');
    }
    out
}
