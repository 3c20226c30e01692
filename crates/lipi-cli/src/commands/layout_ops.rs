use lipi_core::layout::{normalize_key_id, Layouts};

use crate::grid::render_layout;

pub fn layout_list() {
    let layouts = Layouts::global();
    for name in layouts.names() {
        let keys: usize = layouts
            .get(name)
            .map(|l| l.rows().iter().map(Vec::len).sum())
            .unwrap_or(0);
        println!("{name}\t{keys} keys");
    }
}

/// Print `name` as a key grid, optionally highlighting one key.
pub fn layout_show(name: &str, highlight: Option<&str>) {
    let Some(layout) = Layouts::global().get(name) else {
        eprintln!("Error: no layout named {name}");
        std::process::exit(1);
    };
    let key = highlight.and_then(|k| layout.lookup(&normalize_key_id(k)));
    if let (Some(k), None) = (highlight, key) {
        eprintln!("Warning: key {k} is not in layout {name}");
    }
    print!("{}", render_layout(layout, key));
}
