use std::fs;

use lipi_core::layout::{builtin_toml, parse_layout_toml};

pub fn settings_export() {
    print!("{}", lipi_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        lipi_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: composition.orphan_sign={:?}, composition.phonetic_conjuncts={}, scoring.chars_per_word={}",
        s.composition.orphan_sign, s.composition.phonetic_conjuncts, s.scoring.chars_per_word
    );
}

pub fn phonetic_export() {
    print!("{}", lipi_core::phonetic::default_toml());
}

pub fn phonetic_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let rules = die!(lipi_core::phonetic::parse_phonetic_toml(&content), "Error: {}");
    println!("OK: {} rules", rules.len());
}

pub fn layout_export(name: &str) {
    match builtin_toml(name) {
        Some(toml) => print!("{toml}"),
        None => {
            eprintln!("Error: no built-in layout named {name}");
            std::process::exit(1);
        }
    }
}

pub fn layout_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let (name, rows) = die!(parse_layout_toml(&content), "Error: {}");
    let keys: usize = rows.iter().map(Vec::len).sum();
    println!("OK: layout {name}, {} rows, {keys} keys", rows.len());
}
