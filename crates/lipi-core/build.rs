fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/phonetic/default_phonetic.toml",
        include_str!("src/phonetic/default_phonetic.toml"),
    );
    validate_toml(
        "src/layout/inscript.toml",
        include_str!("src/layout/inscript.toml"),
    );
    validate_toml(
        "src/layout/remington.toml",
        include_str!("src/layout/remington.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
