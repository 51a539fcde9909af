fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/rules/default_rules.toml",
        include_str!("src/rules/default_rules.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let value = match content.parse::<toml::Value>() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    if path.ends_with("default_rules.toml") {
        for section in ["consonants", "diacritics", "combinations"] {
            let Some(rules) = value.get(section).and_then(|v| v.as_array()) else {
                panic!("{path} is missing the [[{section}]] array");
            };
            if rules.is_empty() {
                panic!("{path}: [[{section}]] is empty");
            }
        }
    }
}
