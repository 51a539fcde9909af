use std::fs;

pub fn settings_export() {
    print!("{}", arabica_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        arabica_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: render.use_long_vowel_marks={}, render.use_emphatic={}",
        s.render.use_long_vowel_marks, s.render.use_emphatic
    );
}
