use std::io::{self, Read};
use std::path::Path;

use arabica_core::rules::RuleSet;
use arabica_core::{analyze, reverse_transliterate, transliterate, Config};
use arabica_session::{FileStore, RuleStore};

use super::load_settings;

fn read_input(text: Option<&str>) -> String {
    match text {
        Some(text) => text.to_string(),
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    }
}

/// Built-in rules, or the user's rules when a store directory is given.
fn load_config(store: Option<&Path>, settings: Option<&Path>) -> Config {
    let settings = load_settings(settings);
    match store {
        Some(dir) => RuleStore::open(FileStore::new(dir))
            .with_settings(settings)
            .config(),
        None => Config::new(RuleSet::default(), &settings),
    }
}

pub fn latin_cmd(text: Option<&str>, store: Option<&Path>, settings: Option<&Path>, explain: bool) {
    let input = read_input(text);
    let config = load_config(store, settings);
    if explain {
        let words = analyze(&input, &config);
        let json = die!(serde_json::to_string_pretty(&words), "Error: {}");
        println!("{json}");
    }
    println!("{}", transliterate(&input, &config));
}

pub fn arabic_cmd(text: Option<&str>, store: Option<&Path>, settings: Option<&Path>) {
    let input = read_input(text);
    let config = load_config(store, settings);
    println!("{}", reverse_transliterate(&input, &config));
}
