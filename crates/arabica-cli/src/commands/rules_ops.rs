use std::fs;
use std::path::Path;

use arabica_core::rules::{self, RuleCategory};

use super::open_store;

pub fn rules_list(category: &str, store: Option<&Path>) {
    let category: RuleCategory = die!(category.parse(), "Error: {}");
    let store = open_store(store);
    for (i, rule) in store.list(category).iter().enumerate() {
        // A lone combining mark needs a carrier to be visible.
        let arabic = if category == RuleCategory::Diacritics {
            format!("\u{25CC}{}", rule.arabic)
        } else {
            rule.arabic.clone()
        };
        let latin = if rule.latin.is_empty() {
            "(silent)"
        } else {
            rule.latin.as_str()
        };
        match &rule.description {
            Some(desc) => println!("{i:>3}  {arabic}\t{latin}\t{desc}"),
            None => println!("{i:>3}  {arabic}\t{latin}"),
        }
    }
    println!("---");
    println!("{} {category}", store.list(category).len());
}

pub fn rules_set(category: &str, index: usize, latin: &str, store: Option<&Path>) {
    let category: RuleCategory = die!(category.parse(), "Error: {}");
    let mut store = open_store(store);
    die!(store.update(category, index, latin), "Error: {}");
    let rule = &store.list(category)[index];
    println!("Updated: {} → {}", rule.arabic, rule.latin);
}

pub fn rules_reset(store: Option<&Path>) {
    let mut store = open_store(store);
    store.reset();
    println!("Rules reset to defaults");
}

pub fn rules_export() {
    print!("{}", rules::default_toml());
}

pub fn rules_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let set = die!(rules::parse_rules_toml(&content), "Error: {}");
    println!(
        "OK: {} consonants, {} diacritics, {} combinations",
        set.consonants.len(),
        set.diacritics.len(),
        set.combinations.len()
    );
}
