use crate::rules::RuleSet;
use crate::settings::Settings;

/// Immutable snapshot handed to both transducers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rules: RuleSet,
    pub use_long_vowel_marks: bool,
    pub use_emphatic: bool,
}

impl Config {
    pub fn new(rules: RuleSet, settings: &Settings) -> Self {
        Self {
            rules,
            use_long_vowel_marks: settings.render.use_long_vowel_marks,
            use_emphatic: settings.render.use_emphatic,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(RuleSet::default(), &Settings::default())
    }
}
