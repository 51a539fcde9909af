//! Transliteration rule table.
//!
//! Three ordered lists drive both transducers:
//! - `consonants`: one Arabic letter to its Latin spelling
//! - `diacritics`: one combining mark to its Latin spelling (may be empty)
//! - `combinations`: whole fixed phrases substituted before anything else
//!
//! Defaults are embedded via `include_str!("default_rules.toml")` and parsed
//! once on first use.

mod config;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub use config::{parse_rules_toml, validate_category, validate_rule_set, RulesConfigError};

pub const DEFAULT_RULES_TOML: &str = include_str!("default_rules.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub arabic: String,
    pub latin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Rule {
    pub fn new(arabic: impl Into<String>, latin: impl Into<String>) -> Self {
        Self {
            arabic: arabic.into(),
            latin: latin.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The Arabic key as a single character, if it is exactly one.
    pub fn single_char(&self) -> Option<char> {
        let mut chars = self.arabic.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Consonants,
    Diacritics,
    Combinations,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 3] = [
        RuleCategory::Consonants,
        RuleCategory::Diacritics,
        RuleCategory::Combinations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Consonants => "consonants",
            RuleCategory::Diacritics => "diacritics",
            RuleCategory::Combinations => "combinations",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleCategory {
    type Err = RulesConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "consonants" | "consonant" => Ok(RuleCategory::Consonants),
            "diacritics" | "diacritic" => Ok(RuleCategory::Diacritics),
            "combinations" | "combination" => Ok(RuleCategory::Combinations),
            _ => Err(RulesConfigError::UnknownCategory(s.to_string())),
        }
    }
}

/// The complete, ordered rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub consonants: Vec<Rule>,
    pub diacritics: Vec<Rule>,
    pub combinations: Vec<Rule>,
}

impl RuleSet {
    pub fn get(&self, category: RuleCategory) -> &[Rule] {
        match category {
            RuleCategory::Consonants => &self.consonants,
            RuleCategory::Diacritics => &self.diacritics,
            RuleCategory::Combinations => &self.combinations,
        }
    }

    pub fn get_mut(&mut self, category: RuleCategory) -> &mut Vec<Rule> {
        match category {
            RuleCategory::Consonants => &mut self.consonants,
            RuleCategory::Diacritics => &mut self.diacritics,
            RuleCategory::Combinations => &mut self.combinations,
        }
    }

    /// Combinations ordered by Arabic length (in chars), longest first.
    /// Ties keep table order.
    pub fn combinations_by_source_len(&self) -> Vec<&Rule> {
        let mut sorted: Vec<&Rule> = self.combinations.iter().collect();
        sorted.sort_by_key(|r| std::cmp::Reverse(r.arabic.chars().count()));
        sorted
    }

    /// Combinations ordered by Latin length (in chars), longest first.
    pub fn combinations_by_target_len(&self) -> Vec<&Rule> {
        let mut sorted: Vec<&Rule> = self.combinations.iter().collect();
        sorted.sort_by_key(|r| std::cmp::Reverse(r.latin.chars().count()));
        sorted
    }

    pub fn len(&self) -> usize {
        self.consonants.len() + self.diacritics.len() + self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        default_rules().clone()
    }
}

/// The built-in rule table, parsed once.
pub fn default_rules() -> &'static RuleSet {
    static INSTANCE: OnceLock<RuleSet> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_rules_toml(DEFAULT_RULES_TOML).expect("default rules TOML must be valid")
    })
}

/// Returns the embedded default rules TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_RULES_TOML
}
