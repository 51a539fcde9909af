//! Persisted JSON shape of the rule table.
//!
//! Every category is optional so a partial or older blob still loads; a
//! missing or invalid category falls back to its built-in default alone.

use arabica_core::rules::{validate_category, RuleCategory, RuleSet};
use arabica_core::Rule;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct PersistedRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consonants: Option<Vec<Rule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diacritics: Option<Vec<Rule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinations: Option<Vec<Rule>>,
}

impl PersistedRules {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(rules: &RuleSet) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Self {
            consonants: Some(rules.consonants.clone()),
            diacritics: Some(rules.diacritics.clone()),
            combinations: Some(rules.combinations.clone()),
        })
    }

    fn take(&mut self, category: RuleCategory) -> Option<Vec<Rule>> {
        match category {
            RuleCategory::Consonants => self.consonants.take(),
            RuleCategory::Diacritics => self.diacritics.take(),
            RuleCategory::Combinations => self.combinations.take(),
        }
    }

    /// Merge over `defaults`, one category at a time.
    pub fn into_rule_set(mut self, defaults: &RuleSet) -> RuleSet {
        let mut rules = defaults.clone();
        for category in RuleCategory::ALL {
            let Some(stored) = self.take(category) else {
                continue;
            };
            match validate_category(category, &stored) {
                Ok(()) => *rules.get_mut(category) = stored,
                Err(e) => warn!(%category, error = %e, "stored rules invalid, using defaults"),
            }
        }
        rules
    }
}
