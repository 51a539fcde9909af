use std::collections::HashSet;

use super::{Rule, RuleCategory, RuleSet};

#[derive(Debug, thiserror::Error)]
pub enum RulesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[{0}]] table is empty")]
    EmptyCategory(RuleCategory),
    #[error("{category} rule #{index} has an empty arabic key")]
    EmptySource { category: RuleCategory, index: usize },
    #[error("duplicate {category} key: {key}")]
    DuplicateKey { category: RuleCategory, key: String },
    #[error("unknown rule category: {0}")]
    UnknownCategory(String),
}

/// Parse and validate a rules TOML document.
pub fn parse_rules_toml(toml_str: &str) -> Result<RuleSet, RulesConfigError> {
    let rules: RuleSet =
        toml::from_str(toml_str).map_err(|e| RulesConfigError::Parse(e.to_string()))?;
    validate_rule_set(&rules)?;
    Ok(rules)
}

pub fn validate_rule_set(rules: &RuleSet) -> Result<(), RulesConfigError> {
    for category in RuleCategory::ALL {
        validate_category(category, rules.get(category))?;
    }
    Ok(())
}

/// Check one category: non-empty, no empty keys, and no duplicate keys
/// among consonants and diacritics. Combinations may repeat a key; the
/// first one in table order wins.
/// Latin values may be empty (sukun, maddah and waqf marks are silent).
pub fn validate_category(category: RuleCategory, rules: &[Rule]) -> Result<(), RulesConfigError> {
    if rules.is_empty() {
        return Err(RulesConfigError::EmptyCategory(category));
    }
    let mut seen = HashSet::with_capacity(rules.len());
    for (index, rule) in rules.iter().enumerate() {
        if rule.arabic.is_empty() {
            return Err(RulesConfigError::EmptySource { category, index });
        }
        if category != RuleCategory::Combinations && !seen.insert(rule.arabic.as_str()) {
            return Err(RulesConfigError::DuplicateKey {
                category,
                key: rule.arabic.clone(),
            });
        }
    }
    Ok(())
}
