use crate::rules::Rule;

use super::lookup::RuleLookup;

/// A base character together with the marks that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cluster {
    pub base: char,
    pub marks: Vec<char>,
}

impl Cluster {
    pub(crate) fn has(&self, mark: char) -> bool {
        self.marks.contains(&mark)
    }
}

/// Split a word into clusters. Marks attach to the preceding base; a mark
/// with nothing before it becomes a base of its own.
pub(crate) fn clusters(word: &str, lookup: &RuleLookup) -> Vec<Cluster> {
    let mut out: Vec<Cluster> = Vec::with_capacity(word.len() / 2);
    for c in word.chars() {
        match out.last_mut() {
            Some(last) if lookup.is_mark(c) => last.marks.push(c),
            _ => out.push(Cluster {
                base: c,
                marks: Vec::new(),
            }),
        }
    }
    out
}

/// Replace every occurrence of each rule's Arabic with its Latin, in the
/// given order.
pub(crate) fn apply_combinations(text: &str, rules: &[&Rule]) -> String {
    let mut out = text.to_string();
    for rule in rules {
        if !rule.arabic.is_empty() && out.contains(rule.arabic.as_str()) {
            out = out.replace(rule.arabic.as_str(), &rule.latin);
        }
    }
    out
}
