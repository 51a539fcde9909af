use std::collections::HashMap;

use crate::rules::RuleSet;
use crate::script;

/// Per-call character index over the single-character rules.
pub(crate) struct RuleLookup<'a> {
    consonants: HashMap<char, &'a str>,
    marks: HashMap<char, &'a str>,
}

impl<'a> RuleLookup<'a> {
    pub(crate) fn new(rules: &'a RuleSet) -> Self {
        let mut consonants = HashMap::with_capacity(rules.consonants.len());
        for rule in &rules.consonants {
            if let Some(c) = rule.single_char() {
                consonants.entry(c).or_insert(rule.latin.as_str());
            }
        }
        let mut marks = HashMap::with_capacity(rules.diacritics.len());
        for rule in &rules.diacritics {
            if let Some(c) = rule.single_char() {
                marks.entry(c).or_insert(rule.latin.as_str());
            }
        }
        Self { consonants, marks }
    }

    /// Latin for a consonant rule. Empty spellings count as absent.
    pub(crate) fn consonant(&self, c: char) -> Option<&'a str> {
        self.consonants.get(&c).copied().filter(|l| !l.is_empty())
    }

    /// Latin for `c` from the rule table, else from the built-in letter table.
    pub(crate) fn letter(&self, c: char) -> Option<&'a str> {
        self.consonant(c).or_else(|| script::builtin_latin(c))
    }

    /// Like [`letter`](Self::letter), with a literal fallback.
    pub(crate) fn letter_or(&self, c: char, fallback: &'a str) -> &'a str {
        self.letter(c).filter(|l| !l.is_empty()).unwrap_or(fallback)
    }

    pub(crate) fn is_mark(&self, c: char) -> bool {
        self.marks.contains_key(&c)
    }

    pub(crate) fn mark(&self, c: char) -> Option<&'a str> {
        self.marks.get(&c).copied()
    }

    /// The mark's own vowel: the first mark other than shadda/sukun whose
    /// Latin is non-empty.
    pub(crate) fn vowel_of(&self, marks: &[char]) -> Option<&'a str> {
        marks
            .iter()
            .filter(|&&m| m != script::SHADDA && m != script::SUKUN)
            .find_map(|&m| self.mark(m).filter(|l| !l.is_empty()))
    }

    /// Latin of the first fatha/kasra/damma among `marks`.
    pub(crate) fn short_vowel_of(&self, marks: &[char]) -> Option<&'a str> {
        marks
            .iter()
            .find(|&&m| script::is_short_vowel_mark(m))
            .and_then(|&m| self.mark(m))
            .filter(|l| !l.is_empty())
    }
}
