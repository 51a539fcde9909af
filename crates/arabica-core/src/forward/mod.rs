//! Arabic-to-Latin transduction.
//!
//! Pipeline: whole-text phrase substitution, whitespace segmentation,
//! per-word article detection and cluster transduction, a cross-word pass
//! for nun assimilation and liaison, then text-level post-processing.

mod article;
mod join;
mod lookup;
mod postprocess;
mod segment;
mod word;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::config::Config;
use crate::rules::Rule;
use crate::script;

use lookup::RuleLookup;

pub use article::Article;
pub use word::Word;

/// Transliterate Arabic text to Latin. Total: never fails, never panics.
pub fn transliterate(text: &str, config: &Config) -> String {
    let _span = debug_span!("transliterate", len = text.len()).entered();
    if text.trim().is_empty() {
        return String::new();
    }
    if !text.chars().any(script::is_arabic) {
        return postprocess::collapse_whitespace(text);
    }
    let lookup = RuleLookup::new(&config.rules);
    let words = transduce_words(text, &config.rules.combinations_by_source_len(), &lookup);
    let joined = join::join_words(&words, &lookup);
    postprocess::postprocess(&joined, config)
}

/// Per-word analysis as seen by the cross-word pass, for inspection.
pub fn analyze(text: &str, config: &Config) -> Vec<Word> {
    let lookup = RuleLookup::new(&config.rules);
    transduce_words(text, &config.rules.combinations_by_source_len(), &lookup)
}

fn transduce_words(text: &str, combinations: &[&Rule], lookup: &RuleLookup) -> Vec<Word> {
    let (phrases, single): (Vec<&Rule>, Vec<&Rule>) = combinations
        .iter()
        .copied()
        .partition(|r| r.arabic.chars().any(char::is_whitespace));
    let text = segment::apply_combinations(text, &phrases);
    let words: Vec<Word> = text
        .split_whitespace()
        .filter_map(|w| word::transduce_word(w, lookup, &single))
        .collect();
    debug!(word_count = words.len(), phrase_rules = phrases.len());
    words
}
