//! Latin-to-Arabic transduction.
//!
//! Best-effort and lossy: cross-word assimilation, liaison and diacritic
//! placement are not reconstructed. A greedy left-to-right scan with no
//! backtracking; the first matching class wins.

use tracing::debug_span;

use crate::config::Config;
use crate::rules::Rule;
use crate::script::{self, AIN, ALIF, DAMMA, FATHA, KASRA, LAM, WAW, YA};

/// One invertible rule: Latin key as chars, Arabic value.
struct ReverseEntry<'a> {
    latin: Vec<char>,
    arabic: &'a str,
}

/// Invert `rules` (plus `extra` fallbacks), longest Latin key first.
/// Rules with empty Latin cannot be inverted and are skipped.
fn reverse_table<'a>(rules: &'a [Rule], extra: &[(&'a str, &'a str)]) -> Vec<ReverseEntry<'a>> {
    let mut table: Vec<ReverseEntry<'a>> = rules
        .iter()
        .filter(|r| !r.latin.is_empty())
        .map(|r| ReverseEntry {
            latin: r.latin.chars().collect(),
            arabic: r.arabic.as_str(),
        })
        .chain(extra.iter().map(|&(latin, arabic)| ReverseEntry {
            latin: latin.chars().collect(),
            arabic,
        }))
        .collect();
    table.sort_by_key(|e| std::cmp::Reverse(e.latin.len()));
    table
}

fn starts_with(rest: &[char], key: &[char]) -> bool {
    rest.len() >= key.len() && rest.iter().zip(key).all(|(a, b)| a == b)
}

fn starts_with_ignore_case(rest: &[char], key: &[char]) -> bool {
    rest.len() >= key.len()
        && rest
            .iter()
            .zip(key)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}

/// Long-vowel spellings and their vowel-mark + letter renderings.
fn long_vowel(rest: &[char]) -> Option<(usize, [char; 2])> {
    match rest {
        ['â', ..] => Some((1, [FATHA, ALIF])),
        ['a', 'a', ..] => Some((2, [FATHA, ALIF])),
        ['î', ..] => Some((1, [KASRA, YA])),
        ['i', 'i', ..] => Some((2, [KASRA, YA])),
        ['û', ..] => Some((1, [DAMMA, WAW])),
        ['u', 'u', ..] => Some((2, [DAMMA, WAW])),
        _ => None,
    }
}

/// Map Latin text back to vocalized Arabic. Total: never fails.
pub fn reverse_transliterate(text: &str, config: &Config) -> String {
    let _span = debug_span!("reverse_transliterate", len = text.len()).entered();
    if text.trim().is_empty() {
        return String::new();
    }

    let mut substituted = text.to_string();
    for rule in config.rules.combinations_by_target_len() {
        if !rule.latin.is_empty() && substituted.contains(rule.latin.as_str()) {
            substituted = substituted.replace(rule.latin.as_str(), &rule.arabic);
        }
    }

    let consonants = reverse_table(&config.rules.consonants, &[("w", "و"), ("y", "ي")]);
    let diacritics = reverse_table(&config.rules.diacritics, &[]);
    let article: Vec<char> = "al-".chars().collect();

    let chars: Vec<char> = substituted.chars().collect();
    let mut out = String::with_capacity(substituted.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let rest = &chars[i..];
        let c = chars[i];

        if script::is_arabic(c) {
            out.push(c);
            i += 1;
            continue;
        }
        if let Some((len, arabic)) = long_vowel(rest) {
            out.extend(arabic);
            i += len;
            continue;
        }
        if starts_with_ignore_case(rest, &article) {
            out.push(ALIF);
            out.push(LAM);
            i += article.len();
            continue;
        }
        if let Some(entry) = consonants
            .iter()
            .find(|e| starts_with_ignore_case(rest, &e.latin))
        {
            out.push_str(entry.arabic);
            i += entry.latin.len();
            continue;
        }
        if let Some(entry) = diacritics.iter().find(|e| starts_with(rest, &e.latin)) {
            out.push_str(entry.arabic);
            i += entry.latin.len();
            continue;
        }
        match c {
            'a' | 'A' => out.push(FATHA),
            'i' | 'I' => out.push(KASRA),
            'u' | 'U' => out.push(DAMMA),
            '\'' | '\u{2019}' => out.push(AIN),
            '-' => {}
            c if c.is_whitespace() || matches!(c, '.' | ',' | '،' | '!' | '?') => out.push(c),
            _ => {}
        }
        i += 1;
    }
    out
}
