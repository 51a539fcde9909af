use serde::Serialize;

use crate::script::{self, FATHA, KASRA, LAM, NUN, SHADDA, SUKUN};

use super::lookup::RuleLookup;

/// Definite-article class of a word, decided on the raw Arabic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "latin", rename_all = "lowercase")]
pub enum Article {
    #[default]
    None,
    /// The lam assimilates into the carried consonant spelling.
    Sun(String),
    Moon,
    /// The word contains the divine name.
    Allah,
}

impl Article {
    pub fn is_some(&self) -> bool {
        !matches!(self, Article::None)
    }
}

const DIVINE_NAME: &str = "\u{0644}\u{0651}\u{0670}\u{0647}";
const DIVINE_NAME_BARE: &str = "\u{0644}\u{0644}\u{0647}";

fn contains_divine_name(word: &str) -> bool {
    word.contains(DIVINE_NAME) || word.contains(DIVINE_NAME_BARE)
}

fn skip_harakat(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && script::is_harakah(chars[i]) {
        i += 1;
    }
    i
}

/// Index of the article's lam, if the word opens with the article.
///
/// Recognized shapes:
/// - alif or alif wasla (bare or with fatha) + lam
/// - one-letter clitic + fatha/kasra + alif + lam
/// - lam + kasra + lam (li- with the article's alif elided)
///
/// A word-initial lam carrying a bare short vowel is a root letter, not
/// the article.
fn article_lam_index(chars: &[char]) -> Option<usize> {
    let first = *chars.first()?;
    if script::is_article_alif(first) {
        let lam = skip_harakat(chars, 1);
        // Kasra or damma on the alif is a root vowel (illâ, ilâh, ulâ-ika).
        if chars[1..lam].iter().any(|&m| m != FATHA) {
            return None;
        }
        if chars.get(lam) != Some(&LAM) {
            return None;
        }
        let after = skip_harakat(chars, lam + 1);
        let lam_marks = &chars[lam + 1..after];
        let bare_vowel = lam_marks.iter().any(|&m| script::is_short_vowel_mark(m))
            && !lam_marks.contains(&SHADDA);
        return (!bare_vowel).then_some(lam);
    }
    if chars.len() >= 4
        && script::is_clitic_prefix(first)
        && matches!(chars[1], FATHA | KASRA)
        && script::is_article_alif(chars[2])
        && chars[3] == LAM
    {
        return Some(3);
    }
    if chars.len() >= 3 && first == LAM && chars[1] == KASRA && chars[2] == LAM {
        return Some(2);
    }
    None
}

pub(crate) fn detect_article(word: &str, lookup: &RuleLookup) -> Article {
    let chars: Vec<char> = word.chars().collect();
    let Some(lam) = article_lam_index(&chars) else {
        return Article::None;
    };
    let after = skip_harakat(&chars, lam + 1);
    if chars[lam + 1..after].contains(&SHADDA) {
        return Article::Sun(lookup.letter_or(LAM, "l").to_string());
    }
    if contains_divine_name(word) {
        return Article::Allah;
    }
    match chars.get(after) {
        Some(&next) if script::is_sun_letter(next) => {
            Article::Sun(lookup.letter(next).unwrap_or_default().to_string())
        }
        _ => Article::Moon,
    }
}

/// The first pronounced consonant of the raw word, used for cross-word
/// nun rules. `None` when the word opens on a vowel.
pub(crate) fn first_consonant(word: &str) -> Option<char> {
    let chars: Vec<char> = word.chars().collect();
    let first = *chars.first()?;
    if first == script::ALIF_MADDA {
        return None;
    }
    if matches!(
        first,
        script::ALIF | script::ALIF_HAMZA_ABOVE | script::ALIF_HAMZA_BELOW
    ) && chars.get(1).copied().is_some_and(script::is_short_vowel_mark)
    {
        return None;
    }
    let mut i = 0;
    while i < chars.len() && (script::is_alif_form(chars[i]) || script::is_harakah(chars[i])) {
        i += 1;
    }
    if i > 0 && script::is_article_alif(first) && chars.get(i) == Some(&LAM) {
        let after = skip_harakat(&chars, i + 1);
        return chars.get(after).copied();
    }
    chars[i..]
        .iter()
        .copied()
        .find(|&c| script::builtin_latin(c).is_some())
}

/// The raw word ends on nun + sukun.
pub(crate) fn ends_with_nun_sukun(word: &str) -> bool {
    let mut tail = word.chars().rev();
    tail.next() == Some(SUKUN) && tail.next() == Some(NUN)
}

/// The raw word opens with `letter` carrying shadda.
pub(crate) fn starts_with_geminated(word: &str, letter: char) -> bool {
    let mut chars = word.chars();
    if chars.next() != Some(letter) {
        return false;
    }
    chars
        .take_while(|&c| script::is_harakah(c))
        .any(|c| c == SHADDA)
}
