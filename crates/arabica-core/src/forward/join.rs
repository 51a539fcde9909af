use tracing::trace;

use crate::script::{self, BA, KAF, MIM, QAF};

use super::article::{self, Article};
use super::lookup::RuleLookup;
use super::word::Word;

/// Join rendered words, applying cross-word nun assimilation and liaison.
pub(crate) fn join_words(words: &[Word], lookup: &RuleLookup) -> String {
    let mut out = String::new();
    let mut last_sound: Option<char> = None;
    let mut prev_nun = false;

    for word in words {
        let mut text = word.text.clone();
        if prev_nun {
            assimilate_nun(&mut out, &mut text, word, lookup);
        }

        let clitic = starts_with_clitic(&word.text);
        let after_vowel = matches!(last_sound, Some('a' | 'i' | 'u'));
        let after_long = out.ends_with(['â', 'î', 'û']);

        // A long vowel shortens before the article's elided hamza.
        if after_long && word.article.is_some() && !clitic {
            if let Some(long) = out.pop() {
                out.push(shorten(long));
            }
        }

        if !clitic && after_vowel && starts_with_allah(&text) {
            trace!(word = %text, "liaison: divine name");
            out.push_str(&text[1..]);
        } else if !clitic && (after_vowel || after_long) && word.article.is_some() {
            trace!(word = %text, article = ?word.article, "liaison");
            match &word.article {
                Article::Allah => {
                    if starts_with_allah(&text) {
                        out.push_str(&text[1..]);
                    } else {
                        out.push_str(&text);
                    }
                }
                Article::Sun(latin) if latin.is_empty() => {
                    out.push(' ');
                    out.push_str(&text);
                }
                Article::Sun(_) | Article::Moon => {
                    let rest = text.strip_prefix('a').unwrap_or(&text);
                    out.push_str(&rest.replacen('-', " ", 1));
                }
                Article::None => {}
            }
        } else {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&text);
        }

        prev_nun = word.ends_with_nun_sukun;
        last_sound = final_sound(&text);
    }
    out
}

/// Rewrite the trailing "n" of `out` (and possibly the head of `text`) for
/// the consonant that opens `word`.
fn assimilate_nun(out: &mut String, text: &mut String, word: &Word, lookup: &RuleLookup) {
    let Some(first) = word.first_consonant else {
        return;
    };
    if first == BA {
        replace_final_n(out, "m");
    } else if first == QAF || first == KAF {
        replace_final_n(out, "ng");
    } else if first == MIM && article::starts_with_geminated(&word.source, MIM) {
        replace_final_n(out, "m");
        if text.starts_with("mm") {
            text.remove(0);
        }
    } else if script::is_idgham_letter(first) {
        if let Some(latin) = lookup.letter(first).filter(|l| !l.is_empty()) {
            replace_final_n(out, latin);
            // The assimilated nun already carries the doubling.
            if article::starts_with_geminated(&word.source, first)
                && text.starts_with(&latin.repeat(2))
            {
                text.replace_range(..latin.len(), "");
            }
        }
    }
}

fn shorten(long: char) -> char {
    match long {
        'â' => 'a',
        'î' => 'i',
        'û' => 'u',
        other => other,
    }
}

fn replace_final_n(out: &mut String, with: &str) {
    if out.ends_with('n') {
        out.pop();
        out.push_str(with);
    }
}

/// Rendering opens with a clitic syllable (wa-, fa-, bi-, li-, ka-...).
fn starts_with_clitic(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('w' | 'f' | 'b' | 'l' | 'k'), Some('a' | 'i'))
    )
}

fn starts_with_allah(text: &str) -> bool {
    text.strip_prefix(['A', 'a'])
        .is_some_and(|rest| rest.starts_with("llâh"))
}

/// The last letter-like sound of a rendering: a lowercased letter, or the
/// punctuation mark that ends it. `None` if it has neither.
fn final_sound(text: &str) -> Option<char> {
    text.chars().rev().find_map(|c| {
        if c.is_alphabetic() {
            c.to_lowercase().next()
        } else if script::is_phrase_punctuation(c) {
            Some(c)
        } else {
            None
        }
    })
}
