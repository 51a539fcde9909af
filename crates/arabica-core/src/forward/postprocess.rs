use tracing::debug_span;

use crate::config::Config;
use crate::script;

/// Final text-level cleanup of the joined rendering.
pub(crate) fn postprocess(joined: &str, config: &Config) -> String {
    let _span = debug_span!("postprocess", len = joined.len()).entered();
    let text = collapse_whitespace(joined);
    let text = drop_pause_vowels(&text);
    let text = normalize_hyphens(&text);
    let text = capitalize_sentences(&text);
    apply_render_flags(text, config)
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A final short "i"/"u" is not pronounced at a pause.
fn drop_pause_vowels(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let at_pause = chars
            .get(i + 1)
            .is_some_and(|&n| script::is_waqf_punctuation(n));
        if matches!(c, 'i' | 'u') && at_pause {
            continue;
        }
        out.push(c);
    }
    out
}

fn normalize_hyphens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}

/// Uppercase the first ASCII letter of the text and of every sentence
/// (after `.`, `!` or `?` plus whitespace).
fn capitalize_sentences(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out: Vec<char> = chars.clone();
    if let Some(first) = out.first_mut() {
        first.make_ascii_uppercase();
    }
    for (i, &c) in chars.iter().enumerate() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if j > i + 1 && j < chars.len() {
            out[j].make_ascii_uppercase();
        }
    }
    out.into_iter().collect()
}

fn apply_render_flags(mut text: String, config: &Config) -> String {
    if !config.use_long_vowel_marks {
        text = text
            .replace('â', "aa")
            .replace('î', "ii")
            .replace('û', "uu")
            .replace('Â', "Aa")
            .replace('Î', "Ii")
            .replace('Û', "Uu");
    }
    if !config.use_emphatic {
        text = text.replace('ḫ', "h").replace('Ḫ', "H");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_drops_i_and_u_only() {
        assert_eq!(drop_pause_vowels("rabbi, ya"), "rabb, ya");
        assert_eq!(drop_pause_vowels("qulu."), "qul.");
        assert_eq!(drop_pause_vowels("qala."), "qala.");
    }

    #[test]
    fn hyphens_trimmed_and_collapsed() {
        assert_eq!(normalize_hyphens("-as--aluka-"), "as-aluka");
        assert_eq!(normalize_hyphens("a ---"), "a");
        assert_eq!(normalize_hyphens("- -x"), "x");
    }

    #[test]
    fn capitalizes_sentence_starts() {
        assert_eq!(capitalize_sentences("qul. huwa! ya? x"), "Qul. Huwa! Ya? X");
        assert_eq!(capitalize_sentences("a.b"), "A.b");
        assert_eq!(capitalize_sentences("'ala"), "'ala");
    }

    #[test]
    fn render_flags_fold_long_vowels_and_emphatic() {
        let mut config = Config::default();
        assert_eq!(apply_render_flags("Âmîn ḫaqq".into(), &config), "Âmîn ḫaqq");
        config.use_long_vowel_marks = false;
        config.use_emphatic = false;
        assert_eq!(apply_render_flags("Âmîn ḫaqq".into(), &config), "Aamiin haqq");
    }
}
