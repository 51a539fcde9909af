//! Property-based tests: the forward transducer is total and its output is
//! normalized, whatever the input.

use proptest::prelude::*;

use super::latin;
use crate::script;

fn arb_arabic_char() -> impl Strategy<Value = char> {
    prop_oneof![
        6 => prop::sample::select("ابتثجحخدذرزسشصضطظعغفقكلمنهويىةءأإئؤآٱ".chars().collect::<Vec<_>>()),
        4 => prop::sample::select(vec![
            '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{064F}', '\u{0650}',
            '\u{0651}', '\u{0652}', '\u{0670}', '\u{0653}', '\u{06DD}', '\u{06E4}',
        ]),
        2 => prop::sample::select(vec![' ', ' ', '\n', '.', ',', '،', '؟', '!', '-', '١']),
        1 => prop::sample::select(vec!['a', 'A', 'â', 'ḫ', '\'', '7', '(', '۞']),
    ]
}

fn arb_arabic_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_arabic_char(), 0..60).prop_map(|v| v.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn arbitrary_unicode_never_panics(input in "\\PC{0,80}") {
        let _ = latin(&input);
    }

    #[test]
    fn arabic_soup_output_is_normalized(input in arb_arabic_text()) {
        prop_assume!(input.chars().any(script::is_arabic));
        let out = latin(&input);
        prop_assert_eq!(out.trim(), out.as_str(), "untrimmed output {:?}", out);
        prop_assert!(!out.contains("  "), "double space in {:?}", out);
        prop_assert!(!out.contains("--"), "hyphen run in {:?}", out);
        prop_assert!(!out.starts_with('-') && !out.ends_with('-'), "edge hyphen in {:?}", out);
    }

    #[test]
    fn output_has_no_arabic_letters(input in arb_arabic_text()) {
        let out = latin(&input);
        prop_assert!(
            !out.chars().any(|c| ('\u{0621}'..='\u{064A}').contains(&c)),
            "arabic letter left in {:?}",
            out
        );
    }

    #[test]
    fn latin_only_input_is_collapsed_passthrough(input in "[a-zA-Z .,!?]{0,40}") {
        let expected = input.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(latin(&input), expected);
    }

    #[test]
    fn transliteration_is_deterministic(input in arb_arabic_text()) {
        prop_assert_eq!(latin(&input), latin(&input));
    }
}
