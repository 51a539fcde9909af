use super::latin;
use crate::forward::article::{
    detect_article, ends_with_nun_sukun, first_consonant, starts_with_geminated, Article,
};
use crate::forward::lookup::RuleLookup;
use crate::rules::RuleSet;
use crate::script::{self, FATHA};

fn article_of(word: &str) -> Article {
    let rules = RuleSet::default();
    let lookup = RuleLookup::new(&rules);
    detect_article(word, &lookup)
}

#[test]
fn test_sun_and_moon_letters() {
    for c in "بتثجحخدذرزسشصضطظعغفقكلمنهوي".chars() {
        let lat = script::builtin_latin(c).unwrap();
        let expected = if script::is_sun_letter(c) {
            format!("A{lat}-{lat}a")
        } else {
            format!("Al-{lat}a")
        };
        assert_eq!(latin(&format!("ال{c}{FATHA}")), expected, "letter {c}");
    }
}

#[test]
fn test_detect_sun() {
    assert_eq!(article_of("الشَّمْسُ"), Article::Sun("sy".to_string()));
}

#[test]
fn test_detect_moon_with_vowelled_alif() {
    assert_eq!(article_of("اَلْقَمَرُ"), Article::Moon);
}

#[test]
fn test_detect_divine_name() {
    assert_eq!(article_of("بِاللّٰهِ"), Article::Allah);
    assert_eq!(article_of("اللّٰهُ"), Article::Allah);
}

#[test]
fn test_detect_after_clitic() {
    assert_eq!(article_of("وَالشَّمْسِ"), Article::Sun("sy".to_string()));
    assert_eq!(article_of("وَالْقَمَرِ"), Article::Moon);
    assert_eq!(article_of("لِلْقَمَرِ"), Article::Moon);
}

#[test]
fn test_detect_absorbed_lam() {
    // li- + lam with shadda: the root itself begins with l.
    assert_eq!(article_of("لِلّٰهِ"), Article::Sun("l".to_string()));
}

#[test]
fn test_lam_with_bare_vowel_is_not_article() {
    assert_eq!(article_of("اِلَى"), Article::None);
    assert_eq!(article_of("الَمْ"), Article::None);
    assert_eq!(article_of("كِتَابٌ"), Article::None);
}

#[test]
fn test_alif_with_root_vowel_is_not_article() {
    // lam with shadda
    assert_eq!(article_of("اِلَّا"), Article::None);
    // lam with superscript alif
    assert_eq!(article_of("اِلٰهِ"), Article::None);
    assert_eq!(article_of("اُلٰٓئِكَ"), Article::None);
    assert_eq!(article_of("اَلْقَمَرُ"), Article::Moon);
}

#[test]
fn test_alif_with_root_vowel_renders_as_word() {
    assert_eq!(latin("اِلَّا"), "Illâ");
    assert_eq!(latin("اِلٰهِ"), "Ilâhi");
    assert_eq!(latin("لَا اِلٰهَ اِلَّا اللّٰهُ"), "Lâ ilâha illallâhu");
    assert_eq!(latin("قُوَّةَ اِلَّا بِاللهِ"), "Quwwata illâ billâhi");
    assert_eq!(
        latin("مَلِكِ النَّاسِ. اِلٰهِ النَّاسِ."),
        "Malikin nâs. Ilâhin nâs."
    );
}

#[test]
fn test_first_consonant() {
    assert_eq!(first_consonant("بَعْدِ"), Some('ب'));
    assert_eq!(first_consonant("الشَّمْسُ"), Some('ش'));
    assert_eq!(first_consonant("اَنْتَ"), None);
    assert_eq!(first_consonant("آمَنَ"), None);
    assert_eq!(first_consonant("اُمَّةٌ"), None);
}

#[test]
fn test_nun_sukun_and_gemination() {
    assert!(ends_with_nun_sukun("مِنْ"));
    assert!(!ends_with_nun_sukun("مِنَ"));
    assert!(starts_with_geminated("مَّاءٍ", 'م'));
    assert!(!starts_with_geminated("مَاءٌ", 'م'));
    assert!(!starts_with_geminated("مَّاءٍ", 'ن'));
}

#[test]
fn test_sun_article_suppresses_shadda_once() {
    assert_eq!(latin("الشَّمْسُ"), "Asy-syamsu");
}

#[test]
fn test_moon_article() {
    assert_eq!(latin("اَلْقَمَرُ"), "Al-qamaru");
}

#[test]
fn test_unvowelled_lam_article() {
    assert_eq!(latin("الْقَمَرُ"), "Al-qamaru");
}

#[test]
fn test_clitic_sun_article() {
    assert_eq!(latin("وَالشَّمْسِ"), "Wasysyamsi");
}

#[test]
fn test_clitic_moon_article() {
    assert_eq!(latin("بِالْحَقِّ"), "Bil-ḫaqqi");
}

#[test]
fn test_clitic_moon_before_ain() {
    assert_eq!(latin("كَالْعِهْنِ"), "Kal-'ihni");
}

#[test]
fn test_li_sun_article() {
    assert_eq!(latin("لِلنَّاسِ"), "Linnâsi");
}

#[test]
fn test_li_moon_article() {
    assert_eq!(latin("لِلْقَمَرِ"), "Lil-qamari");
}

#[test]
fn test_clitic_divine_name() {
    assert_eq!(latin("بِاللّٰهِ"), "Billâhi");
}

#[test]
fn test_initial_divine_name() {
    assert_eq!(latin("اَللّٰهُمَّ"), "Allâhumma");
}
