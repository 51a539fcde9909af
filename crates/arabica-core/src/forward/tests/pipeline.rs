use super::latin;
use crate::config::Config;
use crate::forward::{analyze, transliterate, Article};
use crate::rules::RuleCategory;

const SAMPLE: &str = "اَللّٰهُمَّ اِنِّيْ اَسْأَلُكَ اَنْ تَرْزُقَنِيْ رِزْقًا حَلاَلاً وَاسِعًا طَيِّبًا";

fn with_rule(category: RuleCategory, arabic: &str, latin: &str) -> Config {
    let mut config = Config::default();
    let rule = config
        .rules
        .get_mut(category)
        .iter_mut()
        .find(|r| r.arabic == arabic)
        .unwrap();
    rule.latin = latin.to_string();
    config
}

#[test]
fn test_sample_prayer() {
    assert_eq!(
        latin(SAMPLE),
        "Allâhumma innî as-aluka an tarzuqanî rizqan ḫalâlaw wâsi'an thayyiban"
    );
}

#[test]
fn test_basmala_phrase_rule() {
    assert_eq!(latin("بِسْمِ اللهِ الرَّحْمٰنِ الرَّحِيْمِ"), "Bismillâhir raḫmânir raḫîm");
}

#[test]
fn test_al_fatihah_opening() {
    assert_eq!(latin("اَلْحَمْدُ لِلّٰهِ رَبِّ الْعَالَمِيْنَ"), "Al-ḫamdu lillâhi rabbil 'âlamîna");
}

#[test]
fn test_al_ikhlas_opening() {
    assert_eq!(latin("قُلْ هُوَ اللّٰهُ اَحَدٌ"), "Qul huwallâhu aḫadun");
}

#[test]
fn test_empty_and_whitespace() {
    assert_eq!(latin(""), "");
    assert_eq!(latin("   \n\t "), "");
}

#[test]
fn test_latin_passes_through() {
    assert_eq!(latin("Hello,   world!\n"), "Hello, world!");
    assert_eq!(latin("already latin"), "already latin");
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(latin("قُلْ\n\n  هُوَ\tاَحَدٌ"), "Qul huwa aḫadun");
}

#[test]
fn test_sentence_capitalization() {
    assert_eq!(latin("قُلْ. هُوَ! اَحَدٌ"), "Qul. Huwa! Aḫadun");
}

#[test]
fn test_arabic_punctuation() {
    assert_eq!(latin("قُلْ، هُوَ؟"), "Qul, huwa?");
}

#[test]
fn test_arabic_indic_digits() {
    assert_eq!(latin("سُوْرَةُ ١١٢"), "Sûratu 112");
}

#[test]
fn test_mixed_script() {
    assert_eq!(latin("Surah الْفَاتِحَةُ"), "Surah al-fâtiḫatu");
}

#[test]
fn test_final_short_vowel_dropped_at_pause() {
    assert_eq!(latin("رَبِّكَ."), "Rabbik.");
}

#[test]
fn test_long_vowel_marks_disabled() {
    let config = Config {
        use_long_vowel_marks: false,
        ..Config::default()
    };
    assert_eq!(
        transliterate(SAMPLE, &config),
        "Allaahumma innii as-aluka an tarzuqanii rizqan ḫalaalaw waasi'an thayyiban"
    );
}

#[test]
fn test_emphatic_disabled() {
    let config = Config {
        use_emphatic: false,
        ..Config::default()
    };
    assert_eq!(
        transliterate(SAMPLE, &config),
        "Allâhumma innî as-aluka an tarzuqanî rizqan halâlaw wâsi'an thayyiban"
    );
}

#[test]
fn test_custom_consonant_flows_into_article() {
    let config = with_rule(RuleCategory::Consonants, "ش", "sh");
    assert_eq!(transliterate("الشَّمْسُ", &config), "Ash-shamsu");
    assert_eq!(transliterate("وَالشَّمْسِ", &config), "Washshamsi");
}

#[test]
fn test_custom_diacritic() {
    let config = with_rule(RuleCategory::Diacritics, "\u{064F}", "o");
    assert_eq!(transliterate("قُلْ هُوَ", &config), "Qol howa");
}

#[test]
fn test_custom_combination() {
    let mut config = Config::default();
    for rule in &mut config.rules.combinations {
        rule.latin = rule.latin.replace('â', "a");
    }
    assert_eq!(
        transliterate("بِسْمِ اللهِ الرَّحْمٰنِ الرَّحِيْمِ", &config),
        "Bismillahir raḫmanir raḫîm"
    );
}

#[test]
fn test_analyze_reports_word_facts() {
    let words = analyze("اَنْتَ الشَّمْسُ", &Config::default());
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].text, "anta");
    assert_eq!(words[0].article, Article::None);
    assert_eq!(words[0].first_consonant, None);
    assert!(!words[0].ends_with_nun_sukun);
    assert_eq!(words[1].text, "asy-syamsu");
    assert_eq!(words[1].article, Article::Sun("sy".to_string()));
    assert_eq!(words[1].first_consonant, Some('ش'));
}

#[test]
fn test_word_of_only_unknown_marks_is_dropped() {
    let words = analyze("قُلْ ۞ هُوَ", &Config::default());
    assert_eq!(words.len(), 2);
    assert_eq!(latin("قُلْ ۞ هُوَ"), "Qul huwa");
}
