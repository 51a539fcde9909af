use super::latin;

#[test]
fn test_long_vowel_after_fatha() {
    assert_eq!(latin("كِتَابٌ"), "Kitâbun");
}

#[test]
fn test_waw_lengthens_damma() {
    assert_eq!(latin("نُوْرٌ"), "Nûrun");
}

#[test]
fn test_ya_lengthens_kasra() {
    assert_eq!(latin("قِيْلَ"), "Qîla");
}

#[test]
fn test_shadda_doubles() {
    assert_eq!(latin("رَبِّ"), "Rabbi");
}

#[test]
fn test_final_alif_after_fatha() {
    assert_eq!(latin("دُنْيَا"), "Dunyâ");
}

#[test]
fn test_alif_maqsura_after_superscript_alif() {
    assert_eq!(latin("عَلٰى"), "'alâ");
}

#[test]
fn test_alif_maqsura_after_tanwin() {
    assert_eq!(latin("هُدًى"), "Hudan");
}

#[test]
fn test_alif_maqsura_after_kasra() {
    assert_eq!(latin("فِى"), "Fî");
}

#[test]
fn test_alif_maqsura_lengthens_fatha() {
    assert_eq!(latin("رَمَى"), "Ramâ");
}

#[test]
fn test_long_u_then_long_a() {
    assert_eq!(latin("مُوْسٰى"), "Mûsâ");
}

#[test]
fn test_ta_marbuta_with_tanwin() {
    assert_eq!(latin("رَحْمَةٌ"), "Raḫmatun");
}

#[test]
fn test_ta_marbuta_at_pause() {
    assert_eq!(latin("رَحْمَة"), "Raḫmah");
}

#[test]
fn test_ta_marbuta_with_sukun() {
    assert_eq!(latin("رَحْمَةْ"), "Raḫmah");
}

#[test]
fn test_ta_marbuta_with_kasra() {
    assert_eq!(latin("رَحْمَةِ"), "Raḫmati");
}

#[test]
fn test_fathatan_alif_keeps_nasal() {
    assert_eq!(latin("اَحَدًا"), "Aḫadan");
}

#[test]
fn test_fathatan_alif_before_pause() {
    assert_eq!(latin("اَحَدًا."), "Aḫada.");
}

#[test]
fn test_hamza_internal() {
    assert_eq!(latin("سَأَلَ"), "Sa-ala");
}

#[test]
fn test_hamza_word_initial_is_silent() {
    assert_eq!(latin("أَحَدٌ"), "Aḫadun");
}

#[test]
fn test_hamza_before_pause() {
    assert_eq!(latin("سَمَاءٌ."), "Samâ'.");
}

#[test]
fn test_nun_before_kaf() {
    assert_eq!(latin("مِنْكَ"), "Mingka");
}

#[test]
fn test_nun_before_ba_inside_word() {
    assert_eq!(latin("يُنْبِتُ"), "Yumbitu");
}

#[test]
fn test_lam_alif_with_displaced_fatha() {
    assert_eq!(latin("حَلاَلاً"), "ḫalâlan");
}

#[test]
fn test_alif_madda() {
    assert_eq!(latin("آمَنَ"), "âmana");
}

#[test]
fn test_kasra_on_initial_alif() {
    assert_eq!(latin("اِلَى"), "Ilâ");
}

#[test]
fn test_damma_on_initial_alif() {
    assert_eq!(latin("اُمَّةٌ"), "Ummatun");
}

#[test]
fn test_unknown_mark_skipped() {
    assert_eq!(latin("x ۞ y"), "X y");
}
