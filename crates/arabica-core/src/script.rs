//! Character-level classification for Arabic script.
//!
//! Letters are written as literals; combining marks are written as escapes
//! since a lone mark is invisible in source.

pub const ALIF: char = 'ا';
pub const ALIF_WASLA: char = 'ٱ';
pub const ALIF_MADDA: char = 'آ';
pub const ALIF_MAQSURA: char = 'ى';
pub const ALIF_HAMZA_ABOVE: char = 'أ';
pub const ALIF_HAMZA_BELOW: char = 'إ';
pub const HAMZA: char = 'ء';
pub const WAW_HAMZA: char = 'ؤ';
pub const YA_HAMZA: char = 'ئ';
pub const AIN: char = 'ع';
pub const BA: char = 'ب';
pub const TA: char = 'ت';
pub const TA_MARBUTA: char = 'ة';
pub const QAF: char = 'ق';
pub const KAF: char = 'ك';
pub const LAM: char = 'ل';
pub const MIM: char = 'م';
pub const NUN: char = 'ن';
pub const HA: char = 'ه';
pub const WAW: char = 'و';
pub const YA: char = 'ي';

pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const SUPERSCRIPT_ALIF: char = '\u{0670}';

pub const ARABIC_COMMA: char = '،';
pub const ARABIC_SEMICOLON: char = '؛';
pub const ARABIC_QUESTION_MARK: char = '؟';

/// The Arabic block proper (U+0600..U+06FF).
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Any Arabic-script code point: the main block, the supplement and
/// extended-A blocks, and both presentation-form blocks.
pub fn is_arabic_script(c: char) -> bool {
    is_arabic(c)
        || ('\u{0750}'..='\u{077F}').contains(&c)
        || ('\u{08A0}'..='\u{08FF}').contains(&c)
        || ('\u{FB50}'..='\u{FDFF}').contains(&c)
        || ('\u{FE70}'..='\u{FEFF}').contains(&c)
}

/// The fixed harakat set used for structural scans (article detection,
/// first-consonant search). Independent of the user's rule table.
pub fn is_harakah(c: char) -> bool {
    matches!(
        c,
        '\u{064B}'..='\u{0652}'
            | '\u{0670}'
            | '\u{0656}'
            | '\u{0657}'
            | '\u{0653}'
            | '\u{06D7}'
            | '\u{06DA}'
            | '\u{06D9}'
            | '\u{06DD}'
    )
}

pub fn is_short_vowel_mark(c: char) -> bool {
    matches!(c, FATHA | DAMMA | KASRA)
}

pub fn is_tanwin(c: char) -> bool {
    matches!(c, FATHATAN | DAMMATAN | KASRATAN)
}

/// The 14 letters before which the article's lam assimilates.
pub fn is_sun_letter(c: char) -> bool {
    matches!(
        c,
        'ت' | 'ث' | 'د' | 'ذ' | 'ر' | 'ز' | 'س' | 'ش' | 'ص' | 'ض' | 'ط' | 'ظ' | 'ل' | 'ن'
    )
}

/// Letters (يرملون) into which a vowelless nun fully assimilates.
pub fn is_idgham_letter(c: char) -> bool {
    matches!(c, 'ي' | 'ر' | 'م' | 'ل' | 'و' | 'ن')
}

pub fn is_hamza(c: char) -> bool {
    matches!(
        c,
        ALIF_HAMZA_ABOVE | ALIF_HAMZA_BELOW | HAMZA | YA_HAMZA | WAW_HAMZA
    )
}

/// Alif spellings that can open the definite article.
pub fn is_article_alif(c: char) -> bool {
    matches!(c, ALIF | ALIF_WASLA)
}

/// Alif forms skipped when looking for a word's first pronounced consonant.
pub fn is_alif_form(c: char) -> bool {
    matches!(
        c,
        ALIF | ALIF_WASLA | ALIF_HAMZA_ABOVE | ALIF_HAMZA_BELOW | ALIF_MADDA
    )
}

/// One-letter proclitics (bi-, ka-, fa-, wa-) that may precede the article.
pub fn is_clitic_prefix(c: char) -> bool {
    matches!(c, 'ب' | 'ك' | 'ف' | 'و')
}

/// Punctuation that marks a pause inside a word's rendering: a consonant
/// before it loses its vowel, and a hamza before it becomes an apostrophe.
pub fn is_pause_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ARABIC_COMMA)
}

/// Punctuation before which a final short i/u is dropped.
pub fn is_waqf_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ARABIC_COMMA | ARABIC_SEMICOLON)
}

/// Punctuation that ends a phrase in rendered Latin text.
pub fn is_phrase_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ';' | ':' | '!' | '?' | ARABIC_COMMA | ARABIC_SEMICOLON | ARABIC_QUESTION_MARK
    )
}

/// ASCII punctuation kept as-is by the forward transducer.
pub fn is_kept_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ';' | ':' | '!' | '?' | '-' | '–' | '—' | '(' | ')' | '\'' | '"' | '“' | '”'
    )
}

/// Map Arabic punctuation to its ASCII counterpart.
pub fn arabic_punctuation_to_ascii(c: char) -> Option<char> {
    match c {
        ARABIC_COMMA => Some(','),
        ARABIC_SEMICOLON => Some(';'),
        ARABIC_QUESTION_MARK => Some('?'),
        _ => None,
    }
}

/// Map an Arabic-Indic digit (U+0660..U+0669) to its ASCII digit.
pub fn arabic_digit_to_ascii(c: char) -> Option<char> {
    if ('\u{0660}'..='\u{0669}').contains(&c) {
        char::from_u32('0' as u32 + (c as u32 - 0x0660))
    } else {
        None
    }
}

/// Built-in Latin value of every pronounced letter, used when the user's
/// consonant table has no entry (waw, ya, hamza forms). Hamza forms map to
/// the empty string: they are letters, but carry no consonant of their own.
pub fn builtin_latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'ت' => "t",
        'ث' => "ts",
        'د' => "d",
        'ذ' => "dz",
        'ر' => "r",
        'ز' => "z",
        'س' => "s",
        'ش' => "sy",
        'ص' => "sh",
        'ض' => "dl",
        'ط' => "th",
        'ظ' => "zh",
        'ل' => "l",
        'ن' => "n",
        'ب' => "b",
        'ج' => "j",
        'ح' => "ḫ",
        'خ' => "kh",
        'ع' => "'",
        'غ' => "gh",
        'ف' => "f",
        'ق' => "q",
        'ك' => "k",
        'م' => "m",
        'ه' => "h",
        'و' => "w",
        'ي' => "y",
        'أ' | 'إ' | 'ا' | 'ء' | 'ئ' | 'ؤ' => "",
        _ => return None,
    };
    Some(latin)
}
