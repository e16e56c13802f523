//! Sindhi (Perso-Arabic) ⇄ Sindhi (Devanagari) mapping data.
//!
//! Sindhi uses the Arabic `ه` for h and `ی` stands in for both ye forms
//! once the abjad side is normalized. Implosives map onto the dedicated
//! Devanagari letters ॻ ॼ ॾ ॿ.
use crate::table::{Override, Row};
use phf::{Map, phf_map};

pub static CONSONANTS: &[Row] = &[
    ("ب", "b", "ब"),
    ("ٻ", "ḇ", "ॿ"),
    ("ڀ", "bh", "भ"),
    ("پ", "p", "प"),
    ("ڦ", "ph", "फ"),
    ("ت", "t", "त"),
    ("ٿ", "th", "थ"),
    ("ٽ", "ṭ", "ट"),
    ("ٺ", "ṭh", "ठ"),
    ("ث", "s", "स"),
    ("ج", "j", "ज"),
    ("ڄ", "j̱", "ॼ"),
    ("جھ", "jh", "झ"),
    ("ڃ", "ñ", "ञ"),
    ("چ", "c", "च"),
    ("ڇ", "ch", "छ"),
    ("ح", "h", "ह"),
    ("خ", "x", "\u{0916}\u{093C}"),
    ("د", "d", "द"),
    ("ڌ", "dh", "ध"),
    ("ڏ", "ḏ", "ॾ"),
    ("ڊ", "ḍ", "ड"),
    ("ڍ", "ḍh", "ढ"),
    ("ذ", "z", "\u{091C}\u{093C}"),
    ("ر", "r", "र"),
    ("ڙ", "ṛ", "\u{0921}\u{093C}"),
    ("ڙھ", "ṛh", "\u{0922}\u{093C}"),
    ("ز", "z", "\u{091C}\u{093C}"),
    ("ژ", "zh", "\u{091D}\u{093C}"),
    ("س", "s", "स"),
    ("ش", "sh", "श"),
    ("ص", "s", "स"),
    ("ض", "z", "\u{091C}\u{093C}"),
    ("ط", "t", "त"),
    ("ظ", "z", "\u{091C}\u{093C}"),
    ("غ", "ġ", "\u{0917}\u{093C}"),
    ("ف", "f", "\u{092B}\u{093C}"),
    ("ق", "q", "\u{0915}\u{093C}"),
    ("ڪ", "k", "क"),
    ("ک", "kh", "ख"),
    ("گ", "g", "ग"),
    ("ڳ", "g̱", "ॻ"),
    ("گھ", "gh", "घ"),
    ("ڱ", "ṅ", "ङ"),
    ("ل", "l", "ल"),
    ("م", "m", "म"),
    ("ن", "n", "न"),
    ("ڻ", "ṇ", "ण"),
    ("و", "v", "व"),
    ("ه", "h", "ह"),
    ("ی", "y", "य"),
];

/// Aspirated digraphs whose `ھ` stays attached at the end of a word.
pub static FINAL_CONSONANTS: &[Row] = &[
    ("گھ", "gh", "घ"),
    ("جھ", "jh", "झ"),
    ("ڙھ", "ṛh", "\u{0922}\u{093C}"),
];

/// The conjunction `۽` and the postposition `۾`.
pub static ISOLATED_WORDS: &[Row] = &[("۽", "ain", "ऐं"), ("۾", "meṉ", "में")];

pub static CONSONANT_OVERRIDES: &[Override] = &[
    ("स", "س"),
    ("\u{091C}\u{093C}", "ز"),
    ("त", "ت"),
    ("ह", "ه"),
    ("ं", "ن"),
];

pub static VOWEL_OVERRIDES: &[Override] = &[
    ("अ", "ا"),
    ("आ", "آ"),
    ("ए", "ای"),
    ("ओ", "او"),
    ("ें", "یں"),
];

/// Pass 1 is reversed before initial vowels, so a bare `अ` must come back
/// as alef rather than hamza.
pub static HAMZA_OVERRIDES: &[Override] = &[("अ", "ا"), ("ओ", "ؤ"), ("ए", "ئی")];

/// Urdu-style letters typed in Sindhi text.
pub static ABJAD_PREPROCESS: &[Row] = &[
    ("ہ", "", "ه"),
    ("ٹ", "", "ٽ"),
    ("ٹھ", "", "ٺ"),
    ("ڈ", "", "ڊ"),
    ("ڈھ", "", "ڍ"),
    ("ڑ", "", "ڙ"),
];

pub static SYLLABIC_PREPROCESS: &[Row] = &[("ॺ", "", "य"), ("ॐ", "", "ओम"), ("ः", "", "ह"), ("ऽ", "", "")];

/// Sindhi keeps ae and au as initial letters.
pub static INITIAL_ABJADIFY: &[Row] = &[("इ", "", "अ"), ("ई", "", "ए"), ("उ", "", "अ"), ("ऊ", "", "ओ")];

pub static LITERALS: &[(&str, &str)] = &[("ी", "ی"), ("ो", "و"), ("े", "ی"), ("्", "")];

/// Arabic-codepoint letters and digits folded onto the forms Sindhi uses.
pub static LETTER_FOLD: Map<char, &'static str> = phf_map! {
    'ي' => "ی",
    'ى' => "ی",
    'ے' => "ی",
    'ك' => "ڪ",
    'ة' => "ه",
    'ۃ' => "ه",
    'ۀ' => "ه",
    'أ' => "ا",
    'إ' => "ا",
    'ٱ' => "ا",
    '٠' => "۰",
    '١' => "۱",
    '٢' => "۲",
    '٣' => "۳",
    '٤' => "۴",
    '٥' => "۵",
    '٦' => "۶",
    '٧' => "۷",
    '٨' => "۸",
    '٩' => "۹",
};

/// Native Sindhi ye on output.
pub static NATIVE_FOLD: Map<char, &'static str> = phf_map! {
    'ی' => "ي",
    'ے' => "ي",
};
