//! Mapping rows shared by every Perso-Arabic ⇄ Indic family.
//!
//! Rows are `(abjad form, romanization hint, Indic form)`. Indic forms are
//! written in NFC, which keeps nukta letters decomposed (`क़` is `क` + `़`).
use crate::table::Row;
use phf::{Map, phf_map};

// ---------------------------------------------------------------------------
//    Abjad → Indic rows
// ---------------------------------------------------------------------------

pub static NUMERALS: &[Row] = &[
    ("۰", "0", "०"),
    ("۱", "1", "१"),
    ("۲", "2", "२"),
    ("۳", "3", "३"),
    ("۴", "4", "४"),
    ("۵", "5", "५"),
    ("۶", "6", "६"),
    ("۷", "7", "७"),
    ("۸", "8", "८"),
    ("۹", "9", "९"),
];

pub static PUNCTUATION: &[Row] = &[
    ("۔", ".", "।"),
    ("،", ",", ","),
    ("؟", "?", "?"),
];

/// Word-initial bare vowels. Abjads spell these with a carrier alef (or ain)
/// that means nothing elsewhere in the word.
pub static INITIAL_VOWELS: &[Row] = &[
    ("ا", "a", "अ"),
    ("آ", "ā", "आ"),
    ("ای", "e", "ए"),
    ("او", "o", "ओ"),
    ("ع", "ʿa", "अ"),
    ("عا", "ʿā", "आ"),
];

/// Medial vowel carriers that survive after consonants are mapped.
pub static MEDIAL_VOWELS: &[Row] = &[
    ("ا", "ā", "ा"),
    ("آ", "ā", "आ"),
    ("ں", "ṉ", "ं"),
    ("ع", "ʿ", "अ"),
];

/// Word-final letters that are vowels rather than semivowels.
pub static FINAL_VOWELS: &[Row] = &[
    ("ی", "ī", "ी"),
    ("ے", "e", "े"),
    ("و", "o", "ो"),
    ("یں", "īṉ", "ीं"),
    ("ےں", "eṉ", "ें"),
    ("وں", "oṉ", "ों"),
    ("ں", "ṉ", "ं"),
];

/// The glottal stop letter and its combinations with vowel carriers.
pub static HAMZA: &[Row] = &[
    ("ء", "'", "अ"),
    ("ئ", "'i", "इ"),
    ("ئی", "'ī", "ई"),
    ("ئے", "'e", "ए"),
    ("ۓ", "'e", "ए"),
    ("ئیں", "'īṉ", "ईं"),
    ("ئو", "'o", "ओ"),
    ("ؤ", "'o", "ओ"),
];

/// Letters only met in loanwords or stray typing; handled by the cleanup pass.
pub static ARABIC_ONLY: &[Row] = &[("ـ", "", ""), ("ٔ", "", "")];

// ---------------------------------------------------------------------------
//    Indic-side normalization rows
// ---------------------------------------------------------------------------

/// Fold Devanagari letters outside the Hindustani/Sindhi inventories onto
/// plain equivalents.
pub static DEVANAGARI_PREPROCESS: &[Row] = &[
    // Desanskritize
    ("ँ", "", "ं"),
    ("ऋ", "", "र"),
    ("ॠ", "", "र"),
    ("ऌ", "", "ल"),
    ("ॡ", "", "ल"),
    ("ृ", "", "्र"),
    ("ॄ", "", "्र"),
    ("ॢ", "", "्ल"),
    ("ॣ", "", "्ल"),
    // Dekashmirize
    ("ऄ", "", "अ"),
    ("ऎ", "", "ए"),
    ("ऒ", "", "ओ"),
    ("ॆ", "", "े"),
    ("ॊ", "", "ो"),
    // Delatinize
    ("ॲ", "", "अ"),
    ("ऑ", "", "आ"),
    ("ऍ", "", "ए"),
    ("ॅ", "", ""),
    ("ॉ", "", "ा"),
    // Dedravidize
    ("ऩ", "", "न"),
    ("ऱ", "", "र"),
    ("\u{0932}\u{093C}", "", "ल"),
    ("ऴ", "", "ळ"),
    // De-bangalize
    ("\u{092F}\u{093C}", "", "य"),
    ("\u{0935}\u{093C}", "", "व"),
    // Misc
    ("\u{0925}\u{093C}", "", "थ"),
    ("\u{092E}\u{093C}", "", "म"),
    ("॰", "", "."),
];

/// Initial vowel letters the abjad cannot tell apart collapse onto the ones
/// it can spell.
pub static DEVANAGARI_INITIAL_ABJADIFY: &[Row] = &[
    ("इ", "", "अ"),
    ("ई", "", "ए"),
    ("उ", "", "अ"),
    ("ऊ", "", "ओ"),
    ("ऐ", "", "ए"),
    ("औ", "", "ओ"),
];

/// Nukta consonants most Hindi typists write without the dot.
pub static DEVANAGARI_NUKTA_SIMPLIFY: &[Row] = &[
    ("\u{0915}\u{093C}", "q", "क"),
    ("\u{0916}\u{093C}", "x", "ख"),
    ("\u{0917}\u{093C}", "ġ", "ग"),
    ("\u{091C}\u{093C}", "z", "ज"),
    ("\u{091D}\u{093C}", "zh", "झ"),
    ("\u{092B}\u{093C}", "f", "फ"),
];

// ---------------------------------------------------------------------------
//    Single-character folds
// ---------------------------------------------------------------------------

/// Perso-Arabic punctuation conventions.
pub static ABJAD_PUNCTUATION: Map<char, &'static str> = phf_map! {
    ',' => "،",
    '?' => "؟",
    '؛' => ";",
    '؍' => "/",
    '٪' => "%",
};

/// Arabic-codepoint letters and digits folded onto their Urdu forms.
pub static URDU_LETTER_FOLD: Map<char, &'static str> = phf_map! {
    'ي' => "ی",
    'ى' => "ی",
    'ك' => "ک",
    'ه' => "ہ",
    'ة' => "ہ",
    'ۃ' => "ہ",
    'ۀ' => "ۂ",
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

/// Dependent vowels the abjad drops or merges; independent vowels that only
/// occur medially after the hamza pass has run.
pub static DEVANAGARI_ABJADIFY: Map<char, &'static str> = phf_map! {
    'ि' => "",
    'ु' => "",
    'ू' => "ो",
    'ै' => "े",
    'ौ' => "ो",
    'ई' => "इ",
    'उ' => "ओ",
    'ऊ' => "ओ",
    'ऐ' => "ए",
    'औ' => "ओ",
};
