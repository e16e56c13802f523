//! Urdu ⇄ Hindi (Hindustani) mapping data. Punjabi rides on these tables
//! with a few Shahmukhi letters on top.
use crate::table::{Override, Row};

pub static CONSONANTS: &[Row] = &[
    ("ب", "b", "ब"),
    ("بھ", "bh", "भ"),
    ("پ", "p", "प"),
    ("پھ", "ph", "फ"),
    ("ت", "t", "त"),
    ("تھ", "th", "थ"),
    ("ٹ", "ṭ", "ट"),
    ("ٹھ", "ṭh", "ठ"),
    ("ث", "s", "स"),
    ("ج", "j", "ज"),
    ("جھ", "jh", "झ"),
    ("چ", "c", "च"),
    ("چھ", "ch", "छ"),
    ("ح", "h", "ह"),
    ("خ", "x", "\u{0916}\u{093C}"),
    ("د", "d", "द"),
    ("دھ", "dh", "ध"),
    ("ڈ", "ḍ", "ड"),
    ("ڈھ", "ḍh", "ढ"),
    ("ذ", "z", "\u{091C}\u{093C}"),
    ("ر", "r", "र"),
    ("ڑ", "ṛ", "\u{0921}\u{093C}"),
    ("ڑھ", "ṛh", "\u{0922}\u{093C}"),
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
    ("ک", "k", "क"),
    ("کھ", "kh", "ख"),
    ("گ", "g", "ग"),
    ("گھ", "gh", "घ"),
    ("ل", "l", "ल"),
    ("لھ", "lh", "ल्ह"),
    ("م", "m", "म"),
    ("مھ", "mh", "म्ह"),
    ("ن", "n", "न"),
    ("نھ", "nh", "न्ह"),
    ("و", "v", "व"),
    ("ہ", "h", "ह"),
    ("ۂ", "h", "ह"),
    ("ھ", "h", "ह"),
    ("ی", "y", "य"),
];

/// Shahmukhi letters absent from Urdu.
pub static PUNJABI_CONSONANTS: &[Row] = &[("ݨ", "ṇ", "ण"), ("ࣇ", "ḷ", "ळ")];

/// Frequent words whose vowels the general rules get wrong.
pub static ISOLATED_WORDS: &[Row] = &[
    ("میں", "meṉ", "में"),
    ("ہیں", "haiṉ", "हैं"),
    ("ہے", "hai", "है"),
    ("کہ", "ki", "कि"),
    ("یہ", "yah", "यह"),
    ("وہ", "vah", "वह"),
    ("نہ", "na", "न"),
    ("ہوں", "hūṉ", "हूं"),
    ("اور", "aur", "और"),
    ("کیا", "kyā", "क्या"),
    ("کیوں", "kyoṉ", "क्यों"),
    ("کچھ", "kuch", "कुछ"),
    ("تم", "tum", "तुम"),
    ("مجھے", "mujhe", "मुझे"),
    ("پھر", "phir", "फिर"),
    ("لیے", "liye", "लिए"),
    ("لئے", "liye", "लिए"),
    ("بہت", "bahut", "बहुत"),
    ("اس", "is", "इस"),
    ("ان", "in", "इन"),
    ("لیکن", "lekin", "लेकिन"),
    ("خود", "xud", "\u{0916}\u{093C}ुद"),
];

pub static PUNJABI_ISOLATED_WORDS: &[Row] = &[
    ("میں", "maiṉ", "मैं"),
    ("نوں", "nūṉ", "नूं"),
    ("ہے", "hai", "है"),
    ("وچ", "vic", "विच"),
    ("اوہ", "oh", "ओह"),
];

/// Syllabic spellings the abjad has no way to tell apart from a more common
/// one; inversion alone would pick the wrong winner.
pub static REVERSE_ONLY_WORDS: &[Override] = &[("मैं", "میں"), ("लिए", "لیے")];

/// Preferred abjad letter for each ambiguous consonant.
pub static CONSONANT_OVERRIDES: &[Override] = &[
    ("स", "س"),
    ("\u{091C}\u{093C}", "ز"),
    ("त", "ت"),
    ("ह", "ہ"),
    ("क", "ک"),
    ("ं", "ن"),
];

pub static VOWEL_OVERRIDES: &[Override] = &[
    ("अ", "ا"),
    ("आ", "آ"),
    ("ए", "ای"),
    ("ओ", "او"),
    ("ें", "یں"),
];

pub static HAMZA_OVERRIDES: &[Override] = &[("ओ", "ؤ"), ("ए", "ئے")];

/// Improper hamza spellings.
pub static ABJAD_PREPROCESS: &[Row] = &[("اے", "", "ائے"), ("یے", "", "ئے")];

/// Devanagari letters outside the Hindustani inventory.
pub static SYLLABIC_PREPROCESS: &[Row] = &[
    ("ण", "", "न"),
    ("ष", "", "श"),
    ("ङ", "", "न"),
    ("ञ", "", "न"),
    ("ळ", "", "ल"),
    ("ॐ", "", "ओम"),
    ("ः", "", "ह"),
    ("ऽ", "", ""),
];

/// Punjabi keeps retroflex ṇ and ḷ.
pub static PUNJABI_SYLLABIC_PREPROCESS: &[Row] = &[
    ("ष", "", "श"),
    ("ङ", "", "न"),
    ("ञ", "", "न"),
    ("ॐ", "", "ओम"),
    ("ः", "", "ह"),
    ("ऽ", "", ""),
];

pub static LITERALS: &[(&str, &str)] = &[("ी", "ی"), ("ो", "و"), ("े", "ی"), ("्", "")];
