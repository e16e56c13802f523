//! Gurmukhi ⇄ Devanagari correspondence.
//!
//! Most of the Gurmukhi block sits exactly `0x100` above its Devanagari
//! counterpart; the rest is listed explicitly. Keys are NFC, so `ਸ਼` and
//! `ਲ਼` appear in their decomposed two-character form.
use crate::table::{Override, Row};

pub const DEVANAGARI_OFFSET: u32 = 0x100;

/// Inclusive Gurmukhi ranges whose Devanagari letter is `cp - 0x100`.
pub const PARALLEL_RANGES: &[(u32, u32)] = &[
    (0x0A01, 0x0A03), // adak bindi, bindi, visarga
    (0x0A05, 0x0A0A), // ਅ..ਊ
    (0x0A0F, 0x0A10), // ਏ ਐ
    (0x0A13, 0x0A28), // ਓ ਔ ਕ..ਨ
    (0x0A2A, 0x0A30), // ਪ..ਰ
    (0x0A32, 0x0A32), // ਲ
    (0x0A35, 0x0A35), // ਵ
    (0x0A38, 0x0A39), // ਸ ਹ
    (0x0A3C, 0x0A3C), // nukta
    (0x0A3E, 0x0A42), // ਾ..ੂ
    (0x0A47, 0x0A48), // ੇ ੈ
    (0x0A4B, 0x0A4D), // ੋ ੌ ੍
    (0x0A66, 0x0A6F), // digits
];

pub static SPECIAL: &[Row] = &[
    ("\u{0A32}\u{0A3C}", "ḷ", "ळ"),
    ("\u{0A38}\u{0A3C}", "sh", "श"),
    ("ੜ", "ṛ", "\u{0921}\u{093C}"),
    ("ੰ", "ṉ", "ं"),
    ("ੲ", "i", "इ"),
    ("ੳ", "u", "उ"),
    ("ੵ", "ya", "्य"),
];

pub const ADDAK: char = '\u{0A71}';
pub const BINDI: char = '\u{0A02}';

/// Aspirated consonants and the unaspirated base an addak doubles.
pub const ASPIRATES: &[(char, char)] = &[
    ('ਖ', 'ਕ'),
    ('ਘ', 'ਗ'),
    ('ਛ', 'ਚ'),
    ('ਝ', 'ਜ'),
    ('ਠ', 'ਟ'),
    ('ਢ', 'ਡ'),
    ('ਥ', 'ਤ'),
    ('ਧ', 'ਦ'),
    ('ਫ', 'ਪ'),
    ('ਭ', 'ਬ'),
];

/// Consonants that take a nukta in Gurmukhi loanwords.
pub const NUKTA_BASES: &[char] = &['ਕ', 'ਖ', 'ਗ', 'ਜ', 'ਫ'];

pub static REVERSE_OVERRIDES: &[Override] = &[("ं", "ਂ"), ("इ", "ਇ"), ("उ", "ਉ"), ("्य", "੍ਯ")];

/// Devanagari letters with no Gurmukhi counterpart.
pub static DEVANAGARI_FOLD: &[Row] = &[
    ("ष", "", "श"),
    ("ऋ", "", "रि"),
    ("ॠ", "", "री"),
    ("ृ", "", "्र"),
    ("ऌ", "", "ल"),
    ("ऄ", "", "अ"),
    ("ॲ", "", "अ"),
    ("ऍ", "", "ए"),
    ("ऎ", "", "ए"),
    ("ऑ", "", "ओ"),
    ("ऒ", "", "ओ"),
    ("ॆ", "", "े"),
    ("ॊ", "", "ो"),
    ("ॅ", "", ""),
    ("ॉ", "", "ो"),
    ("ऩ", "", "न"),
    ("ऱ", "", "र"),
    ("ऴ", "", "ळ"),
    ("ॐ", "", "ओम"),
    ("ऽ", "", ""),
    ("ॻ", "", "ग"),
    ("ॼ", "", "ज"),
    ("ॾ", "", "ड"),
    ("ॿ", "", "ब"),
    ("\u{0922}\u{093C}", "", "\u{0921}\u{093C}\u{094D}ह"),
];

/// Nukta letters commonly written without the dot.
pub static NATIVE: &[Row] = &[
    ("\u{0A16}\u{0A3C}", "x", "ਖ"),
    ("\u{0A17}\u{0A3C}", "ġ", "ਗ"),
    ("\u{0A1C}\u{0A3C}", "z", "ਜ"),
    ("\u{0A2B}\u{0A3C}", "f", "ਫ"),
];
