// Character classification for the Perso-Arabic and Indic blocks this crate
// converts between. Everything here is a pure range check.

pub const VIRAMA: char = '\u{094D}';
pub const SHADDA: char = '\u{0651}';

#[inline(always)]
pub const fn is_joiner(c: char) -> bool {
    matches!(c, '\u{200C}' | '\u{200D}')
}

/// Nonspacing and spacing combining marks of the Arabic, Devanagari and
/// Gurmukhi blocks, plus the generic combining diacritics block.
#[inline(always)]
pub const fn is_combining_mark(c: char) -> bool {
    matches!(c as u32,
        0x0300..=0x036F | // Combining Diacritical Marks
        0x0610..=0x061A | // Arabic honorifics
        0x064B..=0x065F | // Arabic harakat, shadda, sukun, hamza above/below
        0x0670 |          // superscript alef
        0x06D6..=0x06DC | // Quranic annotation
        0x06DF..=0x06E4 |
        0x06E7..=0x06E8 |
        0x06EA..=0x06ED |
        0x08D3..=0x08FF | // Arabic Extended-A marks
        0x0900..=0x0903 | // Devanagari candrabindu, anusvara, visarga
        0x093A..=0x093C | // Devanagari vowel signs oe/ooe, nukta
        0x093E..=0x094F | // Devanagari dependent vowel signs, virama
        0x0951..=0x0957 |
        0x0962..=0x0963 |
        0x0A01..=0x0A03 | // Gurmukhi adak bindi, bindi, visarga
        0x0A3C..=0x0A51 | // Gurmukhi nukta, vowel signs, virama, udaat
        0x0A70..=0x0A71 | // Gurmukhi tippi, addak
        0x0A75            // Gurmukhi yakash
    )
}

/// A "word" character for anchored matching: any letter, any combining mark
/// of the supported scripts, or a zero-width (non-)joiner. Digits,
/// punctuation, symbols and whitespace are boundaries.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || is_combining_mark(c) || is_joiner(c)
}

/// Arabic-script short vowels and other harakat that the abjad side drops.
/// Shadda is deliberately absent: gemination is converted, not discarded.
#[inline(always)]
pub const fn is_arabic_short_vowel(c: char) -> bool {
    matches!(c as u32,
        0x064B..=0x0650 | // tanween, fatha, damma, kasra
        0x0652 |          // sukun
        0x0653 |          // maddah left over after composition
        0x0655..=0x065F | // hamza below, subscript alef, Urdu marks
        0x0670 |          // superscript alef
        0x06E1 |          // small high dotless head of khah (Quranic sukun)
        0x08F0..=0x08F2   // open tanween
    )
}

#[inline(always)]
pub fn contains_arabic_short_vowels(text: &str) -> bool {
    text.chars().any(is_arabic_short_vowel)
}

/// Devanagari letters and signs proper, excluding dandas, digits and the
/// abbreviation sign (U+0964..=U+0971).
#[inline(always)]
pub const fn is_devanagari_letter_or_sign(c: char) -> bool {
    matches!(c as u32, 0x0900..=0x0963 | 0x0972..=0x097F)
}

#[inline(always)]
pub const fn is_gurmukhi_consonant(c: char) -> bool {
    matches!(c as u32, 0x0A15..=0x0A39 | 0x0A59..=0x0A5E)
}

/// Number of `char`s in `s`; table keys are measured in scalar values.
#[inline(always)]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
