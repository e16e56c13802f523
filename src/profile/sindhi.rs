//! Sindhi: sd-PK (Perso-Arabic) ⇄ sd-IN (Devanagari).
use super::{IndoArabicEngine, Profile, ProfileConfig, ProfileError, compile, engine::OverrideSet};
use crate::{
    context::Context,
    lang::{
        Lang, SND_ARAB, SND_DEVA,
        data::{
            ARABIC_ONLY, DEVANAGARI_NUKTA_SIMPLIFY, DEVANAGARI_PREPROCESS, FINAL_VOWELS, HAMZA, INITIAL_VOWELS,
            MEDIAL_VOWELS, NUMERALS, PUNCTUATION,
        },
        sindhi as rows,
    },
    profile::ProfileData,
    stage::{
        StageError,
        fixup::{Fixup, rewrite_chars},
    },
    table::Role,
    unicode::is_word_char,
};
use std::borrow::Cow;

const HEH_DOACHASHMEE: char = '\u{06BE}';
const CONJUNCTION: char = '۽';
const POSTPOSITION: char = '۾';

fn has_colon(text: &str) -> bool {
    text.contains(':')
}

/// `word:` → `word :`; Sindhi sets the colon off from the preceding word.
fn space_before_colon(text: &str) -> Cow<'_, str> {
    rewrite_chars(text, |prev, c, _| {
        (c == ':' && prev.is_some_and(|p| !p.is_whitespace())).then_some(" :")
    })
}

fn has_heh_doachashmee(text: &str) -> bool {
    text.contains(HEH_DOACHASHMEE)
}

/// Sindhi spells aspiration with dedicated letters, so `ھ` is only kept at
/// the end of a word after the three letters that still pair with it.
fn heh_doachashmee_to_heh(text: &str) -> Cow<'_, str> {
    rewrite_chars(text, |prev, c, next| {
        if c != HEH_DOACHASHMEE {
            return None;
        }
        let before_letter = next.is_some_and(is_word_char);
        let after_other = prev.is_some_and(|p| !matches!(p, 'ڙ' | 'ج' | 'گ'));
        (before_letter || after_other).then_some("ه")
    })
}

fn has_particle_letter(text: &str) -> bool {
    text.contains(['ء', 'م'])
}

/// A lone `ء` or `م` between spaces is the conjunction or postposition.
fn particle_letters(text: &str) -> Cow<'_, str> {
    rewrite_chars(text, |prev, c, next| {
        let spaced = prev.is_some_and(char::is_whitespace) && next.is_some_and(char::is_whitespace);
        match c {
            'ء' if spaced => Some("۽"),
            'م' if spaced => Some("۾"),
            _ => None,
        }
    })
}

fn has_standalone_particle(text: &str) -> bool {
    text.contains([CONJUNCTION, POSTPOSITION])
}

/// Plain single spaces around `۽` and `۾`, and a space between either and
/// following punctuation.
fn space_particles(text: &str) -> Cow<'_, str> {
    rewrite_chars(text, |prev, c, next| {
        let is_particle = |x: Option<char>| matches!(x, Some(CONJUNCTION | POSTPOSITION));
        if c.is_whitespace() && (is_particle(next) || is_particle(prev)) {
            return Some(" ");
        }
        if (c == CONJUNCTION || c == POSTPOSITION)
            && prev.is_some_and(char::is_whitespace)
            && next.is_some_and(|n| !is_word_char(n) && n != ' ' && !n.is_whitespace())
        {
            return Some(if c == CONJUNCTION { "۽ " } else { "۾ " });
        }
        None
    })
}

fn has_e_sign(text: &str) -> bool {
    text.contains('\u{0947}')
}

/// Sindhi Perso-Arabic has no bari ye: every `े` is written with ye.
fn e_to_ii(text: &str) -> Cow<'_, str> {
    rewrite_chars(text, |_, c, _| (c == '\u{0947}').then_some("\u{0940}"))
}

const FIXUPS: &[Fixup] = &[
    Fixup::new("particle_letters", has_particle_letter, particle_letters),
    Fixup::new("colon_spacing", has_colon, space_before_colon),
    Fixup::new("heh_doachashmee", has_heh_doachashmee, heh_doachashmee_to_heh),
    Fixup::new("particle_spacing", has_standalone_particle, space_particles),
];

pub static DATA: ProfileData = ProfileData {
    name: "sindhi",
    abjad: SND_ARAB,
    syllabic: SND_DEVA,
    sources: &[
        (Role::Consonant, rows::CONSONANTS),
        (Role::VowelInitial, INITIAL_VOWELS),
        (Role::VowelMedial, MEDIAL_VOWELS),
        (Role::VowelFinal, FINAL_VOWELS),
        (Role::VowelFinal, rows::FINAL_CONSONANTS),
        (Role::Numeral, NUMERALS),
        (Role::Punctuation, PUNCTUATION),
        (Role::DiacriticCombo, HAMZA),
        (Role::IsolatedWord, rows::ISOLATED_WORDS),
        (Role::Misc, ARABIC_ONLY),
    ],
    overrides: OverrideSet {
        consonant: rows::CONSONANT_OVERRIDES,
        vowel: rows::VOWEL_OVERRIDES,
        hamza: rows::HAMZA_OVERRIDES,
    },
    reverse_only_words: &[],
    abjad_letter_fold: &rows::LETTER_FOLD,
    abjad_preprocess: rows::ABJAD_PREPROCESS,
    abjad_fixups: FIXUPS,
    before_pass2: &[("\u{06BE}", "\u{0647}")],
    syllabic_preprocess: &[DEVANAGARI_PREPROCESS, rows::SYLLABIC_PREPROCESS],
    initial_abjadify: rows::INITIAL_ABJADIFY,
    short_vowel_fixups: &[Fixup::new("e_to_ii", has_e_sign, e_to_ii)],
    late_initial_vowels: true,
    literals: rows::LITERALS,
    syllabic_nativize: DEVANAGARI_NUKTA_SIMPLIFY,
    abjad_nativize: Some(&rows::NATIVE_FOLD),
};

/// Sindhi profile.
#[derive(Debug)]
pub struct Sindhi {
    engine: IndoArabicEngine,
}

impl Sindhi {
    pub fn new(config: ProfileConfig) -> Result<Self, ProfileError> {
        Ok(Self {
            engine: compile(&DATA, config)?,
        })
    }

    pub fn engine(&self) -> &IndoArabicEngine {
        &self.engine
    }
}

impl Profile for Sindhi {
    fn name(&self) -> &'static str {
        self.engine.name()
    }

    fn abjad(&self) -> Lang {
        SND_ARAB
    }

    fn syllabic(&self) -> Lang {
        SND_DEVA
    }

    fn forward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.engine.forward(text, ctx)
    }

    fn backward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.engine.backward(text, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Sindhi {
        Sindhi::new(ProfileConfig::default()).unwrap()
    }

    fn to_deva(p: &Sindhi, text: &str) -> String {
        p.convert(text, SND_ARAB, SND_DEVA, false).unwrap()
    }

    fn to_arab(p: &Sindhi, text: &str) -> String {
        p.convert(text, SND_DEVA, SND_ARAB, false).unwrap()
    }

    #[test]
    fn implosives_and_native_letters() {
        let p = profile();
        assert_eq!(to_deva(&p, "سنڌ"), "सनध");
        assert_eq!(to_deva(&p, "ٻ"), "ॿ");
        assert_eq!(to_deva(&p, "ڪ"), "क");
        assert_eq!(to_deva(&p, "ک"), "ख");
        assert_eq!(to_arab(&p, "सनध"), "سنڌ");
        assert_eq!(to_arab(&p, "ॻ"), "ڳ");
    }

    #[test]
    fn urdu_letters_are_sindhized() {
        let p = profile();
        assert_eq!(to_deva(&p, "ٹ"), "ट");
        assert_eq!(to_deva(&p, "ٹھ"), "ठ");
        assert_eq!(to_deva(&p, "ہ"), "ह");
    }

    #[test]
    fn particles() {
        let p = profile();
        assert_eq!(to_deva(&p, "گهر ۾ ويو"), to_deva(&p, "گهر م ويو"));
        assert_eq!(to_arab(&p, "ऐं"), "۽");
        assert_eq!(to_arab(&p, "में"), "۾");
    }

    #[test]
    fn particle_letters_need_spaces_on_both_sides() {
        assert_eq!(particle_letters("ڪم م ٿيو"), "ڪم ۾ ٿيو");
        assert_eq!(particle_letters("هو ء هي"), "هو ۽ هي");
        assert_eq!(particle_letters("م."), "م.");
        assert_eq!(particle_letters("ڪم م"), "ڪم م");
        assert!(matches!(particle_letters("ماما"), Cow::Borrowed(_)));
    }

    #[test]
    fn word_initial_vowels_after_hamza_pass() {
        let p = profile();
        assert_eq!(to_arab(&p, "एक"), "ئیڪ");
        assert_eq!(to_arab(&p, "अब"), "اب");
    }

    #[test]
    fn heh_doachashmee_rules() {
        assert_eq!(heh_doachashmee_to_heh("هھا"), "هها");
        assert_eq!(heh_doachashmee_to_heh("گھ"), "گھ");
        assert_eq!(heh_doachashmee_to_heh("ٻھ"), "ٻه");
        assert!(matches!(heh_doachashmee_to_heh("ڪتاب"), Cow::Borrowed(_)));
    }

    #[test]
    fn final_aspirate_keeps_its_digraph() {
        let p = profile();
        assert_eq!(to_deva(&p, "گھ"), "घ");
    }

    #[test]
    fn colon_and_particle_spacing() {
        assert_eq!(space_before_colon("ڪم:"), "ڪم :");
        assert_eq!(space_before_colon("ڪم :"), "ڪم :");
        assert_eq!(space_particles("ڪم\u{00A0}۾ ٿيو"), "ڪم ۾ ٿيو");
        assert_eq!(space_particles("ڪم ۾،"), "ڪم ۾ ،");
    }

    #[test]
    fn bari_ye_never_appears() {
        let p = profile();
        let out = to_arab(&p, "के");
        assert!(!out.contains('ے'), "{out}");
    }

    #[test]
    fn nativize_uses_arabic_ye() {
        let p = profile();
        let out = p.convert("की", SND_DEVA, SND_ARAB, true).unwrap();
        assert_eq!(out, "ڪي");
    }
}
