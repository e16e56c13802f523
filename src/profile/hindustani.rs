//! Urdu (ur-PK) ⇄ Hindi (hi-IN).
use super::{IndoArabicEngine, Profile, ProfileConfig, ProfileError, compile, engine::OverrideSet};
use crate::{
    context::Context,
    lang::{
        HIN, Lang, URD,
        data::{
            ARABIC_ONLY, DEVANAGARI_INITIAL_ABJADIFY, DEVANAGARI_NUKTA_SIMPLIFY, DEVANAGARI_PREPROCESS,
            FINAL_VOWELS, HAMZA, INITIAL_VOWELS, MEDIAL_VOWELS, NUMERALS, PUNCTUATION, URDU_LETTER_FOLD,
        },
        hindustani as rows,
    },
    profile::ProfileData,
    stage::{
        StageError,
        fixup::{Fixup, rewrite_chars},
    },
    table::Role,
    unicode::is_devanagari_letter_or_sign,
};
use std::borrow::Cow;

fn has_e_sign(text: &str) -> bool {
    text.contains('\u{0947}')
}

/// Hindi writes long e inside a word where Urdu has a plain ye; only the
/// final `े` corresponds to bari ye.
fn medial_e_to_ii(text: &str) -> Cow<'_, str> {
    rewrite_chars(text, |_, c, next| {
        (c == '\u{0947}' && next.is_some_and(is_devanagari_letter_or_sign)).then_some("\u{0940}")
    })
}

pub(crate) const MEDIAL_E: Fixup = Fixup::new("medial_e", has_e_sign, medial_e_to_ii);

pub static DATA: ProfileData = ProfileData {
    name: "hindustani",
    abjad: URD,
    syllabic: HIN,
    sources: &[
        (Role::Consonant, rows::CONSONANTS),
        (Role::VowelInitial, INITIAL_VOWELS),
        (Role::VowelMedial, MEDIAL_VOWELS),
        (Role::VowelFinal, FINAL_VOWELS),
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
    reverse_only_words: rows::REVERSE_ONLY_WORDS,
    abjad_letter_fold: &URDU_LETTER_FOLD,
    abjad_preprocess: rows::ABJAD_PREPROCESS,
    abjad_fixups: &[],
    before_pass2: &[],
    syllabic_preprocess: &[DEVANAGARI_PREPROCESS, rows::SYLLABIC_PREPROCESS],
    initial_abjadify: DEVANAGARI_INITIAL_ABJADIFY,
    short_vowel_fixups: &[MEDIAL_E],
    late_initial_vowels: false,
    literals: rows::LITERALS,
    syllabic_nativize: DEVANAGARI_NUKTA_SIMPLIFY,
    abjad_nativize: None,
};

/// Hindi/Urdu profile.
#[derive(Debug)]
pub struct Hindustani {
    engine: IndoArabicEngine,
}

impl Hindustani {
    pub fn new(config: ProfileConfig) -> Result<Self, ProfileError> {
        Ok(Self {
            engine: compile(&DATA, config)?,
        })
    }

    pub fn engine(&self) -> &IndoArabicEngine {
        &self.engine
    }
}

impl Profile for Hindustani {
    fn name(&self) -> &'static str {
        self.engine.name()
    }

    fn abjad(&self) -> Lang {
        URD
    }

    fn syllabic(&self) -> Lang {
        HIN
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

    fn profile() -> Hindustani {
        Hindustani::new(ProfileConfig::default()).unwrap()
    }

    fn to_hindi(p: &Hindustani, text: &str) -> String {
        p.convert(text, URD, HIN, false).unwrap()
    }

    fn to_urdu(p: &Hindustani, text: &str) -> String {
        p.convert(text, HIN, URD, false).unwrap()
    }

    #[test]
    fn consonant_skeleton() {
        let p = profile();
        assert_eq!(to_hindi(&p, "کتب"), "कतब");
        assert_eq!(to_urdu(&p, "कलम"), "کلم");
    }

    #[test]
    fn gemination_both_ways() {
        let p = profile();
        assert_eq!(to_hindi(&p, "پکّا"), "पक्का");
        assert_eq!(to_hindi(&p, "بّ"), "ब्ब");
        assert_eq!(to_urdu(&p, "ब्ब"), "بّ");
        assert_eq!(to_urdu(&p, "पक्का"), "پکّا");
    }

    #[test]
    fn isolated_words() {
        let p = profile();
        assert_eq!(to_hindi(&p, "میں"), "में");
        assert_eq!(to_hindi(&p, "گھر میں ہے"), "घर में है");
        assert_eq!(to_urdu(&p, "में"), "میں");
        assert_eq!(to_urdu(&p, "मैं"), "میں");
    }

    #[test]
    fn initial_and_final_vowels() {
        let p = profile();
        assert_eq!(to_hindi(&p, "آم"), "आम");
        assert_eq!(to_hindi(&p, "کی"), "की");
        assert_eq!(to_hindi(&p, "کو"), "को");
        assert_eq!(to_urdu(&p, "आम"), "آم");
        assert_eq!(to_urdu(&p, "की"), "کی");
    }

    #[test]
    fn long_a_after_consonant() {
        let p = profile();
        assert_eq!(to_hindi(&p, "کتاب"), "कताब");
        assert_eq!(to_urdu(&p, "किताब"), "کتاب");
    }

    #[test]
    fn semivowel_between_consonants_becomes_a_vowel_sign() {
        let p = profile();
        assert_eq!(to_hindi(&p, "بیمار"), "बीमार");
        assert_eq!(to_hindi(&p, "دور"), "दोर");
    }

    #[test]
    fn reverse_overrides_pick_common_letters() {
        let p = profile();
        assert_eq!(to_urdu(&p, "सब"), "سب");
        assert_eq!(to_urdu(&p, "शहर"), "شہر");
        assert_eq!(to_urdu(&p, "तब"), "تب");
        assert_eq!(to_urdu(&p, "\u{091C}\u{093C}र"), "زر");
    }

    #[test]
    fn kashmiri_vowel_signs_fold_before_undisambiguation() {
        let p = profile();
        let once = p.engine().normalize_syllabic("कॊक").unwrap().into_owned();
        assert_eq!(once, "कवक");
        assert_eq!(p.engine().normalize_syllabic(&once).unwrap(), once);
        assert_eq!(to_urdu(&p, "कॊक"), to_urdu(&p, "कोक"));
    }

    #[test]
    fn harakat_are_ignored() {
        let p = profile();
        assert_eq!(to_hindi(&p, "کِتاب"), to_hindi(&p, "کتاب"));
    }

    #[test]
    fn digits_and_punctuation() {
        let p = profile();
        assert_eq!(to_hindi(&p, "۱۲۳۔"), "१२३।");
        assert_eq!(to_urdu(&p, "१२३।"), "۱۲۳۔");
        assert_eq!(to_urdu(&p, "क्या?"), "کیا؟");
    }

    #[test]
    fn nativize_drops_nukta() {
        let p = profile();
        let plain = p.convert("خط", URD, HIN, false).unwrap();
        let native = p.convert("خط", URD, HIN, true).unwrap();
        assert_eq!(plain, "\u{0916}\u{093C}त");
        assert_eq!(native, "खत");
    }

    #[test]
    fn wrong_pair_is_rejected() {
        let p = profile();
        let err = p.convert("x", HIN, HIN, false).unwrap_err();
        assert!(matches!(err, ProfileError::UnsupportedPair { .. }));
    }
}
