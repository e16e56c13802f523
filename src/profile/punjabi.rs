//! Punjabi: pa-PK (Shahmukhi) ⇄ pa-IN (Gurmukhi).
//!
//! Shahmukhi is converted with the Hindustani engine plus the letters
//! Punjabi adds; Devanagari is only the pivot and never leaves the profile.
use super::{
    IndoArabicEngine, Profile, ProfileConfig, ProfileError, compile, engine::OverrideSet, gurmukhi::GurmukhiBridge,
    hindustani::MEDIAL_E,
};
use crate::{
    context::Context,
    lang::{
        Lang, PAN_ARAB, PAN_GURU,
        data::{
            ARABIC_ONLY, DEVANAGARI_INITIAL_ABJADIFY, DEVANAGARI_NUKTA_SIMPLIFY, DEVANAGARI_PREPROCESS, FINAL_VOWELS,
            HAMZA, INITIAL_VOWELS, MEDIAL_VOWELS, NUMERALS, PUNCTUATION, URDU_LETTER_FOLD,
        },
        hindustani as rows,
    },
    process::Pipeline,
    profile::ProfileData,
    stage::StageError,
    table::Role,
};
use std::borrow::Cow;
use tracing::debug;

pub static DATA: ProfileData = ProfileData {
    name: "punjabi",
    abjad: PAN_ARAB,
    syllabic: PAN_GURU,
    sources: &[
        (Role::Consonant, rows::CONSONANTS),
        (Role::Consonant, rows::PUNJABI_CONSONANTS),
        (Role::VowelInitial, INITIAL_VOWELS),
        (Role::VowelMedial, MEDIAL_VOWELS),
        (Role::VowelFinal, FINAL_VOWELS),
        (Role::Numeral, NUMERALS),
        (Role::Punctuation, PUNCTUATION),
        (Role::DiacriticCombo, HAMZA),
        (Role::IsolatedWord, rows::PUNJABI_ISOLATED_WORDS),
        (Role::Misc, ARABIC_ONLY),
    ],
    overrides: OverrideSet {
        consonant: rows::CONSONANT_OVERRIDES,
        vowel: rows::VOWEL_OVERRIDES,
        hamza: rows::HAMZA_OVERRIDES,
    },
    reverse_only_words: &[],
    abjad_letter_fold: &URDU_LETTER_FOLD,
    abjad_preprocess: rows::ABJAD_PREPROCESS,
    abjad_fixups: &[],
    before_pass2: &[],
    syllabic_preprocess: &[DEVANAGARI_PREPROCESS, rows::PUNJABI_SYLLABIC_PREPROCESS],
    initial_abjadify: DEVANAGARI_INITIAL_ABJADIFY,
    short_vowel_fixups: &[MEDIAL_E],
    late_initial_vowels: false,
    literals: rows::LITERALS,
    // Nukta simplification happens on the Gurmukhi side.
    syllabic_nativize: &[],
    abjad_nativize: None,
};

/// Punjabi profile.
#[derive(Debug)]
pub struct Punjabi {
    engine: IndoArabicEngine,
    to_gurmukhi: Pipeline,
    from_gurmukhi: Pipeline,
}

impl Punjabi {
    pub fn new(config: ProfileConfig) -> Result<Self, ProfileError> {
        let engine = compile(&DATA, config)?;
        let bridge = GurmukhiBridge::new().map_err(|source| ProfileError::Table {
            profile: DATA.name,
            source,
        })?;
        let to_gurmukhi = engine.forward_pipeline().clone().then(&bridge.encoder());
        let from_gurmukhi = bridge.decoder().then(engine.backward_pipeline());
        debug!(
            forward_stages = to_gurmukhi.len(),
            backward_stages = from_gurmukhi.len(),
            "chained Gurmukhi bridge"
        );
        Ok(Self {
            engine,
            to_gurmukhi,
            from_gurmukhi,
        })
    }

    pub fn engine(&self) -> &IndoArabicEngine {
        &self.engine
    }
}

impl Profile for Punjabi {
    fn name(&self) -> &'static str {
        self.engine.name()
    }

    fn abjad(&self) -> Lang {
        PAN_ARAB
    }

    fn syllabic(&self) -> Lang {
        PAN_GURU
    }

    fn forward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.to_gurmukhi.run(text, ctx)
    }

    fn backward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.from_gurmukhi.run(text, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Punjabi {
        Punjabi::new(ProfileConfig::default()).unwrap()
    }

    fn to_guru(p: &Punjabi, text: &str) -> String {
        p.convert(text, PAN_ARAB, PAN_GURU, false).unwrap()
    }

    fn to_shahmukhi(p: &Punjabi, text: &str) -> String {
        p.convert(text, PAN_GURU, PAN_ARAB, false).unwrap()
    }

    #[test]
    fn skeleton_round_trip() {
        let p = profile();
        assert_eq!(to_guru(&p, "کلم"), "ਕਲਮ");
        assert_eq!(to_shahmukhi(&p, "ਕਲਮ"), "کلم");
    }

    #[test]
    fn retroflex_letters() {
        let p = profile();
        assert_eq!(to_guru(&p, "ݨ"), "ਣ");
        assert_eq!(to_shahmukhi(&p, "ਣ"), "ݨ");
    }

    #[test]
    fn addak_and_shadda() {
        let p = profile();
        assert_eq!(to_guru(&p, "پکّا"), "ਪੱਕਾ");
        assert_eq!(to_shahmukhi(&p, "ਪੱਕਾ"), "پکّا");
    }

    #[test]
    fn tippi_to_noon() {
        let p = profile();
        assert_eq!(to_shahmukhi(&p, "ਪੰਜਾਬ"), "پنجاب");
    }

    #[test]
    fn punjabi_isolated_words() {
        let p = profile();
        assert_eq!(to_guru(&p, "میں"), "ਮੈਂ");
    }

    #[test]
    fn devanagari_never_leaks() {
        let p = profile();
        let out = to_guru(&p, "پنجاب دا شہر");
        assert!(!out.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c)), "{out}");
    }

    #[test]
    fn nativize_drops_loanword_nuktas() {
        let p = profile();
        assert_eq!(to_guru(&p, "زمین"), "ਜ\u{0A3C}ਮੀਨ");
        let native = |text: &str| p.convert(text, PAN_ARAB, PAN_GURU, true).unwrap();
        assert_eq!(native("زمین"), "ਜਮੀਨ");
        assert_eq!(native("فرق"), "ਫਰਕ\u{0A3C}");
    }
}
