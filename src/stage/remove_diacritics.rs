//! src/stage/remove_diacritics.rs
//!
//! Strips Perso-Arabic short vowels (harakat) so that vocalized and
//! unvocalized spellings convert identically.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
    unicode::{contains_arabic_short_vowels, is_arabic_short_vowel},
};
use std::borrow::Cow;

/// Removes every Arabic-script short vowel mark.
///
/// Shadda (U+0651) survives: gemination is written out in the syllabic
/// script, so it is converted rather than discarded. Hamza above (U+0654)
/// also survives because NFC composes it into `ؤ`, `ئ` and `ۂ`.
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(false);
        }
        Ok(contains_arabic_short_vowels(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !contains_arabic_short_vowels(&text) {
            return Ok(text);
        }
        Ok(Cow::Owned(text.chars().filter(|&c| !is_arabic_short_vowel(c)).collect()))
    }
}

impl StageTestConfig for RemoveDiacritics {
    fn samples(_ctx: &Context) -> &'static [&'static str] {
        &["کِتاب", "پَکّا", "مُحَمَّد", "کتاب", "कलम", ""]
    }
    fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
        &[("کِتاب", "کتاب"), ("پَکّا", "پکّا"), ("مُحَمَّد", "محمّد")]
    }
}

// ============================================================================
// Tests
// ============================================================================
