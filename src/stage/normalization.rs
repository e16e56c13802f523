use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfc);

/// NFC without the stage machinery. Borrowed when `text` is already NFC.
#[inline]
pub fn nfc(text: &str) -> Cow<'_, str> {
    ICU4X_NFC.normalize(text)
}

/// Unicode Normalization Form C (Canonical Composition).
///
/// Composes Arabic alef + madda into `آ` and waw/ye + hamza into `ؤ`/`ئ`,
/// while composition exclusions keep Devanagari and Gurmukhi nukta letters
/// decomposed. Mapping tables are stored in the same form.
#[derive(Default, Clone, Copy)]
pub struct NfcStage;

pub const NFC: NfcStage = NfcStage;

impl Stage for NfcStage {
    fn name(&self) -> &'static str {
        "nfc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!ICU4X_NFC.is_normalized(text))
    }

    #[inline(always)]
    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let changed = match ICU4X_NFC.normalize(text.as_ref()) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        Ok(super::keep_or_replace(text, changed))
    }
}

impl StageTestConfig for NfcStage {
    fn samples(_ctx: &Context) -> &'static [&'static str] {
        &["\u{0627}\u{0653}", "\u{0915}\u{093C}", "\u{0958}", "\u{0A38}\u{0A3C}", "کتاب", ""]
    }
    fn should_pass_through(_ctx: &Context) -> &'static [&'static str] {
        &["hello", "کتاب", "कलम", "ਕਲਮ", ""]
    }
    fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
        &[
            ("\u{0627}\u{0653}", "آ"),
            ("\u{0648}\u{0654}", "ؤ"),
            ("\u{0958}", "\u{0915}\u{093C}"),
            ("\u{0A36}", "\u{0A38}\u{0A3C}"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NFC);
    }

    #[test]
    fn nukta_letters_stay_decomposed() {
        let c = Context::default();
        let out = NFC.apply(Cow::Borrowed("\u{095B}"), &c).unwrap();
        assert_eq!(out, "\u{091C}\u{093C}");
        // ੜ has no decomposition.
        assert_eq!(nfc("\u{0A5C}"), "\u{0A5C}");
    }

    #[test]
    fn arabic_hamza_composes() {
        assert_eq!(nfc("\u{06C1}\u{0654}"), "\u{06C2}");
        assert_eq!(nfc("\u{064A}\u{0654}"), "\u{0626}");
    }
}
