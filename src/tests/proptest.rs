#[cfg(test)]
mod prop_tests {
    use crate::{Hindustani, MappingTable, MatchMode, ProfileConfig, Punjabi, Sindhi, Translator, router::ScriptRouter};
    use proptest::prelude::*;
    use std::{borrow::Cow, sync::LazyLock};
    use unicode_normalization::UnicodeNormalization;

    static HINDUSTANI: LazyLock<Hindustani> = LazyLock::new(|| Hindustani::new(ProfileConfig::default()).unwrap());
    static SINDHI: LazyLock<Sindhi> = LazyLock::new(|| Sindhi::new(ProfileConfig::default()).unwrap());
    static PUNJABI: LazyLock<Punjabi> = LazyLock::new(|| Punjabi::new(ProfileConfig::default()).unwrap());
    static ROUTER: LazyLock<ScriptRouter> = LazyLock::new(|| ScriptRouter::new().unwrap());

    const URDU_TEXT: &str = "[ابپتٹثجچحخدڈذرڑزژسشصضطظعغفقکگلمنوہھیےيكهة،؟?, \u{064E}\u{0650}\u{064F}\u{0651}]{0,40}";

    proptest! {
        #[test]
        fn abjad_normalization_is_idempotent(s in URDU_TEXT) {
            let engine = HINDUSTANI.engine();
            let once = engine.normalize_abjad(&s).unwrap().into_owned();
            let twice = engine.normalize_abjad(&once).unwrap().into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn abjad_normalization_output_is_nfc(s in URDU_TEXT) {
            let out = HINDUSTANI.engine().normalize_abjad(&s).unwrap().into_owned();
            prop_assert_eq!(out.nfc().collect::<String>(), out);
        }

        #[test]
        fn syllabic_normalization_is_idempotent(s in "[कखगजतदनपबमयरलवसहािीुूेैोौं्ृऑॊॆऒॉॲँःऽऋइउई ]{0,40}") {
            for engine in [HINDUSTANI.engine(), SINDHI.engine(), PUNJABI.engine()] {
                let once = engine.normalize_syllabic(&s).unwrap().into_owned();
                let twice = engine.normalize_syllabic(&once).unwrap().into_owned();
                prop_assert_eq!(once, twice, "{}", engine.name());
            }
        }

        #[test]
        fn disambiguation_converges_after_two_passes(s in "[कमयवं]{0,40}") {
            let engine = HINDUSTANI.engine();
            let two = engine.disambiguate(&engine.disambiguate(&s)).into_owned();
            let three = engine.disambiguate(&two);
            prop_assert!(matches!(three, Cow::Borrowed(_)), "{} → {}", two, three);
        }

        #[test]
        fn consonant_skeletons_round_trip(words in prop::collection::vec("[بپتٹجچدڈرڑشکگلم]{2,5}", 1..5)) {
            let text = words.join(" ");
            let there = ROUTER.convert(&text, "ur-PK", "hi-IN", false).unwrap();
            let back = ROUTER.convert(&there, "hi-IN", "ur-PK", false).unwrap();
            prop_assert_eq!(back, text);
        }

        #[test]
        fn latin_text_is_never_copied(s in "[a-zA-Z0-9 ]{0,200}") {
            let engine = HINDUSTANI.engine();
            let ctx = crate::Context::new(crate::URD, crate::HIN);
            let out = engine.forward(&s, &ctx).unwrap();
            prop_assert!(matches!(out, Cow::Borrowed(b) if std::ptr::eq(b, s.as_str())));
        }

        #[test]
        fn longest_match_is_greedy(n in 1usize..20) {
            let mut table = MappingTable::new();
            table.insert("a", "Y");
            table.insert("ab", "X");
            let t = Translator::new(table, MatchMode::Free);
            let input = "ab".repeat(n);
            prop_assert_eq!(t.apply_forward(&input), "X".repeat(n));
        }
    }
}
