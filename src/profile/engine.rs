//! The shared abjad ⇄ syllabic conversion engine.
//!
//! Every family profile is the same engine fed different [`ProfileData`].
//! Construction turns the static rows into role tables, derives the
//! generated entries (gemination, consonant + long-a, vowel disambiguation),
//! compiles one bidirectional [`Translator`] per pass and wires both
//! directions into [`Pipeline`]s. After that the engine is immutable.
//!
//! Forward (abjad → syllabic):
//!
//! 1. abjad normalization
//! 2. isolated words, initial vowels
//! 3. pass 1: numerals, punctuation, hamza, geminates
//! 4. final vowels
//! 5. pass 2: consonants, consonant + alef, medial vowels
//! 6. cleanup, then vowel disambiguation twice
//! 7. optional nativization
//!
//! Backward runs the same translators in reverse after syllabic
//! normalization, with vowel reduction and literal cleanup in between.
use crate::{
    context::Context,
    lang::{
        Lang,
        data::{ABJAD_PUNCTUATION, DEVANAGARI_ABJADIFY},
    },
    process::Pipeline,
    stage::{
        StageError, fixup::Fixup, fold_chars::FoldChars, nativize::Nativize, normalization::NFC,
        remove_diacritics::RemoveDiacritics, replace::Replace, translate::Translate,
    },
    table::{MappingTable, Override, Role, RoleTables, Row, TableError},
    translator::{MatchMode, Translator},
    unicode::{SHADDA, VIRAMA, char_len},
};
use phf::Map;
use std::{borrow::Cow, sync::Arc};
use tracing::debug;

/// Abjad sources excluded from the vowel disambiguation cross-product:
/// the semivowels themselves and the bare aspiration letter.
const SEMIVOWEL_SOURCES: [&str; 3] = ["ی", "و", "ھ"];

/// Per-engine knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Collapse syllabic initial vowels the abjad cannot distinguish
    /// (`इ` → `अ`, `ई` → `ए`, ...) before back-conversion.
    pub abjadify_initial_vowels: bool,
    /// Delete every virama before back-conversion.
    pub drop_virama: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            abjadify_initial_vowels: true,
            drop_virama: false,
        }
    }
}

/// Reverse-table corrections, grouped by the passes they apply to.
#[derive(Debug, Clone, Copy)]
pub struct OverrideSet {
    /// Carried onto the long-a and geminated forms automatically.
    pub consonant: &'static [Override],
    pub vowel: &'static [Override],
    pub hamza: &'static [Override],
}

/// Everything that distinguishes one language family from another.
#[derive(Debug)]
pub struct ProfileData {
    pub name: &'static str,
    pub abjad: Lang,
    pub syllabic: Lang,
    /// Ordered row sources; later sources for the same role override.
    pub sources: &'static [(Role, &'static [Row])],
    pub overrides: OverrideSet,
    /// Entries forced into the reverse isolated-word table.
    pub reverse_only_words: &'static [Override],

    pub abjad_letter_fold: &'static Map<char, &'static str>,
    pub abjad_preprocess: &'static [Row],
    pub abjad_fixups: &'static [Fixup],
    /// Literal replacements right before pass 2.
    pub before_pass2: &'static [(&'static str, &'static str)],

    pub syllabic_preprocess: &'static [&'static [Row]],
    pub initial_abjadify: &'static [Row],
    pub short_vowel_fixups: &'static [Fixup],
    /// Reverse initial vowels after pass 1 and vowel reduction instead of
    /// before them, letting hamza spellings claim word-initial vowels.
    pub late_initial_vowels: bool,
    pub literals: &'static [(&'static str, &'static str)],

    pub syllabic_nativize: &'static [Row],
    /// `None` when the backward output already uses the native letters.
    pub abjad_nativize: Option<&'static Map<char, &'static str>>,
}

/// Compiled passes for one family.
pub struct IndoArabicEngine {
    name: &'static str,
    abjad: Lang,
    syllabic: Lang,
    tables: RoleTables,
    disambiguator: Arc<Translator>,
    abjad_normalizer: Pipeline,
    syllabic_normalizer: Pipeline,
    forward: Pipeline,
    backward: Pipeline,
}

impl IndoArabicEngine {
    pub fn new(data: &ProfileData, config: ProfileConfig) -> Result<Self, TableError> {
        let tables = RoleTables::load(data.sources)?;
        let consonants = tables.get(Role::Consonant);
        let consonant_overrides = derived_overrides(data.overrides.consonant);

        let isolated = Arc::new(Translator::build(
            tables.get(Role::IsolatedWord).clone(),
            MatchMode::Isolated,
            |rev| {
                rev.apply_overrides(data.reverse_only_words);
            },
        ));

        let initial = Arc::new(Translator::build(
            tables.get(Role::VowelInitial).clone(),
            MatchMode::Initial,
            |rev| {
                rev.rewrite_existing(data.overrides.vowel);
            },
        ));

        let mut pass1 = MappingTable::new();
        pass1.extend_from(tables.get(Role::Numeral));
        pass1.extend_from(tables.get(Role::Punctuation));
        pass1.extend_from(tables.get(Role::DiacriticCombo));
        pass1.extend_from(&geminates(consonants));
        let pass1 = Arc::new(Translator::build(pass1, MatchMode::Free, |rev| {
            rev.rewrite_existing(&consonant_overrides);
            rev.rewrite_existing(data.overrides.hamza);
        }));

        let finals = Arc::new(Translator::build(
            tables.get(Role::VowelFinal).clone(),
            MatchMode::Final,
            |rev| {
                rev.rewrite_existing(data.overrides.vowel);
            },
        ));

        let mut pass2 = consonants.clone();
        pass2.extend_from(&with_long_a(consonants));
        pass2.extend_from(tables.get(Role::VowelMedial));
        let pass2 = Arc::new(Translator::build(pass2, MatchMode::Free, |rev| {
            rev.rewrite_existing(&consonant_overrides);
        }));

        let mut cleanup = tables.get(Role::VowelInitial).clone();
        cleanup.extend_from(tables.get(Role::VowelFinal));
        cleanup.extend_from(tables.get(Role::Misc));
        let cleanup = Arc::new(Translator::build(cleanup, MatchMode::Free, |rev| {
            rev.rewrite_existing(data.overrides.vowel);
        }));

        let disambiguator = Arc::new(Translator::new(disambiguation_table(consonants), MatchMode::Free));

        // ── abjad → syllabic ──
        let mut abjad_normalizer = Pipeline::new()
            .push(NFC)
            .push(RemoveDiacritics)
            .push(FoldChars::new("abjad_letters", data.abjad_letter_fold))
            .push(FoldChars::new("abjad_punctuation", &ABJAD_PUNCTUATION));
        if !data.abjad_preprocess.is_empty() {
            let t = forward_only(Role::Misc, &[data.abjad_preprocess], MatchMode::Free)?;
            abjad_normalizer = abjad_normalizer.push(Translate::forward("abjad_preprocess", &t));
        }
        for &fixup in data.abjad_fixups {
            abjad_normalizer = abjad_normalizer.push(fixup);
        }

        let nuqta = forward_only(Role::Consonant, &[data.syllabic_nativize], MatchMode::Free)?;
        let forward = Pipeline::new()
            .then(&abjad_normalizer)
            .push(Translate::forward("isolated_words", &isolated))
            .push(Translate::forward("initial_vowels", &initial))
            .push(Translate::forward("pass1", &pass1))
            .push(Translate::forward("final_vowels", &finals))
            .push(Replace::new("before_pass2", data.before_pass2))
            .push(Translate::forward("pass2", &pass2))
            .push(Translate::forward("cleanup", &cleanup))
            .push(Translate::forward("disambiguate", &disambiguator))
            .push(Translate::forward("disambiguate", &disambiguator))
            .push(Nativize::new(Translate::forward("nativize", &nuqta)));

        // ── syllabic → abjad ──
        let preprocess = forward_only(Role::Misc, data.syllabic_preprocess, MatchMode::Free)?;
        let mut syllabic_normalizer = Pipeline::new()
            .push(NFC)
            .push(Translate::forward("syllabic_preprocess", &preprocess));
        if config.abjadify_initial_vowels {
            let t = forward_only(Role::VowelInitial, &[data.initial_abjadify], MatchMode::Initial)?;
            syllabic_normalizer = syllabic_normalizer.push(Translate::forward("abjadify_initial", &t));
        }
        if config.drop_virama {
            syllabic_normalizer = syllabic_normalizer.push(Replace::new("drop_virama", &[("\u{094D}", "")]));
        }
        // Undisambiguation must see every vowel sign the folds produce (`ॊ` → `ो`).
        syllabic_normalizer = syllabic_normalizer
            .push(Translate::backward("undisambiguate", &disambiguator))
            .push(Translate::backward("undisambiguate", &disambiguator));

        let mut backward = Pipeline::new()
            .then(&syllabic_normalizer)
            .push(Translate::backward("isolated_words_rev", &isolated));
        if !data.late_initial_vowels {
            backward = backward.push(Translate::backward("initial_vowels_rev", &initial));
        }
        backward = backward
            .push(Translate::backward("pass1_rev", &pass1))
            .push(FoldChars::new("abjadify", &DEVANAGARI_ABJADIFY));
        for &fixup in data.short_vowel_fixups {
            backward = backward.push(fixup);
        }
        backward = backward.push(Replace::new("long_a", &[("\u{093E}", "\u{0627}")]));
        if data.late_initial_vowels {
            backward = backward.push(Translate::backward("initial_vowels_rev", &initial));
        }
        backward = backward
            .push(Translate::backward("final_vowels_rev", &finals))
            .push(Translate::backward("pass2_rev", &pass2))
            .push(Translate::backward("cleanup_rev", &cleanup))
            .push(Replace::new("literals", data.literals));
        if let Some(fold) = data.abjad_nativize {
            backward = backward.push(Nativize::new(FoldChars::new("nativize", fold)));
        }

        debug!(
            profile = data.name,
            entries = tables.total_len(),
            forward_stages = forward.len(),
            backward_stages = backward.len(),
            "compiled conversion engine"
        );

        Ok(Self {
            name: data.name,
            abjad: data.abjad,
            syllabic: data.syllabic,
            tables,
            disambiguator,
            abjad_normalizer,
            syllabic_normalizer,
            forward,
            backward,
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn abjad(&self) -> Lang {
        self.abjad
    }

    #[inline]
    pub fn syllabic(&self) -> Lang {
        self.syllabic
    }

    /// Abjad → syllabic.
    pub fn forward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.forward.run(text, ctx)
    }

    /// Syllabic → abjad.
    pub fn backward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.backward.run(text, ctx)
    }

    /// The normalization prefix of [`forward`](Self::forward) on its own.
    pub fn normalize_abjad<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        self.abjad_normalizer.run(text, &Context::new(self.abjad, self.syllabic))
    }

    /// The normalization prefix of [`backward`](Self::backward) on its own.
    pub fn normalize_syllabic<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        self.syllabic_normalizer.run(text, &Context::new(self.syllabic, self.abjad))
    }

    /// One pass of semivowel → vowel-sign disambiguation between consonants.
    pub fn disambiguate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.disambiguator.apply_forward(text)
    }

    /// For profiles that chain further stages onto the engine.
    pub fn forward_pipeline(&self) -> &Pipeline {
        &self.forward
    }

    pub fn backward_pipeline(&self) -> &Pipeline {
        &self.backward
    }
}

impl std::fmt::Debug for IndoArabicEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndoArabicEngine")
            .field("name", &self.name)
            .field("abjad", &self.abjad.tag())
            .field("syllabic", &self.syllabic.tag())
            .field("entries", &self.tables.total_len())
            .finish()
    }
}

fn forward_only(role: Role, sources: &[&[Row]], mode: MatchMode) -> Result<Arc<Translator>, TableError> {
    let mut table = MappingTable::new();
    for rows in sources {
        table.load_rows(role, rows)?;
    }
    Ok(Arc::new(Translator::forward_only(table, mode)))
}

/// Split an aspirated digraph (`بھ`) into its base letter.
fn aspirate_base(source: &str) -> Option<&str> {
    let (last_at, last) = source.char_indices().last()?;
    (char_len(source) == 2 && last == 'ھ').then(|| &source[..last_at])
}

/// `C + shadda (+ alef)` → `C virama C (+ aa)`. An aspirate doubles its
/// unaspirated base: `بّھ` → `ब्भ`.
fn geminates(consonants: &MappingTable) -> MappingTable {
    let mut out = MappingTable::new();
    for (source, target) in consonants.iter() {
        let (keys, first) = match aspirate_base(source) {
            Some(base) => {
                let Some(base_target) = consonants.get(base) else {
                    continue;
                };
                (
                    [format!("{source}{SHADDA}"), format!("{base}{SHADDA}ھ")],
                    base_target,
                )
            }
            None if char_len(source) == 1 => ([format!("{source}{SHADDA}"), String::new()], target),
            None => continue,
        };
        let doubled = format!("{first}{VIRAMA}{target}");
        for key in keys.into_iter().filter(|k| !k.is_empty()) {
            out.insert(format!("{key}ا"), format!("{doubled}\u{093E}"));
            out.insert(key, doubled.clone());
        }
    }
    out
}

/// `C + alef` → `C + aa sign`.
fn with_long_a(consonants: &MappingTable) -> MappingTable {
    let mut out = MappingTable::new();
    for (source, target) in consonants.iter() {
        out.insert(format!("{source}ا"), format!("{target}\u{093E}"));
    }
    out
}

/// Carry each consonant override onto the long-a and geminated forms.
fn derived_overrides(overrides: &[Override]) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(overrides.len() * 4);
    for &(target, source) in overrides {
        let doubled = format!("{target}{VIRAMA}{target}");
        out.push((target.to_owned(), source.to_owned()));
        out.push((format!("{target}\u{093E}"), format!("{source}ا")));
        out.push((doubled.clone(), format!("{source}{SHADDA}")));
        out.push((format!("{doubled}\u{093E}"), format!("{source}{SHADDA}ا")));
    }
    out
}

/// `C य C` → `C ी C`, `C व C` → `C ो C` and their nasalized forms, for every
/// pair of distinct consonant targets.
fn disambiguation_table(consonants: &MappingTable) -> MappingTable {
    let mut targets: Vec<&str> = Vec::new();
    for (source, target) in consonants.iter() {
        if SEMIVOWEL_SOURCES.contains(&source) || target.is_empty() || targets.contains(&target) {
            continue;
        }
        targets.push(target);
    }

    let mut out = MappingTable::new();
    for c1 in &targets {
        for c2 in &targets {
            for (semivowel, vowel) in [("य", "ी"), ("व", "ो"), ("यं", "ीं"), ("वं", "ों")] {
                out.insert(format!("{c1}{semivowel}{c2}"), format!("{c1}{vowel}{c2}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> MappingTable {
        let mut t = MappingTable::new();
        for &(k, v) in rows {
            t.insert(k, v);
        }
        t
    }

    #[test]
    fn geminates_double_the_target() {
        let g = geminates(&table(&[("ب", "ब"), ("بھ", "भ"), ("ک", "क")]));
        assert_eq!(g.get("بّ"), Some("ब्ब"));
        assert_eq!(g.get("بّا"), Some("ब्बा"));
        assert_eq!(g.get("بّھ"), Some("ब्भ"));
        assert_eq!(g.get("بھّ"), Some("ब्भ"));
        assert_eq!(g.get("کّا"), Some("क्का"));
    }

    #[test]
    fn geminate_reverse_prefers_shadda_on_base() {
        let g = geminates(&table(&[("ب", "ब"), ("بھ", "भ")]));
        assert_eq!(g.inverted().get("ब्भ"), Some("بّھ"));
    }

    #[test]
    fn aspirate_without_base_is_skipped() {
        let g = geminates(&table(&[("ڙھ", "ढ़")]));
        assert!(g.is_empty());
    }

    #[test]
    fn derived_overrides_cover_all_forms() {
        let d = derived_overrides(&[("स", "س")]);
        let keys: Vec<_> = d.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["स", "सा", "स्स", "स्सा"]);
        assert_eq!(d[2].1, "سّ");
    }

    #[test]
    fn disambiguation_skips_semivowels() {
        let t = disambiguation_table(&table(&[("ک", "क"), ("ی", "य"), ("و", "व"), ("م", "म")]));
        assert_eq!(t.get("कयम"), Some("कीम"));
        assert_eq!(t.get("मवक"), Some("मोक"));
        assert_eq!(t.get("कयंम"), Some("कींम"));
        assert!(!t.contains("यवक"));
        assert_eq!(t.len(), 2 * 2 * 4);
    }
}
