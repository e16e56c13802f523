//! Gurmukhi ⇄ Devanagari bridge.
//!
//! Punjabi reuses the Hindustani engine with Devanagari as the pivot. The
//! bridge is a near-bijective code point shift plus the few letters and
//! signs the two scripts handle differently: tippi vs. bindi, addak
//! gemination, yakash and the retroflex flap.
use crate::{
    lang::gurmukhi::{
        ADDAK, ASPIRATES, BINDI, DEVANAGARI_FOLD, DEVANAGARI_OFFSET, NATIVE, NUKTA_BASES, PARALLEL_RANGES,
        REVERSE_OVERRIDES, SPECIAL,
    },
    process::Pipeline,
    stage::{
        fixup::{Fixup, rewrite_chars},
        nativize::Nativize,
        normalization::NFC,
        translate::Translate,
    },
    table::{MappingTable, Role, TableError},
    translator::{MatchMode, Translator},
    unicode::{VIRAMA, is_gurmukhi_consonant},
};
use std::{borrow::Cow, sync::Arc};

fn devanagari(c: char) -> Option<char> {
    char::from_u32(c as u32 - DEVANAGARI_OFFSET)
}

fn parallel_letters() -> impl Iterator<Item = (char, char)> {
    PARALLEL_RANGES
        .iter()
        .flat_map(|&(lo, hi)| lo..=hi)
        .filter_map(char::from_u32)
        .filter_map(|g| devanagari(g).map(|d| (g, d)))
}

/// `ੱ` + consonant → doubled Devanagari consonant. Aspirates double their
/// base: `ੱਖ` → `क्ख`.
fn addak_pairs(table: &mut MappingTable) {
    for (g, d) in parallel_letters().filter(|&(g, _)| is_gurmukhi_consonant(g)) {
        let first = ASPIRATES
            .iter()
            .find(|&&(aspirate, _)| aspirate == g)
            .and_then(|&(_, base)| devanagari(base))
            .unwrap_or(d);
        table.insert(format!("{ADDAK}{g}"), format!("{first}{VIRAMA}{d}"));
    }
    for &g in NUKTA_BASES {
        if let Some(d) = devanagari(g) {
            table.insert(format!("{ADDAK}{g}\u{0A3C}"), format!("{d}\u{093C}{VIRAMA}{d}\u{093C}"));
        }
    }
    table.insert(format!("{ADDAK}\u{0A38}\u{0A3C}"), format!("श{VIRAMA}श"));
    table.insert(format!("{ADDAK}\u{0A32}\u{0A3C}"), format!("ळ{VIRAMA}ळ"));
}

fn bridge_table() -> Result<MappingTable, TableError> {
    let mut table = MappingTable::new();
    for (g, d) in parallel_letters() {
        table.insert(g.to_string(), d.to_string());
    }
    table.load_rows(Role::Misc, SPECIAL)?;
    addak_pairs(&mut table);
    Ok(table)
}

fn has_bindi(text: &str) -> bool {
    text.contains(BINDI)
}

/// Gurmukhi writes the nasal as tippi after a short or inherent vowel and
/// as bindi after a long one.
fn bindi_to_tippi(text: &str) -> Cow<'_, str> {
    rewrite_chars(text, |prev, c, next| {
        if c != BINDI {
            return None;
        }
        let short = match prev {
            Some(p) if is_gurmukhi_consonant(p) => true,
            Some('\u{0A3C}' | 'ਿ' | 'ੁ' | 'ਅ' | 'ਇ' | 'ਉ') => true,
            Some('ੂ') => next.is_some_and(crate::unicode::is_word_char),
            _ => false,
        };
        short.then_some(TIPPI)
    })
}

const TIPPI: &str = "\u{0A70}";

pub(crate) const TIPPI_FIXUP: Fixup = Fixup::new("tippi", has_bindi, bindi_to_tippi);

/// Compiled Gurmukhi ⇄ Devanagari passes.
#[derive(Debug, Clone)]
pub struct GurmukhiBridge {
    translator: Arc<Translator>,
    fold: Arc<Translator>,
    native: Arc<Translator>,
}

impl GurmukhiBridge {
    pub fn new() -> Result<Self, TableError> {
        let translator = Translator::build(bridge_table()?, MatchMode::Free, |rev| {
            rev.apply_overrides(REVERSE_OVERRIDES);
        });
        let fold = Translator::forward_only(MappingTable::from_rows(Role::Misc, DEVANAGARI_FOLD)?, MatchMode::Free);
        let native = Translator::forward_only(MappingTable::from_rows(Role::Consonant, NATIVE)?, MatchMode::Free);
        Ok(Self {
            translator: Arc::new(translator),
            fold: Arc::new(fold),
            native: Arc::new(native),
        })
    }

    /// Gurmukhi → Devanagari.
    pub fn decoder(&self) -> Pipeline {
        Pipeline::new()
            .push(NFC)
            .push(Translate::forward("gurmukhi_to_devanagari", &self.translator))
    }

    /// Devanagari → Gurmukhi, with tippi placement and optional nukta
    /// simplification.
    pub fn encoder(&self) -> Pipeline {
        Pipeline::new()
            .push(Translate::forward("devanagari_fold", &self.fold))
            .push(Translate::backward("devanagari_to_gurmukhi", &self.translator))
            .push(TIPPI_FIXUP)
            .push(Nativize::new(Translate::forward("gurmukhi_native", &self.native)))
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        context::Context,
        lang::{PAN_ARAB, PAN_GURU},
    };

    fn bridge() -> GurmukhiBridge {
        GurmukhiBridge::new().unwrap()
    }

    fn decode(b: &GurmukhiBridge, s: &str) -> String {
        b.decoder().run(s, &Context::new(PAN_GURU, PAN_ARAB)).unwrap().into_owned()
    }

    fn encode(b: &GurmukhiBridge, s: &str) -> String {
        b.encoder().run(s, &Context::new(PAN_ARAB, PAN_GURU)).unwrap().into_owned()
    }

    #[test]
    fn parallel_letters_shift() {
        let b = bridge();
        assert_eq!(decode(&b, "ਕਲਮ"), "कलम");
        assert_eq!(encode(&b, "कलम"), "ਕਲਮ");
        assert_eq!(decode(&b, "੧੨੩"), "१२३");
    }

    #[test]
    fn composed_letters_map_after_nfc() {
        let b = bridge();
        assert_eq!(decode(&b, "\u{0A36}ਹਰ"), "शहर");
        assert_eq!(encode(&b, "शहर"), "\u{0A38}\u{0A3C}ਹਰ");
        assert_eq!(decode(&b, "ੜ"), "\u{0921}\u{093C}");
        assert_eq!(encode(&b, "\u{0921}\u{093C}"), "ੜ");
    }

    #[test]
    fn addak_geminates() {
        let b = bridge();
        assert_eq!(decode(&b, "ਪੱਕਾ"), "पक्का");
        assert_eq!(decode(&b, "ਅੱਖ"), "अक्ख");
        assert_eq!(encode(&b, "पक्का"), "ਪੱਕਾ");
        assert_eq!(encode(&b, "अक्ख"), "ਅੱਖ");
    }

    #[test]
    fn nasal_signs() {
        let b = bridge();
        assert_eq!(decode(&b, "ਪੰਜ"), "पंज");
        assert_eq!(encode(&b, "पंज"), "ਪੰਜ");
        assert_eq!(encode(&b, "मैं"), "ਮੈਂ");
        assert_eq!(encode(&b, "सिंह"), "ਸਿੰਹ");
    }

    #[test]
    fn yakash_only_decodes() {
        let b = bridge();
        assert_eq!(decode(&b, "ਸ੍ਵ"), "स्व");
        assert_eq!(decode(&b, "ਕੵ"), "क्य");
        assert_eq!(encode(&b, "क्य"), "ਕ੍ਯ");
    }

    #[test]
    fn missing_letters_fold() {
        let b = bridge();
        assert_eq!(encode(&b, "भाषा"), "ਭਾ\u{0A38}\u{0A3C}ਾ");
        assert_eq!(encode(&b, "\u{0922}\u{093C}"), "ੜ੍ਹ");
    }
}
