pub mod data;
pub mod gurmukhi;
pub mod hindustani;
pub mod sindhi;

use phf::{Map, phf_map};

/// Writing system of one side of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Urdu Nastaliq / Naskh orthography.
    Urdu,
    /// Punjabi written in Perso-Arabic.
    Shahmukhi,
    /// Sindhi written in Perso-Arabic.
    SindhiArabic,
    Devanagari,
    Gurmukhi,
}

impl Script {
    /// Consonant-centric script that omits short vowels.
    #[inline(always)]
    pub const fn is_abjad(self) -> bool {
        matches!(self, Script::Urdu | Script::Shahmukhi | Script::SindhiArabic)
    }
}

/// A (language, script-region) pair identified by its tag, e.g. `ur-PK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub tag: &'static str,
    pub name: &'static str,
    pub script: Script,
}

impl Lang {
    #[inline(always)]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
    #[inline(always)]
    pub const fn script(&self) -> Script {
        self.script
    }

    /// Exact, case-sensitive tag lookup.
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Lang> {
        LANG_TABLE.get(tag).copied()
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag)
    }
}

/// ---------------------------------------------------------------------------
///    Macro – generates the public constants and the tag table
/// ---------------------------------------------------------------------------
macro_rules! define_langs {
    ($( $code:ident, $tag:literal, $name:literal, $script:expr ),* $(,)?) => {
        $(
            pub const $code: Lang = Lang { tag: $tag, name: $name, script: $script };
        )*

        pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
            $( $tag => $code, )*
        };

        pub fn all_langs() -> &'static [Lang] {
            &[$($code),*]
        }
    };
}

define_langs! {
    HIN,      "hi-IN", "Hindi",           Script::Devanagari,
    URD,      "ur-PK", "Urdu",            Script::Urdu,
    PAN_GURU, "pa-IN", "Punjabi",         Script::Gurmukhi,
    PAN_ARAB, "pa-PK", "Punjabi",         Script::Shahmukhi,
    SND_DEVA, "sd-IN", "Sindhi",          Script::Devanagari,
    SND_ARAB, "sd-PK", "Sindhi",          Script::SindhiArabic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for &lang in all_langs() {
            assert_eq!(Lang::from_tag(lang.tag()), Some(lang));
        }
        assert_eq!(all_langs().len(), 6);
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(Lang::from_tag("en-US"), None);
        assert_eq!(Lang::from_tag("UR-PK"), None);
        assert_eq!(Lang::from_tag(""), None);
    }

    #[test]
    fn abjad_sides() {
        assert!(URD.script().is_abjad());
        assert!(PAN_ARAB.script().is_abjad());
        assert!(SND_ARAB.script().is_abjad());
        assert!(!HIN.script().is_abjad());
        assert!(!PAN_GURU.script().is_abjad());
        assert_eq!(SND_DEVA.to_string(), "sd-IN");
    }
}
