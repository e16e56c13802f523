use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use phf::Map;
use std::borrow::Cow;

/// Per-character fold through a static `char → &str` map.
///
/// Used for codepoint unification (Arabic `ي` → Urdu `ی`), punctuation
/// conventions and vowel-sign reduction. A mapping to `""` deletes the
/// character. Output is never re-scanned.
#[derive(Clone, Copy)]
pub struct FoldChars {
    name: &'static str,
    map: &'static Map<char, &'static str>,
}

impl FoldChars {
    pub const fn new(name: &'static str, map: &'static Map<char, &'static str>) -> Self {
        Self { name, map }
    }

    #[inline(always)]
    fn hits(&self, text: &str) -> bool {
        !text.is_ascii() || self.map.keys().any(char::is_ascii)
    }
}

impl Stage for FoldChars {
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if !self.hits(text) {
            return Ok(false);
        }
        Ok(text.chars().any(|c| self.map.contains_key(&c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let Some(first) = text.char_indices().find(|(_, c)| self.map.contains_key(c)).map(|(i, _)| i) else {
            return Ok(text);
        };
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..first]);
        for c in text[first..].chars() {
            match self.map.get(&c) {
                Some(rep) => out.push_str(rep),
                None => out.push(c),
            }
        }
        Ok(Cow::Owned(out))
    }
}

impl StageTestConfig for FoldChars {
    fn samples(_ctx: &Context) -> &'static [&'static str] {
        &["كتاب", "يہ", "کتاب", "hello", ""]
    }
    fn should_pass_through(_ctx: &Context) -> &'static [&'static str] {
        &["کتاب", "hello", "कलम", ""]
    }
    fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
        &[("كتاب", "کتاب"), ("يہ", "یہ"), ("١٢", "۱۲")]
    }
}
