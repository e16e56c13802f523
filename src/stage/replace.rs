use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use memchr::memmem;
use std::borrow::Cow;

/// Ordered literal replacements, each applied to the whole text in turn.
///
/// This is the last-resort cleanup for symbols that must never survive a
/// conversion (a stray vowel sign, a leftover virama). Unlike a
/// [`Translate`](super::translate::Translate) pass, a later pair *does* see
/// the output of an earlier one.
#[derive(Clone, Copy)]
pub struct Replace {
    name: &'static str,
    pairs: &'static [(&'static str, &'static str)],
}

impl Replace {
    pub const fn new(name: &'static str, pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, pairs }
    }
}

impl Stage for Replace {
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        let hay = text.as_bytes();
        Ok(self
            .pairs
            .iter()
            .any(|(from, _)| !from.is_empty() && memmem::find(hay, from.as_bytes()).is_some()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let mut text = text;
        for &(from, to) in self.pairs {
            if from.is_empty() || memmem::find(text.as_bytes(), from.as_bytes()).is_none() {
                continue;
            }
            text = Cow::Owned(text.replace(from, to));
        }
        Ok(text)
    }
}

impl StageTestConfig for Replace {
    fn samples(_ctx: &Context) -> &'static [&'static str] {
        &["کی", "کी", "ک्ت", ""]
    }
    fn should_pass_through(_ctx: &Context) -> &'static [&'static str] {
        &["کتاب", "hello", ""]
    }
    fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
        &[("کी", "کی"), ("ک्ت", "کت"), ("کोی", "کوی")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    const LITERALS: Replace = Replace::new("literals", &[("ी", "ی"), ("ो", "و"), ("्", "")]);

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(LITERALS);
    }

    #[test]
    fn later_pairs_see_earlier_output() {
        static CHAIN: &[(&str, &str)] = &[("a", "b"), ("b", "c")];
        let c = Context::default();
        let out = Replace::new("chain", CHAIN).apply(Cow::Borrowed("ab"), &c).unwrap();
        assert_eq!(out, "cc");
    }
}
