//! Process abstraction.
//!
//! A [`Pipeline`] is an ordered list of stages built once per profile and
//! shared read-only afterwards. Each stage is consulted through its
//! `needs_apply` pre-check, so untouched text flows through every stage as
//! the caller's borrowed `&str`.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

#[derive(Default, Clone)]
pub struct Pipeline {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 16]>,
}

impl Pipeline {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Append every stage of `other`, sharing them.
    pub fn then(mut self, other: &Pipeline) -> Self {
        self.stages.extend(other.stages.iter().cloned());
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    #[inline]
    pub fn run<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.process(Cow::Borrowed(text), ctx)
    }
}

impl Process for Pipeline {
    fn process<'a>(&self, mut text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx)? {
                continue;
            }
            text = stage.apply(text, ctx)?;
            trace!(stage = stage.name(), output = %text, "stage applied");
        }
        Ok(text)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{normalization::NFC, remove_diacritics::RemoveDiacritics, replace::Replace};

    #[test]
    fn untouched_text_stays_borrowed() {
        let p = Pipeline::new().push(NFC).push(RemoveDiacritics);
        let input = "کتاب";
        let out = p.run(input, &Context::default()).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)));
    }

    #[test]
    fn stages_run_in_order() {
        let p = Pipeline::new()
            .push(Replace::new("one", &[("a", "b")]))
            .push(Replace::new("two", &[("b", "c")]));
        assert_eq!(p.run("a", &Context::default()).unwrap(), "c");
        assert_eq!(p.stage_names().collect::<Vec<_>>(), ["one", "two"]);
    }

    #[test]
    fn then_shares_stages() {
        let a = Pipeline::new().push(NFC);
        let b = Pipeline::new().push(RemoveDiacritics).then(&a);
        assert_eq!(b.len(), 2);
        assert_eq!(format!("{b:?}"), r#"["remove_diacritics", "nfc"]"#);
    }
}
