use crate::{
    context::Context,
    stage::{Stage, StageError, keep_or_replace, owned_if_changed},
    testing::stage_contract::StageTestConfig,
    translator::{Direction, Translator},
};
use std::{borrow::Cow, sync::Arc};

/// One substitution pass: a shared [`Translator`] run in a fixed direction.
///
/// The same translator backs the forward pass of one pipeline and the
/// backward pass of the other, so it is held behind an `Arc`.
#[derive(Clone)]
pub struct Translate {
    name: &'static str,
    translator: Arc<Translator>,
    direction: Direction,
}

impl Translate {
    pub fn new(name: &'static str, translator: Arc<Translator>, direction: Direction) -> Self {
        Self {
            name,
            translator,
            direction,
        }
    }

    #[inline]
    pub fn forward(name: &'static str, translator: &Arc<Translator>) -> Self {
        Self::new(name, Arc::clone(translator), Direction::Forward)
    }

    #[inline]
    pub fn backward(name: &'static str, translator: &Arc<Translator>) -> Self {
        Self::new(name, Arc::clone(translator), Direction::Backward)
    }

    fn check_direction(&self) -> Result<(), StageError> {
        if self.direction == Direction::Backward && self.translator.reverse_table().is_none() {
            return Err(StageError::Failed(self.name, "translator has no reverse table".to_owned()));
        }
        Ok(())
    }
}

impl Stage for Translate {
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        self.check_direction()?;
        Ok(self.translator.could_match(text, self.direction))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.check_direction()?;
        let changed = owned_if_changed(self.translator.apply(&text, self.direction));
        Ok(keep_or_replace(text, changed))
    }
}

impl StageTestConfig for Translate {
    fn samples(_ctx: &Context) -> &'static [&'static str] {
        &["ککک", "کتاب", "کک ک", "क", ""]
    }
    fn should_pass_through(_ctx: &Context) -> &'static [&'static str] {
        &["hello", "تاب", "कलम", ""]
    }
    fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
        &[("ک", "क"), ("کک", "क्क"), ("کتاب", "कتاب")]
    }
    fn skip_idempotence() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;
    use crate::table::MappingTable;
    use crate::translator::MatchMode;

    fn sample() -> Arc<Translator> {
        let mut t = MappingTable::new();
        t.insert("ک", "क");
        t.insert("کک", "क्क");
        Arc::new(Translator::new(t, MatchMode::Free))
    }

    #[test]
    fn universal_contract_compliance() {
        let stage = Translate::forward("sample", &sample());
        assert_stage_contract!(stage);
    }

    #[test]
    fn backward_reuses_the_same_tables() {
        let tr = sample();
        let back = Translate::backward("sample_rev", &tr);
        let c = Context::default();
        assert!(back.needs_apply("क्क", &c).unwrap());
        assert_eq!(back.apply(Cow::Borrowed("क्क"), &c).unwrap(), "کک");
        assert_eq!(Arc::strong_count(&tr), 2);
    }

    #[test]
    fn backward_over_forward_only_table_is_an_error() {
        let mut t = MappingTable::new();
        t.insert("इ", "अ");
        let stage = Translate::backward("abjadify_rev", &Arc::new(Translator::forward_only(t, MatchMode::Free)));
        let c = Context::default();
        let err = stage.needs_apply("अ", &c).unwrap_err();
        assert!(matches!(err, StageError::Failed("abjadify_rev", _)), "{err}");
        assert!(stage.apply(Cow::Borrowed("अ"), &c).is_err());
    }
}
