use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::{borrow::Cow, sync::Arc};

/// Runs `inner` only when the caller asked for native orthography.
///
/// Nativization rewrites output into the spelling most native writers of the
/// target script actually use: nukta dots dropped from Hindi loan consonants,
/// Arabic-codepoint ye for Sindhi, and so on.
#[derive(Clone)]
pub struct Nativize {
    inner: Arc<dyn Stage>,
}

impl Nativize {
    pub fn new(inner: impl Stage + 'static) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Stage for Nativize {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if !ctx.nativize {
            return Ok(false);
        }
        self.inner.needs_apply(text, ctx)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !ctx.nativize {
            return Ok(text);
        }
        self.inner.apply(text, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lang::{SND_ARAB, SND_DEVA, sindhi::NATIVE_FOLD},
        stage::fold_chars::FoldChars,
    };

    #[test]
    fn gated_on_context() {
        let stage = Nativize::new(FoldChars::new("sindhi_native", &NATIVE_FOLD));
        let off = Context::new(SND_DEVA, SND_ARAB);
        let on = off.with_nativize(true);
        assert!(!stage.needs_apply("کی", &off).unwrap());
        assert_eq!(stage.apply(Cow::Borrowed("کی"), &off).unwrap(), "کی");
        assert!(stage.needs_apply("کی", &on).unwrap());
        assert_eq!(stage.apply(Cow::Borrowed("کی"), &on).unwrap(), "کي");
    }
}
