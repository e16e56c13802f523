pub mod engine;
pub mod gurmukhi;
pub mod hindustani;
pub mod punjabi;
pub mod sindhi;

pub use engine::{IndoArabicEngine, ProfileConfig, ProfileData};
pub use hindustani::Hindustani;
pub use punjabi::Punjabi;
pub use sindhi::Sindhi;

use crate::{context::Context, lang::Lang, stage::StageError, table::TableError};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile `{profile}` failed to compile its tables: {source}")]
    Table {
        profile: &'static str,
        #[source]
        source: TableError,
    },

    #[error("conversion failed in profile `{0}`: {1}")]
    Stage(&'static str, #[source] StageError),

    #[error("profile `{profile}` does not convert {from} → {to}")]
    UnsupportedPair {
        profile: &'static str,
        from: Lang,
        to: Lang,
    },
}

/// One language family: an abjad orthography and its syllabic counterpart.
///
/// `forward` converts abjad → syllabic, `backward` syllabic → abjad.
/// Implementations are immutable after construction and safe to share.
pub trait Profile: Send + Sync {
    fn name(&self) -> &'static str;

    /// Perso-Arabic side.
    fn abjad(&self) -> Lang;

    /// Indic side.
    fn syllabic(&self) -> Lang;

    fn forward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    fn backward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    /// Dispatch on the target: the syllabic tag runs `forward`, the abjad
    /// tag runs `backward`.
    fn convert(&self, text: &str, from: Lang, to: Lang, nativize: bool) -> Result<String, ProfileError> {
        let ctx = Context::new(from, to).with_nativize(nativize);
        let out = if from == self.abjad() && to == self.syllabic() {
            self.forward(text, &ctx)
        } else if from == self.syllabic() && to == self.abjad() {
            self.backward(text, &ctx)
        } else {
            return Err(ProfileError::UnsupportedPair {
                profile: self.name(),
                from,
                to,
            });
        };
        out.map(Cow::into_owned).map_err(|e| ProfileError::Stage(self.name(), e))
    }
}

/// A profile that is exactly one engine.
impl Profile for IndoArabicEngine {
    fn name(&self) -> &'static str {
        IndoArabicEngine::name(self)
    }

    fn abjad(&self) -> Lang {
        IndoArabicEngine::abjad(self)
    }

    fn syllabic(&self) -> Lang {
        IndoArabicEngine::syllabic(self)
    }

    fn forward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        IndoArabicEngine::forward(self, text, ctx)
    }

    fn backward<'a>(&self, text: &'a str, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        IndoArabicEngine::backward(self, text, ctx)
    }
}

pub(crate) fn compile(data: &'static ProfileData, config: ProfileConfig) -> Result<IndoArabicEngine, ProfileError> {
    IndoArabicEngine::new(data, config).map_err(|source| ProfileError::Table {
        profile: data.name,
        source,
    })
}
