//! Tag-based dispatch to the profiles, with pluggable per-pair backends.
use crate::{
    lang::{HIN, Lang, PAN_ARAB, PAN_GURU, SND_ARAB, SND_DEVA, URD},
    profile::{Hindustani, Profile, ProfileConfig, ProfileError, Punjabi, Sindhi},
};
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, LazyLock},
};
use thiserror::Error;
use tracing::{debug, debug_span};

#[derive(Debug, Error)]
#[error("backend `{backend}` failed: {message}")]
pub struct BackendError {
    pub backend: &'static str,
    pub message: String,
}

impl BackendError {
    pub fn new(backend: &'static str, message: impl Into<String>) -> Self {
        Self {
            backend,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("unknown language tag `{0}`")]
    UnknownLang(String),

    #[error("no conversion route from {from} to {to}")]
    UnsupportedPair { from: Lang, to: Lang },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("default router unavailable: {0}")]
    Unavailable(String),
}

/// An alternative converter for one language pair.
///
/// Registered backends take precedence over the rule-based profiles. Errors
/// reach the caller unchanged as [`RouterError::Backend`].
pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;

    fn transliterate(&self, text: &str, from: Lang, to: Lang) -> Result<String, BackendError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Hindustani,
    Punjabi,
    Sindhi,
}

const ROUTES: &[(Lang, Lang, Family)] = &[
    (URD, HIN, Family::Hindustani),
    (HIN, URD, Family::Hindustani),
    (PAN_ARAB, PAN_GURU, Family::Punjabi),
    (PAN_GURU, PAN_ARAB, Family::Punjabi),
    (SND_ARAB, SND_DEVA, Family::Sindhi),
    (SND_DEVA, SND_ARAB, Family::Sindhi),
];

fn route(from: Lang, to: Lang) -> Option<Family> {
    ROUTES
        .iter()
        .find(|&&(f, t, _)| f == from && t == to)
        .map(|&(_, _, family)| family)
}

fn parse_tag(tag: &str) -> Result<Lang, RouterError> {
    Lang::from_tag(tag).ok_or_else(|| RouterError::UnknownLang(tag.to_owned()))
}

/// Fixed (source, destination) → profile table.
///
/// All profiles are compiled once in [`ScriptRouter::new`]; a router is
/// immutable afterwards and can be shared across threads.
pub struct ScriptRouter {
    hindustani: Hindustani,
    punjabi: Punjabi,
    sindhi: Sindhi,
    backends: HashMap<(Lang, Lang), Arc<dyn Backend>>,
}

impl fmt::Debug for ScriptRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backends: Vec<_> = self
            .backends
            .iter()
            .map(|((from, to), b)| format!("{from}→{to}: {}", b.name()))
            .collect();
        f.debug_struct("ScriptRouter")
            .field("routes", &ROUTES.len())
            .field("backends", &backends)
            .finish()
    }
}

impl ScriptRouter {
    pub fn new() -> Result<Self, RouterError> {
        Self::builder().build()
    }

    pub fn builder() -> ScriptRouterBuilder {
        ScriptRouterBuilder::default()
    }

    /// Convert `text` written in `src_tag` into `dst_tag`.
    pub fn convert(&self, text: &str, src_tag: &str, dst_tag: &str, nativize: bool) -> Result<String, RouterError> {
        let from = parse_tag(src_tag)?;
        let to = parse_tag(dst_tag)?;
        self.convert_langs(text, from, to, nativize)
    }

    pub fn convert_langs(&self, text: &str, from: Lang, to: Lang, nativize: bool) -> Result<String, RouterError> {
        let span = debug_span!("convert", %from, %to, nativize, len = text.len());
        let _guard = span.enter();

        if let Some(backend) = self.backends.get(&(from, to)) {
            debug!(backend = backend.name(), "dispatching to backend");
            return Ok(backend.transliterate(text, from, to)?);
        }
        let profile = self.profile_for(from, to).ok_or(RouterError::UnsupportedPair { from, to })?;
        debug!(profile = profile.name(), "dispatching to profile");
        Ok(profile.convert(text, from, to, nativize)?)
    }

    /// The rule-based profile serving `from → to`, if the pair is routed.
    pub fn profile_for(&self, from: Lang, to: Lang) -> Option<&dyn Profile> {
        route(from, to).map(|family| match family {
            Family::Hindustani => &self.hindustani as &dyn Profile,
            Family::Punjabi => &self.punjabi,
            Family::Sindhi => &self.sindhi,
        })
    }

    /// Every pair the rule-based profiles convert.
    pub fn routes() -> impl Iterator<Item = (Lang, Lang)> {
        ROUTES.iter().map(|&(from, to, _)| (from, to))
    }

    pub fn hindustani(&self) -> &Hindustani {
        &self.hindustani
    }

    pub fn punjabi(&self) -> &Punjabi {
        &self.punjabi
    }

    pub fn sindhi(&self) -> &Sindhi {
        &self.sindhi
    }
}

#[derive(Default)]
pub struct ScriptRouterBuilder {
    config: ProfileConfig,
    backends: HashMap<(Lang, Lang), Arc<dyn Backend>>,
}

impl ScriptRouterBuilder {
    pub fn abjadify_initial_vowels(mut self, yes: bool) -> Self {
        self.config.abjadify_initial_vowels = yes;
        self
    }

    pub fn drop_virama(mut self, yes: bool) -> Self {
        self.config.drop_virama = yes;
        self
    }

    pub fn config(mut self, config: ProfileConfig) -> Self {
        self.config = config;
        self
    }

    /// Serve `from → to` with `backend` instead of the built-in profile.
    pub fn backend<B: Backend + 'static>(mut self, from: Lang, to: Lang, backend: B) -> Self {
        self.backends.insert((from, to), Arc::new(backend));
        self
    }

    pub fn shared_backend(mut self, from: Lang, to: Lang, backend: Arc<dyn Backend>) -> Self {
        self.backends.insert((from, to), backend);
        self
    }

    pub fn build(self) -> Result<ScriptRouter, RouterError> {
        let config = self.config;
        let router = ScriptRouter {
            hindustani: Hindustani::new(config)?,
            punjabi: Punjabi::new(config)?,
            sindhi: Sindhi::new(config)?,
            backends: self.backends,
        };
        debug!(?config, backends = router.backends.len(), "router ready");
        Ok(router)
    }
}

static DEFAULT_ROUTER: LazyLock<Result<ScriptRouter, RouterError>> = LazyLock::new(ScriptRouter::new);

/// Convert with a process-wide router built on first use with the default
/// configuration.
pub fn convert(text: &str, src_tag: &str, dst_tag: &str, nativize: bool) -> Result<String, RouterError> {
    match &*DEFAULT_ROUTER {
        Ok(router) => router.convert(text, src_tag, dst_tag, nativize),
        Err(e) => Err(RouterError::Unavailable(e.to_string())),
    }
}
