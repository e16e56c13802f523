//! Core conversion stage abstraction.
//!
//! Every pass of a conversion pipeline is a [`Stage`]: a cheap pre-check
//! (`needs_apply`) followed by an allocation-aware transformation (`apply`).
//! Stages take and return `Cow<str>` so that a pipeline in which nothing
//! changes never allocates.

pub mod fixup;
pub mod fold_chars;
pub mod nativize;
pub mod normalization;
pub mod remove_diacritics;
pub mod replace;
pub mod translate;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("conversion failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single conversion step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have said no.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

/// Keep `text` (and its lifetime) when `changed` is `None`.
///
/// Helpers that borrow `text` can only hand back a `Cow` tied to that borrow;
/// this re-attaches the original lifetime for the unchanged case.
#[inline(always)]
pub(crate) fn keep_or_replace(text: Cow<'_, str>, changed: Option<String>) -> Cow<'_, str> {
    match changed {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}

/// Collapse a borrowed-or-owned helper result into `Some(owned)` on change.
#[inline(always)]
pub(crate) fn owned_if_changed(result: Cow<'_, str>) -> Option<String> {
    match result {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    }
}
