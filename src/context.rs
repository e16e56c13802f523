// src/context.rs
// Per-call data handed to every stage. Tiny and Copy; the compiled tables
// live in the stages themselves.

use crate::lang::{Lang, URD};

/// Runtime context passed to every conversion stage.
///
/// Contains:
/// - `from` / `to`: the language pair being converted (for logging and
///   direction-aware stages)
/// - `nativize`: whether the optional nativization pass should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub from: Lang,
    pub to: Lang,
    pub nativize: bool,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(URD, URD)
    }
}

impl Context {
    #[inline(always)]
    pub const fn new(from: Lang, to: Lang) -> Self {
        Self {
            from,
            to,
            nativize: false,
        }
    }

    #[inline(always)]
    pub const fn with_nativize(mut self, nativize: bool) -> Self {
        self.nativize = nativize;
        self
    }
}
