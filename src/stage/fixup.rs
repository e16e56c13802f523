use crate::{
    context::Context,
    stage::{Stage, StageError, keep_or_replace, owned_if_changed},
};
use std::borrow::Cow;

/// Signature of a contextual rewrite: borrow in, borrow out when unchanged.
pub type FixupFn = for<'a> fn(&'a str) -> Cow<'a, str>;

/// A contextual rewrite that a substitution table cannot express (it looks at
/// neighbouring characters without consuming them), packaged as a stage.
#[derive(Clone, Copy)]
pub struct Fixup {
    name: &'static str,
    probe: fn(&str) -> bool,
    rewrite: FixupFn,
}

impl Fixup {
    /// `probe` must return `true` whenever `rewrite` could change the text.
    pub const fn new(name: &'static str, probe: fn(&str) -> bool, rewrite: FixupFn) -> Self {
        Self { name, probe, rewrite }
    }
}

impl std::fmt::Debug for Fixup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Fixup").field(&self.name).finish()
    }
}

impl Stage for Fixup {
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok((self.probe)(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let changed = owned_if_changed((self.rewrite)(&text));
        Ok(keep_or_replace(text, changed))
    }
}

/// Rewrite single characters based on their original neighbours.
///
/// `rule(prev, c, next)` returns the replacement for `c`, or `None` to keep
/// it. Neighbours are always read from the input, never from earlier
/// replacements. Borrowed when no rule fires.
pub fn rewrite_chars<F>(text: &str, rule: F) -> Cow<'_, str>
where
    F: Fn(Option<char>, char, Option<char>) -> Option<&'static str>,
{
    let mut out: Option<String> = None;
    let mut prev = None;
    let mut iter = text.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        let next = iter.peek().map(|&(_, n)| n);
        match rule(prev, c, next) {
            Some(rep) if !(rep.chars().eq(std::iter::once(c))) => {
                let buf = out.get_or_insert_with(|| {
                    let mut s = String::with_capacity(text.len() + 8);
                    s.push_str(&text[..i]);
                    s
                });
                buf.push_str(rep);
            }
            _ => {
                if let Some(buf) = out.as_mut() {
                    buf.push(c);
                }
            }
        }
        prev = Some(c);
    }
    match out {
        Some(s) => Cow::Owned(s),
        None => Cow::Borrowed(text),
    }
}
