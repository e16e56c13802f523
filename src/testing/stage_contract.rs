use crate::{context::Context, stage::Stage};

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Conversion directions to exercise. Defaults to every routed pair.
    fn contexts() -> &'static [Context] {
        &ALL_CONTEXTS
    }

    /// General test samples (may or may not trigger changes).
    fn samples(_ctx: &Context) -> &'static [&'static str] {
        &["Hello World 123", "کتاب", "कलम", ""]
    }

    /// Samples that must pass through unchanged without allocating.
    fn should_pass_through(_ctx: &Context) -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Substitution passes are not idempotent in general: their output
    /// alphabet may overlap their input alphabet.
    fn skip_idempotence() -> bool {
        false
    }
}

use crate::lang::{HIN, PAN_ARAB, PAN_GURU, SND_ARAB, SND_DEVA, URD};

static ALL_CONTEXTS: [Context; 6] = [
    Context::new(URD, HIN),
    Context::new(HIN, URD),
    Context::new(PAN_ARAB, PAN_GURU),
    Context::new(PAN_GURU, PAN_ARAB),
    Context::new(SND_ARAB, SND_DEVA),
    Context::new(SND_DEVA, SND_ARAB),
];

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `transforms_as_declared` → declared pairs convert exactly
/// 3. `stage_is_idempotent` → applying twice yields the same as once
/// 4. `needs_apply_is_sound` → a negative pre-check never hides a change
/// 5. `handles_empty_string_and_ascii` → graceful on edge cases
/// 6. `no_panic_on_mixed_scripts` → survives arbitrary real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::transforms_as_declared(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_sound(&$stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
fn run<'a, S: Stage>(stage: &S, input: &'a str, ctx: &Context) -> Cow<'a, str> {
    let text = Cow::Borrowed(input);
    if stage.needs_apply(&text, ctx).unwrap() {
        stage.apply(text, ctx).unwrap()
    } else {
        text
    }
}

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        for &input in S::should_pass_through(ctx) {
            let out = run(stage, input, ctx);
            assert_eq!(out.as_ref(), input, "stage `{}` altered pass-through `{input}`", stage.name());
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                "zero-copy violated by `{}` ({} → {}, input: `{input}`)",
                stage.name(),
                ctx.from,
                ctx.to
            );
        }
    }
}

#[cfg(test)]
pub fn transforms_as_declared<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        for &(input, expected) in S::should_transform(ctx) {
            assert_eq!(
                run(stage, input, ctx).as_ref(),
                expected,
                "stage `{}` ({} → {}) on `{input}`",
                stage.name(),
                ctx.from,
                ctx.to
            );
        }
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    if S::skip_idempotence() {
        return;
    }
    for ctx in S::contexts() {
        for &input in S::samples(ctx) {
            let once = stage.apply(Cow::Borrowed(input), ctx).unwrap().into_owned();
            let twice = stage.apply(Cow::Borrowed(once.as_str()), ctx).unwrap();
            assert_eq!(once, twice, "`{}` not idempotent on `{input}`", stage.name());
        }
    }
}

#[cfg(test)]
pub fn needs_apply_is_sound<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        for &sample in S::samples(ctx).iter().chain(["", "hello", "world123", " !@#"].iter()) {
            if stage.needs_apply(sample, ctx).unwrap() {
                continue;
            }
            let output = stage.apply(Cow::Owned(sample.to_owned()), ctx).unwrap();
            assert_eq!(
                output.as_ref(),
                sample,
                "needs_apply() said no but `{}` changed `{sample}`",
                stage.name()
            );
        }
    }
}

#[cfg(test)]
pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        assert_eq!(run(stage, "", ctx).as_ref(), "");
        let ascii = "hello world 123 !@#";
        let result = stage.apply(Cow::Borrowed(ascii), ctx).unwrap();
        assert_eq!(result.as_ref(), ascii);
    }
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский اردو हिन्दी ਪੰਜਾਬੀ سنڌي \u{200C}\u{0651}\u{093C}"),
            ctx,
        );
    }
}
