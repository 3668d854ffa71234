//! Stack growth for the two recursive walks over the tree.
//!
//! `Folder::fold` recurses once per nested expression and once per chased
//! reference, and every local it meets starts a `ReachingWalk` that recurses
//! once per enclosing statement. Both walks run their per-node step through
//! [`with_nesting_stack`]; `EvalLimits::max_depth` bounds the fold, and the
//! tree's own nesting bounds the reaching walk.

/// Headroom kept below the current frame before a nested step runs.
#[cfg(not(target_arch = "wasm32"))]
const NESTING_HEADROOM: usize = 128 * 1024;

/// Size of each fresh segment when the headroom runs out.
#[cfg(not(target_arch = "wasm32"))]
const NESTING_SEGMENT: usize = 1024 * 1024;

/// Run one nested walk step, on a fresh stack segment if the current one
/// is nearly exhausted. `stacker` is unavailable on wasm, where the step
/// runs in place.
#[inline]
pub(crate) fn with_nesting_stack<R>(step: impl FnOnce() -> R) -> R {
    #[cfg(not(target_arch = "wasm32"))]
    {
        stacker::maybe_grow(NESTING_HEADROOM, NESTING_SEGMENT, step)
    }
    #[cfg(target_arch = "wasm32")]
    {
        step()
    }
}
