//! Stack growth for the two recursive walks.
//!
//! Tree construction and evaluation both recurse once per tree level, and
//! nothing bounds how deeply an expression may nest. Each recursion step
//! goes through [`ensure_sufficient_stack`], which grows the stack with
//! `stacker` instead of overflowing.

/// Remaining stack below which a new segment is allocated.
const MIN_REMAINING: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f` on a fresh stack segment when fewer than [`MIN_REMAINING`] bytes are left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
}

/// On `wasm32` the runtime owns the stack, so `f` runs in place.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
