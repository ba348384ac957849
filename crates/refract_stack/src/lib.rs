//! Stack growth guard for recursive type-graph walks.
//!
//! Empty-value synthesis recurses once per nesting level of the type graph
//! it builds. The default depth cap keeps that shallow, but callers may raise
//! it, and a raised cap over wide classes can go deep quickly. Wrapping each
//! recursive step in [`ensure_sufficient_stack`] keeps those walks from
//! overflowing the thread's stack.
//!
//! On native targets this defers to `stacker`; on WASM the closure runs
//! directly.

/// Remaining stack below which a new segment is allocated (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn synthesize(&mut self, ty: &TypeRef, level: usize) -> Option<Value> {
///     ensure_sufficient_stack(|| self.synthesize_inner(ty, level))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` as is.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
