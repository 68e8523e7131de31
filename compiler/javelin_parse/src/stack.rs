//! Stack growth for deeply nested input.
//!
//! Nesting depth in Java source is unbounded (`((((x))))`, long `else if`
//! chains, nested anonymous classes), and every level costs several frames
//! of recursive descent. The recursive entry points of the grammar
//! (`expression`, `unary_expression`, `type_arguments`, `statement`,
//! `block`, `class_body`) run inside [`ensure_sufficient_stack`], which
//! grows the stack on native targets when less than [`RED_ZONE`] remains.
//! WASM manages its own stack, so there it is a passthrough.

/// Grow when less than this much stack remains (100KB).
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
pub const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is nearly exhausted.
#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
