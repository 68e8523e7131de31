//! Shared data types for the Javelin Java front end.
//!
//! This crate contains the data structures every other Javelin crate speaks:
//! - Spans for source locations
//! - Tokens, token kinds, and the `TokenList` the lexer produces
//! - The concrete syntax tree (`Node`, `NodeKind`, `NodeBuilder`)
//! - Operator payloads carried by expression nodes
//!
//! # Design Philosophy
//!
//! - **Tokens are values**: `Token` and `TokenKind` are `Copy`; nodes keep a
//!   `TokenRef` copy instead of pointing back into the token list.
//! - **Trees are owned**: a `Node` owns its children outright, there are no
//!   parent pointers and no sharing between subtrees.
//! - **Frozen after build**: nodes are only constructed through
//!   `NodeBuilder::finish` and expose read-only accessors.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
pub mod syntax;
mod token;

pub use span::Span;
pub use syntax::{
    AssignOp, BinaryOp, Child, LiteralKind, Node, NodeBuilder, NodeKind, PostfixOp, TokenRef,
    UnaryOp, WalkEvent,
};
pub use token::{Token, TokenKind, TokenList};
