//! Token stream contract.
//!
//! The parser reads tokens through [`TokenStream`] so callers can bring
//! their own token source. [`Cursor`] is the implementation over a lexed
//! [`TokenList`](javelin_ir::TokenList).

mod cursor;

pub use cursor::Cursor;

use javelin_ir::{Token, TokenKind};

use crate::ParseError;

/// A saved stream position.
///
/// Only valid on the stream that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    pub(crate) stream_id: u32,
    pub(crate) index: usize,
}

impl Checkpoint {
    /// Token index this checkpoint points at.
    pub fn index(self) -> usize {
        self.index
    }
}

/// Read access to a token sequence ending in `Eof`, with O(1) rollback.
pub trait TokenStream {
    /// Kind of the token `k` positions ahead; `la(1)` is the current token.
    /// Past the end of the sequence this is `Eof`.
    fn la(&self, k: usize) -> TokenKind;

    /// Like [`la`](Self::la), returning the full token.
    fn lt(&self, k: usize) -> Token;

    /// Return the current token and advance past it.
    ///
    /// Fails with `EndOfInput` at `Eof`; the cursor never moves past the
    /// sentinel.
    fn consume(&mut self) -> Result<Token, ParseError>;

    fn mark(&self) -> Checkpoint;

    /// Rewind (or fast-forward) to `checkpoint`.
    fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), ParseError>;

    /// Absolute index of the current token.
    fn index(&self) -> usize;

    /// Number of tokens, including the `Eof` sentinel.
    fn token_count(&self) -> usize;

    /// Kind at an absolute index (`Eof` when out of range).
    fn kind_at(&self, index: usize) -> TokenKind;
}

#[cfg(test)]
mod tests;
