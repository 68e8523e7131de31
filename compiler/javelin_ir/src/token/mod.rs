//! Token types shared by the lexer and the parser.
//!
//! The lexer produces a [`TokenList`]; the parser reads it through a cursor.
//! Shift operators `<<`, `>>` and `>>>` never appear as tokens: the lexer
//! always emits single `<` / `>` tokens and the expression parser recombines
//! them, so that nested type-argument lists close one `>` at a time.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A token with its location in the source.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32, column: u32) -> Self {
        Token {
            kind,
            span,
            line,
            column,
        }
    }

    /// Create a token with no meaningful location, for tests and synthesized
    /// streams.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {} ({}:{})",
            self.kind, self.span, self.line, self.column
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    crate::static_assert_size!(Token, 20);
}
