//! Lexer errors.
//!
//! Lexing stops at the first malformed token; the parser never sees a
//! partial token list.

use javelin_diagnostic::{Diagnostic, ErrorCode};
use javelin_ir::Span;

/// A lexical error with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {line}:{column}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    /// 1-based column (in chars) of `span.start`.
    pub column: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("source is {len} bytes, larger than the {max} byte limit")]
    SourceTooLarge { len: usize, max: u32 },
}

impl LexError {
    #[cold]
    #[inline(never)]
    pub(crate) fn new(kind: LexErrorKind, span: Span, line: u32, column: u32) -> Self {
        LexError {
            kind,
            span,
            line,
            column,
        }
    }

    /// Classify a logos error by the text logos gave up on.
    #[cold]
    #[inline(never)]
    pub(crate) fn from_slice(slice: &str, span: Span, line: u32, column: u32) -> Self {
        let kind = if slice.starts_with("/*") {
            LexErrorKind::UnterminatedComment
        } else {
            match slice.chars().next() {
                Some('"') => LexErrorKind::UnterminatedString,
                Some('\'') => LexErrorKind::UnterminatedChar,
                Some(c) => LexErrorKind::InvalidCharacter(c),
                None => LexErrorKind::InvalidCharacter('\0'),
            }
        };
        LexError::new(kind, span, line, column)
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::UnterminatedChar => ErrorCode::E0003,
            LexErrorKind::UnterminatedComment => ErrorCode::E0004,
            LexErrorKind::SourceTooLarge { .. } => ErrorCode::E0005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedChar => {
                "literal starts here"
            }
            LexErrorKind::UnterminatedComment => "comment starts here",
            LexErrorKind::InvalidCharacter(_) => "not valid in Java source",
            LexErrorKind::SourceTooLarge { .. } => "file starts here",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_note("string literals cannot span lines")
            }
            LexErrorKind::UnterminatedComment => diag.with_help("close the comment with `*/`"),
            _ => diag,
        }
    }
}
