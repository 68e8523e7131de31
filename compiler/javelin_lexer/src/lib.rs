//! Java 8 lexer for Javelin.
//!
//! Produces a `TokenList` terminated by exactly one `Eof` token. Trivia
//! (whitespace and comments) is dropped. Reserved words are resolved from
//! identifiers after the logos pass.
//!
//! Shift operators are never produced: `>>` lexes as two `Gt` tokens so the
//! parser can close nested type argument lists one `>` at a time. The
//! compound assignments `<<=`, `>>=` and `>>>=` are single tokens.

mod lex_error;
mod raw_token;

use javelin_ir::{Span, Token, TokenList};
use logos::Logos;
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Tracks 1-based line and column as the lexer moves forward.
///
/// Columns count chars, not bytes.
struct LineTracker<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> LineTracker<'a> {
    fn new(source: &'a str) -> Self {
        LineTracker {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Move to `target` (never backwards) and return its line and column.
    fn advance_to(&mut self, target: usize) -> (u32, u32) {
        if target > self.offset {
            for c in self.source.get(self.offset..target).unwrap_or("").chars() {
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = target;
        }
        (self.line, self.column)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "source length is checked against u32::MAX before lexing"
)]
fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::new(range.start as u32, range.end as u32)
}

/// Lex a complete Java source file.
///
/// Stops at the first malformed token.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::new(
            LexErrorKind::SourceTooLarge {
                len: source.len(),
                max: u32::MAX,
            },
            Span::DUMMY,
            1,
            1,
        ));
    }

    let mut list = TokenList::new(source);
    let mut lines = LineTracker::new(source);
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let (line, column) = lines.advance_to(range.start);
        let span = to_span(range);
        match result {
            Ok(raw) => {
                if let Some(kind) = raw.to_kind(lexer.slice()) {
                    list.push(Token::new(kind, span, line, column));
                }
            }
            Err(()) => {
                return Err(LexError::from_slice(
                    source.get(span.to_range()).unwrap_or(""),
                    span,
                    line,
                    column,
                ));
            }
        }
    }

    list.push_eof();
    debug!(tokens = list.len(), bytes = source.len(), "lexed");
    Ok(list)
}
