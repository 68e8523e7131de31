//! Token list produced by the lexer.

use std::fmt;
use std::ops::Index;

use super::{Token, TokenKind};
use crate::Span;

/// An ordered, immutable token sequence plus the source text it came from.
///
/// Includes a parallel `tags` array of `u8` discriminant indices so that
/// scans over token kinds (delimiter matching, FIRST-set checks) read one
/// byte per token.
///
/// A list built by the lexer always ends with exactly one `Eof` token whose
/// span is the zero-width point at the end of the source.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `tags[i] == tokens[i].kind.discriminant_index()` for all `i`.
    tags: Vec<u8>,
    source: String,
}

impl TokenList {
    /// Create an empty list over `source`.
    pub fn new(source: impl Into<String>) -> Self {
        TokenList {
            tokens: Vec::new(),
            tags: Vec::new(),
            source: source.into(),
        }
    }

    /// Build a list from already-lexed tokens, appending the `Eof` sentinel
    /// when the last token is not one already.
    pub fn from_tokens(source: impl Into<String>, tokens: Vec<Token>) -> Self {
        let mut list = TokenList::new(source);
        list.tokens.reserve(tokens.len() + 1);
        for token in tokens {
            list.push(token);
        }
        if list.last_kind() != Some(TokenKind::Eof) {
            list.push_eof();
        }
        list
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tags.push(token.kind.discriminant_index());
        self.tokens.push(token);
    }

    /// Append the `Eof` sentinel at the end of the source.
    pub fn push_eof(&mut self) {
        let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        let (line, column) = self
            .tokens
            .last()
            .map_or((1, 1), |last| (last.line, last.column));
        let trailing = self.source.get(last_start(&self.tokens)..).unwrap_or("");
        let (line, column) = advance_position(line, column, trailing);
        self.push(Token::new(TokenKind::Eof, Span::point(end), line, column));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Dense discriminant tags, parallel to the tokens.
    #[inline]
    pub fn tags(&self) -> &[u8] {
        &self.tags
    }

    /// The source text the tokens were lexed from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source text covered by `span`, or `""` if the span is out of range.
    pub fn text(&self, span: Span) -> &str {
        self.source.get(span.to_range()).unwrap_or("")
    }

    fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|t| t.kind)
    }
}

fn last_start(tokens: &[Token]) -> usize {
    tokens.last().map_or(0, |t| t.span.start as usize)
}

/// Walk `line`/`column` from the start of the last token across `text`.
fn advance_position(mut line: u32, mut column: u32, text: &str) -> (u32, u32) {
    for c in text.chars() {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
