//! Cursor over a lexed token list.

use std::sync::atomic::{AtomicU32, Ordering};

use javelin_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use super::{Checkpoint, TokenStream};
use crate::{ParseError, TokenSet};

/// Process-wide source of stream identities, so a checkpoint taken on one
/// cursor is rejected by every other.
static NEXT_STREAM_ID: AtomicU32 = AtomicU32::new(1);

/// Cursor for navigating a [`TokenList`].
///
/// Reads kinds from the list's dense `u8` tag array for lookahead scans and
/// touches the full token only when one is consumed.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    tags: &'a [u8],
    pos: usize,
    stream_id: u32,
    /// Returned for lookahead past the end, and for lists built without a
    /// trailing sentinel.
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        let eof = match tokens.as_slice().last() {
            Some(last) if last.kind == TokenKind::Eof => *last,
            _ => {
                let end = u32::try_from(tokens.source().len()).unwrap_or(u32::MAX);
                Token::new(TokenKind::Eof, Span::point(end), 1, 1)
            }
        };
        Cursor {
            tokens,
            tags: tokens.tags(),
            pos: 0,
            stream_id: NEXT_STREAM_ID.fetch_add(1, Ordering::Relaxed),
            eof,
        }
    }

    /// The token list this cursor reads.
    pub fn tokens(&self) -> &'a TokenList {
        self.tokens
    }

    /// Positions a checkpoint may point at: every real token, and index 0
    /// on an empty list.
    #[inline]
    fn last_valid_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }
}

impl TokenStream for Cursor<'_> {
    #[inline]
    fn la(&self, k: usize) -> TokenKind {
        debug_assert!(k >= 1, "lookahead is 1-based");
        let index = self.pos + k.saturating_sub(1);
        self.kind_at(index)
    }

    #[inline]
    fn lt(&self, k: usize) -> Token {
        let index = self.pos + k.saturating_sub(1);
        self.tokens.get(index).copied().unwrap_or(self.eof)
    }

    fn consume(&mut self) -> Result<Token, ParseError> {
        let token = self.lt(1);
        if token.kind == TokenKind::Eof {
            return Err(ParseError::unexpected(TokenSet::new(), token, self.pos));
        }
        trace!(index = self.pos, kind = ?token.kind, "consume");
        self.pos += 1;
        Ok(token)
    }

    #[inline]
    fn mark(&self) -> Checkpoint {
        Checkpoint {
            stream_id: self.stream_id,
            index: self.pos,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), ParseError> {
        if checkpoint.stream_id != self.stream_id || checkpoint.index > self.last_valid_index() {
            return Err(ParseError::invalid_checkpoint(self.lt(1).span, self.pos));
        }
        trace!(from = self.pos, to = checkpoint.index, "restore");
        self.pos = checkpoint.index;
        Ok(())
    }

    #[inline]
    fn index(&self) -> usize {
        self.pos
    }

    #[inline]
    fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    fn kind_at(&self, index: usize) -> TokenKind {
        self.tags
            .get(index)
            .and_then(|&tag| TokenKind::from_discriminant_index(tag))
            .unwrap_or(TokenKind::Eof)
    }
}
