//! Grammar rules.
//!
//! Each rule is a `Parser` method returning the finished node. On success
//! the rule consumed exactly its production; on failure the cursor position
//! is unspecified, so callers that need rollback go through a probe.
//!
//! - `names.rs`: dotted names
//! - `ty.rs`: types, type arguments, type parameters, dimensions
//! - `expr/`: expressions and precedence climbing
//! - `stmt/`: blocks and statements
//! - `decl/`: compilation units, type and member declarations, modifiers

pub(crate) mod decl;
pub(crate) mod expr;
mod names;
mod stmt;
mod ty;

use javelin_ir::{NodeBuilder, NodeKind, TokenKind, TokenRef};

use crate::stream::TokenStream;
use crate::{ParseError, Parser, TokenSet};

impl<S: TokenStream> Parser<S> {
    #[inline]
    pub(crate) fn la(&self, k: usize) -> TokenKind {
        self.stream.la(k)
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.stream.la(1) == kind
    }

    #[inline]
    pub(crate) fn at_any(&self, set: TokenSet) -> bool {
        set.contains(self.stream.la(1))
    }

    /// Begin a node at the current token.
    #[inline]
    pub(crate) fn start(&self, kind: NodeKind) -> NodeBuilder {
        NodeBuilder::new(kind, self.stream.lt(1).span.start)
    }

    /// Consume the current token.
    pub(crate) fn bump(&mut self) -> Result<TokenRef, ParseError> {
        self.charge_speculation()?;
        Ok(TokenRef::from(self.stream.consume()?))
    }

    /// Consume the current token into `node`.
    #[inline]
    pub(crate) fn bump_into(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        let token = self.bump()?;
        node.push_token(token);
        Ok(())
    }

    /// Consume `kind` into `node` or fail expecting it.
    pub(crate) fn expect(&mut self, node: &mut NodeBuilder, kind: TokenKind) -> Result<(), ParseError> {
        if self.at(kind) {
            self.bump_into(node)
        } else {
            Err(self.unexpected(TokenSet::single(kind)))
        }
    }

    /// Consume `kind` into `node` if it is next.
    pub(crate) fn eat(&mut self, node: &mut NodeBuilder, kind: TokenKind) -> Result<bool, ParseError> {
        if self.at(kind) {
            self.bump_into(node)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Error for the current token, expecting `expected`.
    #[cold]
    #[inline(never)]
    pub(crate) fn unexpected(&self, expected: TokenSet) -> ParseError {
        ParseError::unexpected(expected, self.stream.lt(1), self.stream.index())
    }

    /// Whether the `(` at the current token closes with a `)` that is
    /// directly followed by `->`.
    pub(crate) fn paren_lambda_ahead(&mut self) -> bool {
        if !self.at(TokenKind::LParen) {
            return false;
        }
        let open = self.stream.index();
        self.memo
            .matching_close(&self.stream, open)
            .is_some_and(|close| self.stream.kind_at(close + 1) == TokenKind::Arrow)
    }

    /// Whether a lambda expression starts at the current token.
    pub(crate) fn lambda_ahead(&mut self) -> bool {
        (self.at(TokenKind::Ident) && self.la(2) == TokenKind::Arrow) || self.paren_lambda_ahead()
    }
}
