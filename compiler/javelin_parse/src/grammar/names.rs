//! Dotted names.

use javelin_ir::{Node, NodeKind, TokenKind};

use crate::stream::TokenStream;
use crate::{ParseError, Parser};

impl<S: TokenStream> Parser<S> {
    /// `Ident (. Ident)*`, flattened into one `Name` node.
    ///
    /// Stops before a `.` that is not followed by an identifier, so
    /// `a.b.class`, `a.this` and `a.<T>m()` leave the dot for the caller.
    pub(crate) fn name(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Name);
        self.expect(&mut node, TokenKind::Ident)?;
        while self.at(TokenKind::Dot) && self.la(2) == TokenKind::Ident {
            self.bump_into(&mut node)?;
            self.bump_into(&mut node)?;
        }
        Ok(node.finish())
    }
}
