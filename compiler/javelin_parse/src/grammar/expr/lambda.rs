//! Lambda expressions.
//!
//! Callers decide a lambda starts with [`Parser::lambda_ahead`]; the
//! parameter form is then chosen from the tokens inside the parentheses.

use javelin_ir::{Node, NodeKind, TokenKind};

use crate::stream::TokenStream;
use crate::{ParseError, Parser};

impl<S: TokenStream> Parser<S> {
    /// `LambdaParameters -> (Expression | Block)`
    pub(crate) fn lambda(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Lambda);
        node.push_node(self.lambda_parameters()?);
        self.expect(&mut node, TokenKind::Arrow)?;
        let body = if self.at(TokenKind::LBrace) {
            self.block()?
        } else {
            self.expression()?
        };
        node.push_node(body);
        Ok(node.finish())
    }

    /// `Ident`, `( )`, `( Ident (, Ident)* )` or `( FormalParameterList )`.
    fn lambda_parameters(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::LambdaParameters);
        if self.at(TokenKind::Ident) {
            self.bump_into(&mut node)?;
            return Ok(node.finish());
        }
        self.expect(&mut node, TokenKind::LParen)?;
        let inferred = self.at(TokenKind::Ident)
            && matches!(self.la(2), TokenKind::Comma | TokenKind::RParen);
        if inferred {
            loop {
                self.expect(&mut node, TokenKind::Ident)?;
                if !self.eat(&mut node, TokenKind::Comma)? {
                    break;
                }
            }
        } else if !self.at(TokenKind::RParen) {
            self.formal_parameter_list(&mut node)?;
        }
        self.expect(&mut node, TokenKind::RParen)?;
        Ok(node.finish())
    }
}
