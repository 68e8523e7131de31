//! Prefix operators, casts and postfix operators.
//!
//! A `(` in unary position is resolved in this order:
//! 1. `(` PrimitiveType `)` is a primitive cast; its operand is any unary
//!    expression, so `(int) -x` is a cast.
//! 2. `(` ReferenceType (`&` ClassType)* `)` followed by a token that can
//!    start a primary, `!` or `~` (or by a lambda) is a reference cast.
//!    `(a) - b` and `(a) + b` stay binary.
//! 3. Anything else is a parenthesized expression.

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use crate::memo::Probe;
use crate::stack::ensure_sufficient_stack;
use crate::stream::TokenStream;
use crate::token_set::CAST_OPERAND_START;
use crate::{ParseError, Parser};

impl<S: TokenStream> Parser<S> {
    /// Prefix operators and cast operands recurse here, so `! ! ! x` nests
    /// one frame per operator.
    pub(crate) fn unary_expression(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.unary_expression_inner())
    }

    fn unary_expression_inner(&mut self) -> Result<Node, ParseError> {
        if let Some(op) = self.match_prefix_op() {
            let mut node = self.start(NodeKind::Unary(op));
            self.bump_into(&mut node)?;
            node.push_node(self.unary_expression()?);
            return Ok(node.finish());
        }
        if self.at(TokenKind::LParen) {
            if self.la(2).is_primitive_type() && self.la(3) == TokenKind::RParen {
                return self.primitive_cast();
            }
            if self.reference_cast_ahead()? {
                return self.reference_cast();
            }
        }
        self.postfix_expression()
    }

    fn reference_cast_ahead(&mut self) -> Result<bool, ParseError> {
        let head = self.la(2);
        let may_be_type = head == TokenKind::Ident
            || head == TokenKind::At
            || (head.is_primitive_type() && self.la(3) == TokenKind::LBracket);
        if !may_be_type || self.paren_lambda_ahead() {
            return Ok(false);
        }
        self.speculate(Probe::ReferenceCast, |p| {
            let mut scratch = p.start(NodeKind::Cast);
            p.cast_head(&mut scratch)?;
            if p.at_any(CAST_OPERAND_START) || p.lambda_ahead() {
                Ok(())
            } else {
                Err(p.unexpected(CAST_OPERAND_START))
            }
        })
    }

    /// `( ReferenceType AdditionalBound* )`
    fn cast_head(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        self.expect(node, TokenKind::LParen)?;
        node.push_node(self.reference_type()?);
        while self.at(TokenKind::Amp) {
            node.push_node(self.additional_bound()?);
        }
        self.expect(node, TokenKind::RParen)
    }

    fn primitive_cast(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Cast);
        self.expect(&mut node, TokenKind::LParen)?;
        let mut ty = self.start(NodeKind::PrimitiveType);
        self.bump_into(&mut ty)?;
        node.push_node(ty.finish());
        self.expect(&mut node, TokenKind::RParen)?;
        node.push_node(self.unary_expression()?);
        Ok(node.finish())
    }

    fn reference_cast(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Cast);
        self.cast_head(&mut node)?;
        let operand = if self.lambda_ahead() {
            self.lambda()?
        } else {
            self.unary_expression()?
        };
        node.push_node(operand);
        Ok(node.finish())
    }

    /// `Primary (++ | --)*`
    fn postfix_expression(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.primary()?;
        while let Some(op) = self.match_postfix_op() {
            let mut node = NodeBuilder::wrapping(NodeKind::Postfix(op), expr);
            self.bump_into(&mut node)?;
            expr = node.finish();
        }
        Ok(expr)
    }
}
