//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point, assignment, conditional and precedence climbing
//! - `operators.rs`: precedence table and operator matching helpers
//! - `unary.rs`: prefix operators, casts, postfix operators
//! - `primary.rs`: literals, names, `this`/`super`, selectors
//! - `creation.rs`: `new` expressions and array initializers
//! - `lambda.rs`: lambda expressions

mod creation;
mod lambda;
pub(crate) mod operators;
mod primary;
mod unary;

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use crate::stack::ensure_sufficient_stack;
use crate::stream::TokenStream;
use crate::{ParseError, Parser, TokenSet};
use operators::InfixOp;

impl<S: TokenStream> Parser<S> {
    /// `Lambda | ConditionalExpression (AssignmentOperator Expression)?`
    pub fn expression(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.expression_inner())
    }

    fn expression_inner(&mut self) -> Result<Node, ParseError> {
        if self.lambda_ahead() {
            return self.lambda();
        }
        let lhs = self.conditional_expression()?;
        let Some(op) = self.match_assign_op() else {
            return Ok(lhs);
        };
        if !lhs.kind().is_assignable() {
            return Err(self
                .unexpected(TokenSet::new())
                .with_context("the left-hand side of an assignment must be a variable"));
        }
        let mut node = NodeBuilder::wrapping(NodeKind::Assign(op), lhs);
        self.bump_into(&mut node)?;
        node.push_node(self.expression()?);
        Ok(node.finish())
    }

    /// `Binary (? Expression : (Lambda | ConditionalExpression))?`
    pub(crate) fn conditional_expression(&mut self) -> Result<Node, ParseError> {
        let condition = self.binary_expression(1)?;
        if !self.at(TokenKind::Question) {
            return Ok(condition);
        }
        let mut node = NodeBuilder::wrapping(NodeKind::Conditional, condition);
        self.bump_into(&mut node)?;
        node.push_node(self.expression()?);
        self.expect(&mut node, TokenKind::Colon)?;
        let otherwise = if self.lambda_ahead() {
            self.lambda()?
        } else {
            self.conditional_expression()?
        };
        node.push_node(otherwise);
        Ok(node.finish())
    }

    /// Precedence climbing over binary levels `min_level..=10`.
    ///
    /// Every level is left-associative: the right operand is parsed one
    /// level higher, so `a - b - c` groups as `(a - b) - c`.
    pub(crate) fn binary_expression(&mut self, min_level: u8) -> Result<Node, ParseError> {
        let mut left = self.unary_expression()?;
        while let Some((info, width)) = self.match_infix() {
            if info.level < min_level {
                break;
            }
            left = match info.op {
                InfixOp::InstanceOf => {
                    let mut node = NodeBuilder::wrapping(NodeKind::InstanceOf, left);
                    self.bump_into(&mut node)?;
                    node.push_node(self.reference_type()?);
                    node.finish()
                }
                InfixOp::Binary(op) => {
                    let mut node = NodeBuilder::wrapping(NodeKind::Binary(op), left);
                    for _ in 0..width {
                        self.bump_into(&mut node)?;
                    }
                    node.push_node(self.binary_expression(info.level + 1)?);
                    node.finish()
                }
            };
        }
        Ok(left)
    }

    /// `( Expression (, Expression)* )?` wrapped in parentheses.
    pub(crate) fn argument_list(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ArgumentList);
        self.expect(&mut node, TokenKind::LParen)?;
        if !self.at(TokenKind::RParen) {
            loop {
                node.push_node(self.expression()?);
                if !self.eat(&mut node, TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(&mut node, TokenKind::RParen)?;
        Ok(node.finish())
    }
}
