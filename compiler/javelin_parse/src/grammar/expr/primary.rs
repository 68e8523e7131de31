//! Primary expressions and selectors.
//!
//! A dotted name is read as one `Name` node. What follows it decides the
//! rest: `(` makes a method invocation, `.this` / `.super` qualify, and
//! `[]`, `.class` or `<...>::` mean the name was really a type.

use javelin_ir::{LiteralKind, Node, NodeBuilder, NodeKind, TokenKind};

use crate::memo::Probe;
use crate::stream::TokenStream;
use crate::token_set::UNARY_EXPR_START;
use crate::{ParseError, Parser, TokenSet};

const MEMBER_START: TokenSet = TokenSet::of(&[TokenKind::Ident, TokenKind::Lt]);

const TYPE_SUFFIX_START: TokenSet = TokenSet::of(&[TokenKind::Dot, TokenKind::ColonColon]);

impl<S: TokenStream> Parser<S> {
    /// A primary followed by any number of selectors.
    pub(crate) fn primary(&mut self) -> Result<Node, ParseError> {
        let prefix = self.primary_prefix()?;
        self.selectors(prefix)
    }

    fn primary_prefix(&mut self) -> Result<Node, ParseError> {
        let kind = self.la(1);
        if kind.is_literal() {
            return self.literal();
        }
        if kind.is_primitive_type() {
            let ty = self.type_()?;
            return self.type_suffix(ty);
        }
        match kind {
            TokenKind::Ident => self.name_prefix(),
            TokenKind::This => {
                let mut node = self.start(NodeKind::This);
                self.bump_into(&mut node)?;
                Ok(node.finish())
            }
            TokenKind::Super => {
                let mut node = self.start(NodeKind::Super);
                self.bump_into(&mut node)?;
                self.super_suffix(node.finish())
            }
            TokenKind::LParen => self.parenthesized(),
            TokenKind::New => self.creation(),
            TokenKind::Void => {
                let mut node = self.start(NodeKind::ClassLiteral);
                self.bump_into(&mut node)?;
                self.expect(&mut node, TokenKind::Dot)?;
                self.expect(&mut node, TokenKind::Class)?;
                Ok(node.finish())
            }
            _ => Err(self.unexpected(UNARY_EXPR_START)),
        }
    }

    fn literal(&mut self) -> Result<Node, ParseError> {
        let kind = match self.la(1) {
            TokenKind::IntLiteral => LiteralKind::Integer,
            TokenKind::FloatLiteral => LiteralKind::Floating,
            TokenKind::True | TokenKind::False => LiteralKind::Boolean,
            TokenKind::CharLiteral => LiteralKind::Character,
            TokenKind::StringLiteral => LiteralKind::String,
            _ => LiteralKind::Null,
        };
        let mut node = self.start(NodeKind::Literal(kind));
        self.bump_into(&mut node)?;
        Ok(node.finish())
    }

    fn parenthesized(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Parenthesized);
        self.expect(&mut node, TokenKind::LParen)?;
        node.push_node(self.expression()?);
        self.expect(&mut node, TokenKind::RParen)?;
        Ok(node.finish())
    }

    /// Lookahead position of the first token after `Ident (. Ident)*`.
    fn name_end(&self) -> usize {
        let mut k = 2;
        while self.la(k) == TokenKind::Dot && self.la(k + 1) == TokenKind::Ident {
            k += 2;
        }
        k
    }

    /// Cheap token scan run before the `GenericMethodRef` probe, so a plain
    /// relational chain never parses its operands as type arguments.
    fn type_prefix_ahead(&mut self, lt: usize) -> bool {
        let open = self.stream.index() + lt - 1;
        self.memo.may_be_type_prefix(&self.stream, open)
    }

    fn name_prefix(&mut self) -> Result<Node, ParseError> {
        let after = self.name_end();
        match (self.la(after), self.la(after + 1)) {
            (TokenKind::Lt, _) if self.type_prefix_ahead(after) => {
                let is_method_ref = self.speculate(Probe::GenericMethodRef, |p| {
                    p.type_()?;
                    let mut scratch = p.start(NodeKind::MethodReference);
                    p.expect(&mut scratch, TokenKind::ColonColon)
                })?;
                if is_method_ref {
                    let ty = self.type_()?;
                    return self.method_reference(ty);
                }
            }
            (TokenKind::LBracket, TokenKind::RBracket) => {
                let ty = self.type_()?;
                return self.type_suffix(ty);
            }
            (TokenKind::Dot, TokenKind::Class) => {
                let ty = self.class_type()?;
                return self.type_suffix(ty);
            }
            _ => {}
        }

        let name = self.name()?;
        match (self.la(1), self.la(2)) {
            (TokenKind::LParen, _) => {
                let mut node = NodeBuilder::wrapping(NodeKind::MethodInvocation, name);
                node.push_node(self.argument_list()?);
                Ok(node.finish())
            }
            (TokenKind::Dot, TokenKind::This) => {
                let mut node = NodeBuilder::wrapping(NodeKind::This, name);
                self.bump_into(&mut node)?;
                self.bump_into(&mut node)?;
                Ok(node.finish())
            }
            (TokenKind::Dot, TokenKind::Super) => {
                let mut node = NodeBuilder::wrapping(NodeKind::Super, name);
                self.bump_into(&mut node)?;
                self.bump_into(&mut node)?;
                self.super_suffix(node.finish())
            }
            _ => Ok(name),
        }
    }

    /// `.class` or `::` after a type in expression position.
    fn type_suffix(&mut self, ty: Node) -> Result<Node, ParseError> {
        match self.la(1) {
            TokenKind::Dot => {
                let mut node = NodeBuilder::wrapping(NodeKind::ClassLiteral, ty);
                self.bump_into(&mut node)?;
                self.expect(&mut node, TokenKind::Class)?;
                Ok(node.finish())
            }
            TokenKind::ColonColon => self.method_reference(ty),
            _ => Err(self.unexpected(TYPE_SUFFIX_START)),
        }
    }

    /// After `super` or `Name.super`: a field access, method invocation or
    /// method reference.
    fn super_suffix(&mut self, sup: Node) -> Result<Node, ParseError> {
        match self.la(1) {
            TokenKind::Dot => self.member_suffix(sup),
            TokenKind::ColonColon => self.method_reference(sup),
            _ => Err(self.unexpected(TYPE_SUFFIX_START)),
        }
    }

    /// `. TypeArguments? Ident Arguments?` applied to `target`.
    fn member_suffix(&mut self, target: Node) -> Result<Node, ParseError> {
        let mut node = NodeBuilder::wrapping(NodeKind::FieldAccess, target);
        self.expect(&mut node, TokenKind::Dot)?;
        if self.at(TokenKind::Lt) {
            node.set_kind(NodeKind::MethodInvocation);
            node.push_node(self.type_arguments()?);
            self.expect(&mut node, TokenKind::Ident)?;
            node.push_node(self.argument_list()?);
            return Ok(node.finish());
        }
        if !self.at(TokenKind::Ident) {
            return Err(self.unexpected(MEMBER_START.with(TokenKind::New)));
        }
        self.bump_into(&mut node)?;
        if self.at(TokenKind::LParen) {
            node.set_kind(NodeKind::MethodInvocation);
            node.push_node(self.argument_list()?);
        }
        Ok(node.finish())
    }

    /// `:: TypeArguments? (Ident | new)` applied to `target`.
    fn method_reference(&mut self, target: Node) -> Result<Node, ParseError> {
        let allows_new = matches!(
            target.kind(),
            NodeKind::Name | NodeKind::ClassType | NodeKind::ArrayType
        );
        let mut node = NodeBuilder::wrapping(NodeKind::MethodReference, target);
        self.expect(&mut node, TokenKind::ColonColon)?;
        if self.at(TokenKind::Lt) {
            node.push_node(self.type_arguments()?);
        }
        if allows_new && self.at(TokenKind::New) {
            self.bump_into(&mut node)?;
        } else {
            self.expect(&mut node, TokenKind::Ident)?;
        }
        Ok(node.finish())
    }

    /// Field access, method invocation, array access, qualified creation
    /// and method references, repeated.
    fn selectors(&mut self, mut expr: Node) -> Result<Node, ParseError> {
        loop {
            expr = match self.la(1) {
                TokenKind::Dot if self.la(2) == TokenKind::New => self.qualified_creation(expr)?,
                TokenKind::Dot => self.member_suffix(expr)?,
                TokenKind::LBracket if expr.kind() != NodeKind::ArrayCreation => {
                    let mut node = NodeBuilder::wrapping(NodeKind::ArrayAccess, expr);
                    self.bump_into(&mut node)?;
                    node.push_node(self.expression()?);
                    self.expect(&mut node, TokenKind::RBracket)?;
                    node.finish()
                }
                TokenKind::ColonColon => self.method_reference(expr)?,
                _ => return Ok(expr),
            };
        }
    }
}
