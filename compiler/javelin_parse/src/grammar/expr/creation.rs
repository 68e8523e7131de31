//! `new` expressions and array initializers.

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use crate::stream::TokenStream;
use crate::{ParseError, Parser};

impl<S: TokenStream> Parser<S> {
    /// `new TypeArguments? Type (Arguments ClassBody? | DimExprs Dims? | Dims ArrayInitializer)`
    pub(crate) fn creation(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ClassInstanceCreation);
        self.expect(&mut node, TokenKind::New)?;
        if self.at(TokenKind::Lt) {
            node.push_node(self.type_arguments()?);
        }
        let mut ty = self.start(NodeKind::ClassType);
        self.annotations(&mut ty)?;
        let ty = self.finish_non_array_type(ty, true)?;
        let is_array = ty.kind() == NodeKind::PrimitiveType || self.at(TokenKind::LBracket);
        node.push_node(ty);
        if is_array {
            return self.array_creation_rest(node);
        }
        self.instance_creation_rest(node)
    }

    /// `. new TypeArguments? ClassType Arguments ClassBody?` applied to an
    /// enclosing instance.
    pub(crate) fn qualified_creation(&mut self, outer: Node) -> Result<Node, ParseError> {
        let mut node = NodeBuilder::wrapping(NodeKind::ClassInstanceCreation, outer);
        self.expect(&mut node, TokenKind::Dot)?;
        self.expect(&mut node, TokenKind::New)?;
        if self.at(TokenKind::Lt) {
            node.push_node(self.type_arguments()?);
        }
        node.push_node(self.creation_class_type()?);
        self.instance_creation_rest(node)
    }

    fn instance_creation_rest(&mut self, mut node: NodeBuilder) -> Result<Node, ParseError> {
        node.push_node(self.argument_list()?);
        if self.at(TokenKind::LBrace) {
            node.push_node(self.class_body()?);
        }
        Ok(node.finish())
    }

    fn array_creation_rest(&mut self, mut node: NodeBuilder) -> Result<Node, ParseError> {
        node.set_kind(NodeKind::ArrayCreation);
        if self.dims_ahead()? {
            node.push_node(self.dims()?);
            node.push_node(self.array_initializer()?);
            return Ok(node.finish());
        }
        loop {
            let mut dim = self.start(NodeKind::DimExpr);
            self.expect(&mut dim, TokenKind::LBracket)?;
            dim.push_node(self.expression()?);
            self.expect(&mut dim, TokenKind::RBracket)?;
            node.push_node(dim.finish());
            if !(self.at(TokenKind::LBracket) && self.la(2) != TokenKind::RBracket) {
                break;
            }
        }
        if self.dims_ahead()? {
            node.push_node(self.dims()?);
        }
        Ok(node.finish())
    }

    /// `{ (VariableInitializer (, VariableInitializer)*)? ,? }`
    pub(crate) fn array_initializer(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ArrayInitializer);
        self.expect(&mut node, TokenKind::LBrace)?;
        while !self.at(TokenKind::RBrace) {
            node.push_node(self.variable_initializer()?);
            if !self.eat(&mut node, TokenKind::Comma)? {
                break;
            }
        }
        self.expect(&mut node, TokenKind::RBrace)?;
        Ok(node.finish())
    }

    /// An array initializer or an expression.
    pub(crate) fn variable_initializer(&mut self) -> Result<Node, ParseError> {
        if self.at(TokenKind::LBrace) {
            self.array_initializer()
        } else {
            self.expression()
        }
    }
}
