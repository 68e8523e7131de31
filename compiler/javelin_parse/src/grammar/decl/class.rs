//! Class and enum declarations.

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use super::member::MemberContext;
use crate::stack::ensure_sufficient_stack;
use crate::stream::TokenStream;
use crate::{ParseError, Parser};

impl<S: TokenStream> Parser<S> {
    /// `class Ident TypeParameters? Superclass? Superinterfaces? ClassBody`
    /// after the modifiers.
    pub(crate) fn class_declaration_rest(&mut self, modifiers: Node) -> Result<Node, ParseError> {
        let mut node = NodeBuilder::wrapping(NodeKind::ClassDeclaration, modifiers);
        self.expect(&mut node, TokenKind::Class)?;
        self.expect(&mut node, TokenKind::Ident)?;
        if self.at(TokenKind::Lt) {
            node.push_node(self.type_parameters()?);
        }
        if self.at(TokenKind::Extends) {
            let mut superclass = self.start(NodeKind::Superclass);
            self.bump_into(&mut superclass)?;
            superclass.push_node(self.class_type()?);
            node.push_node(superclass.finish());
        }
        if self.at(TokenKind::Implements) {
            node.push_node(self.superinterfaces()?);
        }
        node.push_node(self.class_body()?);
        Ok(node.finish())
    }

    /// `implements ClassType (, ClassType)*`
    fn superinterfaces(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Superinterfaces);
        self.expect(&mut node, TokenKind::Implements)?;
        self.class_type_list(&mut node)?;
        Ok(node.finish())
    }

    /// `{ ClassBodyDeclaration* }`
    pub(crate) fn class_body(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            let mut node = self.start(NodeKind::ClassBody);
            self.expect(&mut node, TokenKind::LBrace)?;
            self.member_declarations(&mut node, MemberContext::Class)?;
            self.expect(&mut node, TokenKind::RBrace)?;
            Ok(node.finish())
        })
    }

    /// `enum Ident Superinterfaces? EnumBody` after the modifiers.
    pub(crate) fn enum_declaration_rest(&mut self, modifiers: Node) -> Result<Node, ParseError> {
        let mut node = NodeBuilder::wrapping(NodeKind::EnumDeclaration, modifiers);
        self.expect(&mut node, TokenKind::Enum)?;
        self.expect(&mut node, TokenKind::Ident)?;
        if self.at(TokenKind::Implements) {
            node.push_node(self.superinterfaces()?);
        }
        node.push_node(self.enum_body()?);
        Ok(node.finish())
    }

    /// `{ EnumConstants? ,? (; ClassBodyDeclaration*)? }`
    fn enum_body(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            let mut node = self.start(NodeKind::EnumBody);
            self.expect(&mut node, TokenKind::LBrace)?;
            while matches!(self.la(1), TokenKind::Ident | TokenKind::At) {
                node.push_node(self.enum_constant()?);
                if !self.eat(&mut node, TokenKind::Comma)? {
                    break;
                }
            }
            if self.eat(&mut node, TokenKind::Semi)? {
                self.member_declarations(&mut node, MemberContext::Class)?;
            }
            self.expect(&mut node, TokenKind::RBrace)?;
            Ok(node.finish())
        })
    }

    /// `Annotation* Ident Arguments? ClassBody?`
    fn enum_constant(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::EnumConstant);
        self.annotations(&mut node)?;
        self.expect(&mut node, TokenKind::Ident)?;
        if self.at(TokenKind::LParen) {
            node.push_node(self.argument_list()?);
        }
        if self.at(TokenKind::LBrace) {
            node.push_node(self.class_body()?);
        }
        Ok(node.finish())
    }
}
