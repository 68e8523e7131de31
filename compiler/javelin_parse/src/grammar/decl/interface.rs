//! Interface and annotation type declarations.

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use super::member::MemberContext;
use crate::stack::ensure_sufficient_stack;
use crate::stream::TokenStream;
use crate::{ParseError, Parser};

impl<S: TokenStream> Parser<S> {
    /// `interface Ident TypeParameters? ExtendsInterfaces? InterfaceBody`
    /// after the modifiers.
    pub(crate) fn interface_declaration_rest(
        &mut self,
        modifiers: Node,
    ) -> Result<Node, ParseError> {
        let mut node = NodeBuilder::wrapping(NodeKind::InterfaceDeclaration, modifiers);
        self.expect(&mut node, TokenKind::Interface)?;
        self.expect(&mut node, TokenKind::Ident)?;
        if self.at(TokenKind::Lt) {
            node.push_node(self.type_parameters()?);
        }
        if self.at(TokenKind::Extends) {
            let mut extends = self.start(NodeKind::ExtendsInterfaces);
            self.bump_into(&mut extends)?;
            self.class_type_list(&mut extends)?;
            node.push_node(extends.finish());
        }
        node.push_node(self.type_body(NodeKind::InterfaceBody, MemberContext::Interface)?);
        Ok(node.finish())
    }

    /// `@ interface Ident AnnotationTypeBody` after the modifiers.
    pub(crate) fn annotation_type_declaration_rest(
        &mut self,
        modifiers: Node,
    ) -> Result<Node, ParseError> {
        let mut node = NodeBuilder::wrapping(NodeKind::AnnotationTypeDeclaration, modifiers);
        self.expect(&mut node, TokenKind::At)?;
        self.expect(&mut node, TokenKind::Interface)?;
        self.expect(&mut node, TokenKind::Ident)?;
        node.push_node(self.type_body(NodeKind::AnnotationTypeBody, MemberContext::Annotation)?);
        Ok(node.finish())
    }

    fn type_body(&mut self, kind: NodeKind, context: MemberContext) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            let mut node = self.start(kind);
            self.expect(&mut node, TokenKind::LBrace)?;
            self.member_declarations(&mut node, context)?;
            self.expect(&mut node, TokenKind::RBrace)?;
            Ok(node.finish())
        })
    }
}
