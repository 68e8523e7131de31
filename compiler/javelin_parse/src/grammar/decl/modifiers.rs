//! Modifiers and annotations.

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use crate::stream::TokenStream;
use crate::token_set::MODIFIER_KEYWORDS;
use crate::{ParseError, Parser};

impl<S: TokenStream> Parser<S> {
    /// `(ModifierKeyword | Annotation)*`. Always returns a node, empty when
    /// there are no modifiers.
    pub(crate) fn modifiers(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Modifiers);
        loop {
            if self.at_any(MODIFIER_KEYWORDS) {
                self.bump_into(&mut node)?;
            } else if self.annotation_ahead() {
                node.push_node(self.annotation()?);
            } else {
                return Ok(node.finish());
            }
        }
    }

    /// Modifiers allowed on locals, parameters, resources and catch
    /// parameters: `final` and annotations.
    pub(crate) fn variable_modifiers(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Modifiers);
        loop {
            if self.at(TokenKind::Final) {
                self.bump_into(&mut node)?;
            } else if self.annotation_ahead() {
                node.push_node(self.annotation()?);
            } else {
                return Ok(node.finish());
            }
        }
    }

    /// `@` that starts an annotation rather than `@interface`.
    #[inline]
    fn annotation_ahead(&self) -> bool {
        self.at(TokenKind::At) && self.la(2) != TokenKind::Interface
    }

    /// Push every annotation at the cursor into `node`.
    pub(crate) fn annotations(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        while self.annotation_ahead() {
            node.push_node(self.annotation()?);
        }
        Ok(())
    }

    /// `@ Name ( ( ElementValuePairs | ElementValue )? )?`
    pub(crate) fn annotation(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Annotation);
        self.expect(&mut node, TokenKind::At)?;
        node.push_node(self.name()?);
        if !self.eat(&mut node, TokenKind::LParen)? {
            return Ok(node.finish());
        }
        if self.at(TokenKind::Ident) && self.la(2) == TokenKind::Eq {
            loop {
                node.push_node(self.element_value_pair()?);
                if !self.eat(&mut node, TokenKind::Comma)? {
                    break;
                }
            }
        } else if !self.at(TokenKind::RParen) {
            node.push_node(self.element_value()?);
        }
        self.expect(&mut node, TokenKind::RParen)?;
        Ok(node.finish())
    }

    fn element_value_pair(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ElementValuePair);
        self.expect(&mut node, TokenKind::Ident)?;
        self.expect(&mut node, TokenKind::Eq)?;
        node.push_node(self.element_value()?);
        Ok(node.finish())
    }

    /// An annotation, a `{ ... }` array of element values, or a conditional
    /// expression.
    pub(crate) fn element_value(&mut self) -> Result<Node, ParseError> {
        match self.la(1) {
            TokenKind::At => self.annotation(),
            TokenKind::LBrace => self.element_value_array(),
            _ => self.conditional_expression(),
        }
    }

    fn element_value_array(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ElementValueArrayInitializer);
        self.expect(&mut node, TokenKind::LBrace)?;
        while !self.at(TokenKind::RBrace) {
            node.push_node(self.element_value()?);
            if !self.eat(&mut node, TokenKind::Comma)? {
                break;
            }
        }
        self.expect(&mut node, TokenKind::RBrace)?;
        Ok(node.finish())
    }
}
