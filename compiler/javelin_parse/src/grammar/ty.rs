//! Types.
//!
//! Type rules are separate entry points from expression rules, so `<` here
//! always opens a type argument list. Each list closes on exactly one `>`
//! token; the lexer never produces `>>`, so `List<List<T>>` needs no
//! token splitting.

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use crate::memo::Probe;
use crate::stack::ensure_sufficient_stack;
use crate::stream::TokenStream;
use crate::token_set::PRIMITIVE_TYPES;
use crate::{ParseError, Parser, TokenSet};

impl<S: TokenStream> Parser<S> {
    /// `Annotation* (PrimitiveType | ClassType) Dims?`
    pub(crate) fn type_(&mut self) -> Result<Node, ParseError> {
        let base = self.non_array_type()?;
        self.array_suffix(base)
    }

    /// A type that is not a bare primitive: a class type, or a primitive
    /// type with dimensions.
    pub(crate) fn reference_type(&mut self) -> Result<Node, ParseError> {
        let ty = self.type_()?;
        if ty.kind() == NodeKind::PrimitiveType {
            return Err(self.unexpected(TokenSet::single(TokenKind::LBracket)));
        }
        Ok(ty)
    }

    pub(crate) fn non_array_type(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::PrimitiveType);
        self.annotations(&mut node)?;
        self.finish_non_array_type(node, false)
    }

    /// Complete a type whose leading annotations are already in `node`.
    pub(crate) fn finish_non_array_type(
        &mut self,
        mut node: NodeBuilder,
        allow_diamond: bool,
    ) -> Result<Node, ParseError> {
        if self.at_any(PRIMITIVE_TYPES) {
            node.set_kind(NodeKind::PrimitiveType);
            self.bump_into(&mut node)?;
            return Ok(node.finish());
        }
        if self.at(TokenKind::Ident) {
            node.set_kind(NodeKind::ClassType);
            self.class_type_segments(&mut node, allow_diamond)?;
            return Ok(node.finish());
        }
        Err(self.unexpected(PRIMITIVE_TYPES.with(TokenKind::Ident).with(TokenKind::At)))
    }

    /// `Annotation* Ident TypeArguments? (. Annotation* Ident TypeArguments?)*`
    pub(crate) fn class_type(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ClassType);
        self.annotations(&mut node)?;
        self.class_type_segments(&mut node, false)?;
        Ok(node.finish())
    }

    /// Class type after `new`, where any segment may carry `<>`.
    pub(crate) fn creation_class_type(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ClassType);
        self.annotations(&mut node)?;
        self.class_type_segments(&mut node, true)?;
        Ok(node.finish())
    }

    fn class_type_segments(
        &mut self,
        node: &mut NodeBuilder,
        allow_diamond: bool,
    ) -> Result<(), ParseError> {
        loop {
            self.expect(node, TokenKind::Ident)?;
            if self.at(TokenKind::Lt) {
                if allow_diamond && self.la(2) == TokenKind::Gt {
                    let mut diamond = self.start(NodeKind::Diamond);
                    self.bump_into(&mut diamond)?;
                    self.bump_into(&mut diamond)?;
                    node.push_node(diamond.finish());
                } else {
                    node.push_node(self.type_arguments()?);
                }
            }
            let continues = self.at(TokenKind::Dot)
                && matches!(self.la(2), TokenKind::Ident | TokenKind::At);
            if !continues {
                return Ok(());
            }
            self.bump_into(node)?;
            self.annotations(node)?;
        }
    }

    /// Wrap `base` in an `ArrayType` when dimensions follow.
    pub(crate) fn array_suffix(&mut self, base: Node) -> Result<Node, ParseError> {
        if !self.dims_ahead()? {
            return Ok(base);
        }
        let mut node = NodeBuilder::wrapping(NodeKind::ArrayType, base);
        node.push_node(self.dims()?);
        Ok(node.finish())
    }

    /// Whether `[ ]`, possibly annotated, comes next.
    pub(crate) fn dims_ahead(&mut self) -> Result<bool, ParseError> {
        if self.at(TokenKind::LBracket) {
            return Ok(self.la(2) == TokenKind::RBracket);
        }
        if self.at(TokenKind::At) {
            return self.speculate(Probe::AnnotatedDims, |p| {
                let mut scratch = p.start(NodeKind::Dims);
                p.annotations(&mut scratch)?;
                p.expect(&mut scratch, TokenKind::LBracket)?;
                p.expect(&mut scratch, TokenKind::RBracket)
            });
        }
        Ok(false)
    }

    /// `(Annotation* [ ])+`
    pub(crate) fn dims(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Dims);
        loop {
            self.annotations(&mut node)?;
            self.expect(&mut node, TokenKind::LBracket)?;
            self.expect(&mut node, TokenKind::RBracket)?;
            if !self.dims_ahead()? {
                return Ok(node.finish());
            }
        }
    }

    /// `< TypeArgument (, TypeArgument)* >`
    pub(crate) fn type_arguments(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.type_arguments_inner())
    }

    fn type_arguments_inner(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::TypeArguments);
        self.expect(&mut node, TokenKind::Lt)?;
        loop {
            node.push_node(self.type_argument()?);
            if !self.eat(&mut node, TokenKind::Comma)? {
                break;
            }
        }
        self.expect(&mut node, TokenKind::Gt)?;
        Ok(node.finish())
    }

    /// `Annotation* ? ((extends | super) ReferenceType)?` or a reference type.
    fn type_argument(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Wildcard);
        self.annotations(&mut node)?;
        if !self.at(TokenKind::Question) {
            let base = self.finish_non_array_type(node, false)?;
            let ty = self.array_suffix(base)?;
            if ty.kind() == NodeKind::PrimitiveType {
                return Err(self.unexpected(TokenSet::single(TokenKind::LBracket)));
            }
            return Ok(ty);
        }
        self.bump_into(&mut node)?;
        if self.at(TokenKind::Extends) || self.at(TokenKind::Super) {
            self.bump_into(&mut node)?;
            node.push_node(self.reference_type()?);
        }
        Ok(node.finish())
    }

    /// `< TypeParameter (, TypeParameter)* >`
    pub(crate) fn type_parameters(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::TypeParameters);
        self.expect(&mut node, TokenKind::Lt)?;
        loop {
            node.push_node(self.type_parameter()?);
            if !self.eat(&mut node, TokenKind::Comma)? {
                break;
            }
        }
        self.expect(&mut node, TokenKind::Gt)?;
        Ok(node.finish())
    }

    /// `Annotation* Ident (extends ClassType (& ClassType)*)?`
    fn type_parameter(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::TypeParameter);
        self.annotations(&mut node)?;
        self.expect(&mut node, TokenKind::Ident)?;
        if self.at(TokenKind::Extends) {
            let mut bound = self.start(NodeKind::TypeBound);
            self.bump_into(&mut bound)?;
            bound.push_node(self.class_type()?);
            while self.at(TokenKind::Amp) {
                bound.push_node(self.additional_bound()?);
            }
            node.push_node(bound.finish());
        }
        Ok(node.finish())
    }

    /// `& ClassType`
    pub(crate) fn additional_bound(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::AdditionalBound);
        self.expect(&mut node, TokenKind::Amp)?;
        node.push_node(self.class_type()?);
        Ok(node.finish())
    }

    /// `ClassType (, ClassType)*` into `node`, used by `implements`,
    /// `extends` lists and `throws`.
    pub(crate) fn class_type_list(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        loop {
            node.push_node(self.class_type()?);
            if !self.eat(node, TokenKind::Comma)? {
                return Ok(());
            }
        }
    }
}
