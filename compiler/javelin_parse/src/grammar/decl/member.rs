//! Member declarations: fields, methods, constructors, initializers, nested
//! types, and annotation type elements.
//!
//! A member is chosen in two steps. Initializers and stray `;` are
//! recognised before modifiers; everything else after them, from a table
//! that depends on the enclosing body. Fields and methods share an
//! arbitrary type prefix and are split on `Ident (` once the type is parsed.

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use super::TYPE_DECL_TABLE;
use crate::decision::{Alternative, DecisionTable, Pattern, Row};
use crate::memo::Probe;
use crate::stream::TokenStream;
use crate::{ParseError, Parser, TokenSet};

/// The kind of body a member appears in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MemberContext {
    Class,
    Interface,
    Annotation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PrefixAlt {
    StaticInitializer,
    InstanceInitializer,
    Empty,
    Modified,
}

impl Alternative for PrefixAlt {
    fn name(self) -> &'static str {
        match self {
            PrefixAlt::StaticInitializer => "static initializer",
            PrefixAlt::InstanceInitializer => "instance initializer",
            PrefixAlt::Empty => "empty declaration",
            PrefixAlt::Modified => "modified member",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MemberAlt {
    Type,
    Generic,
    Constructor,
    VoidMethod,
    FieldOrMethod,
}

impl Alternative for MemberAlt {
    fn name(self) -> &'static str {
        match self {
            MemberAlt::Type => "member type",
            MemberAlt::Generic => "generic method or constructor",
            MemberAlt::Constructor => "constructor",
            MemberAlt::VoidMethod => "void method",
            MemberAlt::FieldOrMethod => "field or method",
        }
    }
}

/// Before modifiers, in a class body.
static CLASS_PREFIX_TABLE: DecisionTable<PrefixAlt> = DecisionTable {
    name: "class member prefix",
    rows: &[
        Row {
            pattern: &[Pattern::Kind(TokenKind::Static), Pattern::Kind(TokenKind::LBrace)],
            alt: PrefixAlt::StaticInitializer,
        },
        Row {
            pattern: &[Pattern::Kind(TokenKind::LBrace)],
            alt: PrefixAlt::InstanceInitializer,
        },
        Row {
            pattern: &[Pattern::Kind(TokenKind::Semi)],
            alt: PrefixAlt::Empty,
        },
    ],
    fallback: Some(PrefixAlt::Modified),
};

/// Before modifiers, in interface and annotation bodies.
static INTERFACE_PREFIX_TABLE: DecisionTable<PrefixAlt> = DecisionTable {
    name: "interface member prefix",
    rows: &[Row {
        pattern: &[Pattern::Kind(TokenKind::Semi)],
        alt: PrefixAlt::Empty,
    }],
    fallback: Some(PrefixAlt::Modified),
};

const MEMBER_TYPE: Pattern = Pattern::OneOf(TokenSet::of(&[
    TokenKind::Class,
    TokenKind::Enum,
    TokenKind::Interface,
]));

const MEMBER_TYPE_ROW: Row<MemberAlt> = Row {
    pattern: &[MEMBER_TYPE],
    alt: MemberAlt::Type,
};
const ANNOTATION_TYPE_ROW: Row<MemberAlt> = Row {
    pattern: &[Pattern::Kind(TokenKind::At), Pattern::Kind(TokenKind::Interface)],
    alt: MemberAlt::Type,
};
const GENERIC_ROW: Row<MemberAlt> = Row {
    pattern: &[Pattern::Kind(TokenKind::Lt)],
    alt: MemberAlt::Generic,
};
const VOID_ROW: Row<MemberAlt> = Row {
    pattern: &[Pattern::Kind(TokenKind::Void)],
    alt: MemberAlt::VoidMethod,
};

/// After modifiers, in a class body.
static CLASS_MEMBER_TABLE: DecisionTable<MemberAlt> = DecisionTable {
    name: "class member",
    rows: &[
        MEMBER_TYPE_ROW,
        ANNOTATION_TYPE_ROW,
        GENERIC_ROW,
        Row {
            pattern: &[Pattern::Kind(TokenKind::Ident), Pattern::Kind(TokenKind::LParen)],
            alt: MemberAlt::Constructor,
        },
        VOID_ROW,
    ],
    fallback: Some(MemberAlt::FieldOrMethod),
};

/// After modifiers, in an interface body.
static INTERFACE_MEMBER_TABLE: DecisionTable<MemberAlt> = DecisionTable {
    name: "interface member",
    rows: &[MEMBER_TYPE_ROW, ANNOTATION_TYPE_ROW, GENERIC_ROW, VOID_ROW],
    fallback: Some(MemberAlt::FieldOrMethod),
};

/// After modifiers, in an annotation type body.
static ANNOTATION_MEMBER_TABLE: DecisionTable<MemberAlt> = DecisionTable {
    name: "annotation type member",
    rows: &[MEMBER_TYPE_ROW, ANNOTATION_TYPE_ROW],
    fallback: Some(MemberAlt::FieldOrMethod),
};

impl MemberContext {
    fn prefix_table(self) -> &'static DecisionTable<PrefixAlt> {
        match self {
            MemberContext::Class => &CLASS_PREFIX_TABLE,
            MemberContext::Interface | MemberContext::Annotation => &INTERFACE_PREFIX_TABLE,
        }
    }

    fn member_table(self) -> &'static DecisionTable<MemberAlt> {
        match self {
            MemberContext::Class => &CLASS_MEMBER_TABLE,
            MemberContext::Interface => &INTERFACE_MEMBER_TABLE,
            MemberContext::Annotation => &ANNOTATION_MEMBER_TABLE,
        }
    }
}

impl<S: TokenStream> Parser<S> {
    /// Members up to the closing `}` of a type body, pushed into `node`.
    pub(crate) fn member_declarations(
        &mut self,
        node: &mut NodeBuilder,
        context: MemberContext,
    ) -> Result<(), ParseError> {
        while !matches!(self.la(1), TokenKind::RBrace | TokenKind::Eof) {
            self.member_declaration(node, context)?;
        }
        Ok(())
    }

    fn member_declaration(
        &mut self,
        body: &mut NodeBuilder,
        context: MemberContext,
    ) -> Result<(), ParseError> {
        let detect = self.options.detect_ambiguity;
        match context.prefix_table().predict(&self.stream, detect)? {
            PrefixAlt::StaticInitializer => {
                let mut node = self.start(NodeKind::StaticInitializer);
                self.bump_into(&mut node)?;
                node.push_node(self.block()?);
                body.push_node(node.finish());
                return Ok(());
            }
            PrefixAlt::InstanceInitializer => {
                let mut node = self.start(NodeKind::InstanceInitializer);
                node.push_node(self.block()?);
                body.push_node(node.finish());
                return Ok(());
            }
            PrefixAlt::Empty => return self.bump_into(body),
            PrefixAlt::Modified => {}
        }

        let modifiers = self.modifiers()?;
        let member = match context.member_table().predict(&self.stream, detect)? {
            MemberAlt::Type => self.type_declaration_rest(modifiers, &TYPE_DECL_TABLE)?,
            MemberAlt::Generic => {
                let mut node = NodeBuilder::wrapping(NodeKind::MethodDeclaration, modifiers);
                node.push_node(self.type_parameters()?);
                if context == MemberContext::Class
                    && self.at(TokenKind::Ident)
                    && self.la(2) == TokenKind::LParen
                {
                    self.constructor_rest(node)?
                } else {
                    self.result_type(&mut node)?;
                    self.method_rest(node)?
                }
            }
            MemberAlt::Constructor => {
                let node = NodeBuilder::wrapping(NodeKind::ConstructorDeclaration, modifiers);
                self.constructor_rest(node)?
            }
            MemberAlt::VoidMethod => {
                let mut node = NodeBuilder::wrapping(NodeKind::MethodDeclaration, modifiers);
                self.bump_into(&mut node)?;
                self.method_rest(node)?
            }
            MemberAlt::FieldOrMethod => self.field_or_method(modifiers, context)?,
        };
        body.push_node(member);
        Ok(())
    }

    /// `void` or a type, into a method node.
    fn result_type(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        if self.eat(node, TokenKind::Void)? {
            return Ok(());
        }
        node.push_node(self.type_()?);
        Ok(())
    }

    fn field_or_method(
        &mut self,
        modifiers: Node,
        context: MemberContext,
    ) -> Result<Node, ParseError> {
        let ty = self.type_()?;
        let is_method = self.at(TokenKind::Ident) && self.la(2) == TokenKind::LParen;
        let mut node = NodeBuilder::wrapping(NodeKind::FieldDeclaration, modifiers);
        node.push_node(ty);
        match (is_method, context) {
            (true, MemberContext::Annotation) => {
                node.set_kind(NodeKind::AnnotationTypeElementDeclaration);
                self.annotation_element_rest(node)
            }
            (true, _) => {
                node.set_kind(NodeKind::MethodDeclaration);
                self.method_rest(node)
            }
            (false, _) => {
                self.variable_declarators(&mut node)?;
                self.expect(&mut node, TokenKind::Semi)?;
                Ok(node.finish())
            }
        }
    }

    /// `Ident FormalParameters Dims? Throws? (Block | ;)` after the result
    /// type.
    fn method_rest(&mut self, mut node: NodeBuilder) -> Result<Node, ParseError> {
        self.expect(&mut node, TokenKind::Ident)?;
        node.push_node(self.formal_parameters()?);
        if self.dims_ahead()? {
            node.push_node(self.dims()?);
        }
        if self.at(TokenKind::Throws) {
            node.push_node(self.throws()?);
        }
        match self.la(1) {
            TokenKind::LBrace => node.push_node(self.block()?),
            TokenKind::Semi => self.bump_into(&mut node)?,
            _ => return Err(self.unexpected(TokenSet::of(&[TokenKind::LBrace, TokenKind::Semi]))),
        }
        Ok(node.finish())
    }

    /// `Ident ( ) Dims? (default ElementValue)? ;` after the type.
    fn annotation_element_rest(&mut self, mut node: NodeBuilder) -> Result<Node, ParseError> {
        self.expect(&mut node, TokenKind::Ident)?;
        self.expect(&mut node, TokenKind::LParen)?;
        self.expect(&mut node, TokenKind::RParen)?;
        if self.dims_ahead()? {
            node.push_node(self.dims()?);
        }
        if self.at(TokenKind::Default) {
            let mut default = self.start(NodeKind::DefaultValue);
            self.bump_into(&mut default)?;
            default.push_node(self.element_value()?);
            node.push_node(default.finish());
        }
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// `Ident FormalParameters Throws? ConstructorBody` after the modifiers
    /// and type parameters.
    fn constructor_rest(&mut self, mut node: NodeBuilder) -> Result<Node, ParseError> {
        node.set_kind(NodeKind::ConstructorDeclaration);
        self.expect(&mut node, TokenKind::Ident)?;
        node.push_node(self.formal_parameters()?);
        if self.at(TokenKind::Throws) {
            node.push_node(self.throws()?);
        }
        node.push_node(self.constructor_body()?);
        Ok(node.finish())
    }

    /// `{ ExplicitConstructorInvocation? BlockStatement* }`
    fn constructor_body(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ConstructorBody);
        self.expect(&mut node, TokenKind::LBrace)?;
        if self.explicit_constructor_ahead()? {
            node.push_node(self.explicit_constructor_invocation()?);
        }
        while !matches!(self.la(1), TokenKind::RBrace | TokenKind::Eof) {
            node.push_node(self.block_statement()?);
        }
        self.expect(&mut node, TokenKind::RBrace)?;
        Ok(node.finish())
    }

    /// `this(`, `super(`, `<T>this(`, or `Name . TypeArguments? super (`.
    fn explicit_constructor_ahead(&mut self) -> Result<bool, ParseError> {
        match self.la(1) {
            TokenKind::Lt => Ok(true),
            TokenKind::This | TokenKind::Super => Ok(self.la(2) == TokenKind::LParen),
            TokenKind::Ident => self.speculate(Probe::ExplicitConstructor, |p| {
                p.name()?;
                let mut scratch = p.start(NodeKind::ExplicitConstructorInvocation);
                p.expect(&mut scratch, TokenKind::Dot)?;
                if p.at(TokenKind::Lt) {
                    p.type_arguments()?;
                }
                p.expect(&mut scratch, TokenKind::Super)?;
                p.expect(&mut scratch, TokenKind::LParen)
            }),
            _ => Ok(false),
        }
    }

    fn explicit_constructor_invocation(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ExplicitConstructorInvocation);
        if self.at(TokenKind::Ident) {
            node.push_node(self.name()?);
            self.expect(&mut node, TokenKind::Dot)?;
        }
        if self.at(TokenKind::Lt) {
            node.push_node(self.type_arguments()?);
        }
        if !matches!(self.la(1), TokenKind::This | TokenKind::Super) {
            return Err(self.unexpected(TokenSet::of(&[TokenKind::This, TokenKind::Super])));
        }
        self.bump_into(&mut node)?;
        node.push_node(self.argument_list()?);
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// `( FormalParameterList? )`
    pub(crate) fn formal_parameters(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::FormalParameters);
        self.expect(&mut node, TokenKind::LParen)?;
        if !self.at(TokenKind::RParen) {
            self.formal_parameter_list(&mut node)?;
        }
        self.expect(&mut node, TokenKind::RParen)?;
        Ok(node.finish())
    }

    /// `ReceiverParameter? FormalParameter (, FormalParameter)*` into
    /// `node`. A variable-arity parameter ends the list.
    pub(crate) fn formal_parameter_list(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        let mut first = true;
        loop {
            let param = self.formal_parameter(first)?;
            first = false;
            let variadic = param.has_token(TokenKind::Ellipsis);
            node.push_node(param);
            if variadic || !self.eat(node, TokenKind::Comma)? {
                return Ok(());
            }
        }
    }

    /// `VariableModifier* Type Annotation* ...? Ident Dims?`, or for the
    /// first parameter also `Type (Ident .)? this`.
    fn formal_parameter(&mut self, first: bool) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::FormalParameter);
        node.push_node(self.variable_modifiers()?);
        node.push_node(self.type_()?);
        let receiver = first
            && (self.at(TokenKind::This)
                || (self.at(TokenKind::Ident)
                    && self.la(2) == TokenKind::Dot
                    && self.la(3) == TokenKind::This));
        if receiver {
            node.set_kind(NodeKind::ReceiverParameter);
            if self.eat(&mut node, TokenKind::Ident)? {
                self.expect(&mut node, TokenKind::Dot)?;
            }
            self.expect(&mut node, TokenKind::This)?;
            return Ok(node.finish());
        }
        self.annotations(&mut node)?;
        self.eat(&mut node, TokenKind::Ellipsis)?;
        self.expect(&mut node, TokenKind::Ident)?;
        if self.dims_ahead()? {
            node.push_node(self.dims()?);
        }
        Ok(node.finish())
    }

    /// `throws ClassType (, ClassType)*`
    fn throws(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Throws);
        self.expect(&mut node, TokenKind::Throws)?;
        self.class_type_list(&mut node)?;
        Ok(node.finish())
    }
}
