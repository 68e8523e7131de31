//! Compilation units and type declarations.
//!
//! - `modifiers.rs`: modifier keywords and annotations
//! - `class.rs`: class and enum declarations and bodies
//! - `interface.rs`: interface and annotation type declarations
//! - `member.rs`: fields, methods, constructors, initializers, parameters

mod class;
mod interface;
mod member;
mod modifiers;

use javelin_ir::{Node, NodeKind, TokenKind};

use crate::decision::{Alternative, DecisionTable, Pattern, Row};
use crate::memo::Probe;
use crate::stream::TokenStream;
use crate::{ParseError, Parser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TypeDeclAlt {
    Class,
    Enum,
    Interface,
    Annotation,
}

impl Alternative for TypeDeclAlt {
    fn name(self) -> &'static str {
        match self {
            TypeDeclAlt::Class => "class declaration",
            TypeDeclAlt::Enum => "enum declaration",
            TypeDeclAlt::Interface => "interface declaration",
            TypeDeclAlt::Annotation => "annotation type declaration",
        }
    }
}

const CLASS_ROW: Row<TypeDeclAlt> = Row {
    pattern: &[Pattern::Kind(TokenKind::Class)],
    alt: TypeDeclAlt::Class,
};
const ENUM_ROW: Row<TypeDeclAlt> = Row {
    pattern: &[Pattern::Kind(TokenKind::Enum)],
    alt: TypeDeclAlt::Enum,
};
const INTERFACE_ROW: Row<TypeDeclAlt> = Row {
    pattern: &[Pattern::Kind(TokenKind::Interface)],
    alt: TypeDeclAlt::Interface,
};
const ANNOTATION_ROW: Row<TypeDeclAlt> = Row {
    pattern: &[Pattern::Kind(TokenKind::At), Pattern::Kind(TokenKind::Interface)],
    alt: TypeDeclAlt::Annotation,
};

/// Consulted after modifiers at the top level and inside type bodies.
pub(crate) static TYPE_DECL_TABLE: DecisionTable<TypeDeclAlt> = DecisionTable {
    name: "type declaration",
    rows: &[CLASS_ROW, ENUM_ROW, INTERFACE_ROW, ANNOTATION_ROW],
    fallback: None,
};

static CLASS_DECL_TABLE: DecisionTable<TypeDeclAlt> = DecisionTable {
    name: "class declaration",
    rows: &[CLASS_ROW, ENUM_ROW],
    fallback: None,
};

static INTERFACE_DECL_TABLE: DecisionTable<TypeDeclAlt> = DecisionTable {
    name: "interface declaration",
    rows: &[INTERFACE_ROW, ANNOTATION_ROW],
    fallback: None,
};

impl<S: TokenStream> Parser<S> {
    /// `PackageDeclaration? ImportDeclaration* TypeDeclaration*`
    pub fn compilation_unit(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::CompilationUnit);
        if self.package_ahead()? {
            node.push_node(self.package_declaration()?);
        }
        while self.at(TokenKind::Import) {
            node.push_node(self.import_declaration()?);
        }
        while !self.at(TokenKind::Eof) {
            // A stray `;` between type declarations is legal.
            if self.eat(&mut node, TokenKind::Semi)? {
                continue;
            }
            let modifiers = self.modifiers()?;
            node.push_node(self.type_declaration_rest(modifiers, &TYPE_DECL_TABLE)?);
        }
        Ok(node.finish())
    }

    fn package_ahead(&mut self) -> Result<bool, ParseError> {
        match self.la(1) {
            TokenKind::Package => Ok(true),
            TokenKind::At => self.speculate(Probe::AnnotatedPackage, |p| {
                let mut scratch = p.start(NodeKind::Modifiers);
                p.annotations(&mut scratch)?;
                p.expect(&mut scratch, TokenKind::Package)
            }),
            _ => Ok(false),
        }
    }

    /// `Annotation* package Name ;`
    fn package_declaration(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::PackageDeclaration);
        let mut annotations = self.start(NodeKind::Modifiers);
        self.annotations(&mut annotations)?;
        node.push_node(annotations.finish());
        self.expect(&mut node, TokenKind::Package)?;
        node.push_node(self.name()?);
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// `import static? Name (. *)? ;`
    fn import_declaration(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ImportDeclaration);
        self.expect(&mut node, TokenKind::Import)?;
        self.eat(&mut node, TokenKind::Static)?;
        node.push_node(self.name()?);
        if self.eat(&mut node, TokenKind::Dot)? {
            self.expect(&mut node, TokenKind::Star)?;
        }
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// A class or enum declaration, modifiers included.
    pub fn class_declaration(&mut self) -> Result<Node, ParseError> {
        let modifiers = self.modifiers()?;
        self.type_declaration_rest(modifiers, &CLASS_DECL_TABLE)
    }

    /// An interface or annotation type declaration, modifiers included.
    pub fn interface_declaration(&mut self) -> Result<Node, ParseError> {
        let modifiers = self.modifiers()?;
        self.type_declaration_rest(modifiers, &INTERFACE_DECL_TABLE)
    }

    /// The declaration after its modifiers, chosen by `table`.
    pub(crate) fn type_declaration_rest(
        &mut self,
        modifiers: Node,
        table: &DecisionTable<TypeDeclAlt>,
    ) -> Result<Node, ParseError> {
        match table.predict(&self.stream, self.options.detect_ambiguity)? {
            TypeDeclAlt::Class => self.class_declaration_rest(modifiers),
            TypeDeclAlt::Enum => self.enum_declaration_rest(modifiers),
            TypeDeclAlt::Interface => self.interface_declaration_rest(modifiers),
            TypeDeclAlt::Annotation => self.annotation_type_declaration_rest(modifiers),
        }
    }
}
