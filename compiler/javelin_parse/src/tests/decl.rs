//! Declaration tests.

use pretty_assertions::assert_eq;

use super::{lex, unit, unit_error, unit_tree};
use crate::{ParseErrorKind, TokenSet};
use javelin_ir::{Node, NodeKind, TokenKind};

fn body_kinds(unit: &Node) -> Vec<NodeKind> {
    let decl = unit.child_nodes().next().expect("a type declaration");
    let body = decl.child_nodes().last().expect("a type body");
    body.child_nodes().map(Node::kind).collect()
}

#[test]
fn test_minimal_class() {
    assert_eq!(
        unit("class A {}"),
        "(CompilationUnit (ClassDeclaration (Modifiers) class A (ClassBody { })))"
    );
    assert_eq!(unit(""), "(CompilationUnit)");
}

#[test]
fn test_package_and_imports() {
    assert_eq!(
        unit("package a.b; import java.util.*; import static java.lang.Math.max;"),
        "(CompilationUnit (PackageDeclaration (Modifiers) package (Name a . b) ;) \
         (ImportDeclaration import (Name java . util) . * ;) \
         (ImportDeclaration import static (Name java . lang . Math . max) ;))"
    );
}

#[test]
fn test_annotated_package_vs_annotated_class() {
    assert_eq!(
        unit("@Deprecated package p;"),
        "(CompilationUnit (PackageDeclaration (Modifiers (Annotation @ (Name Deprecated))) package (Name p) ;))"
    );
    assert_eq!(
        unit("@Deprecated class A {}"),
        "(CompilationUnit (ClassDeclaration (Modifiers (Annotation @ (Name Deprecated))) class A (ClassBody { })))"
    );
}

#[test]
fn test_stray_semicolons_between_types() {
    assert_eq!(
        unit(";class A {};"),
        "(CompilationUnit ; (ClassDeclaration (Modifiers) class A (ClassBody { })) ;)"
    );
}

#[test]
fn test_class_members() {
    let tree = unit_tree(
        "class A { int x, y = 2; int f() { return x; } A() { super(); } \
         abstract void g(); static {} {} ; }",
    );
    assert_eq!(
        body_kinds(&tree),
        vec![
            NodeKind::FieldDeclaration,
            NodeKind::MethodDeclaration,
            NodeKind::ConstructorDeclaration,
            NodeKind::MethodDeclaration,
            NodeKind::StaticInitializer,
            NodeKind::InstanceInitializer,
        ]
    );
}

#[test]
fn test_constructor_with_explicit_invocation() {
    assert_eq!(
        unit("class A { A() { super(); } }"),
        "(CompilationUnit (ClassDeclaration (Modifiers) class A (ClassBody { (ConstructorDeclaration (Modifiers) A \
         (FormalParameters ( )) (ConstructorBody { (ExplicitConstructorInvocation super (ArgumentList ( )) ;) })) })))"
    );
}

#[test]
fn test_qualified_super_invocation_vs_statement() {
    let source = "class B extends A.Inner { B(A a) { a.super(); this.x = 1; } }";
    let tree = unit_tree(source);
    let ctor = tree
        .descendants()
        .find(|n| n.kind() == NodeKind::ConstructorBody)
        .unwrap();
    let kinds: Vec<_> = ctor.child_nodes().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::ExplicitConstructorInvocation, NodeKind::ExpressionStatement]
    );
    let eci = ctor.child_nodes().next().unwrap();
    assert_eq!(
        eci.to_sexp(source),
        "(ExplicitConstructorInvocation (Name a) . super (ArgumentList ( )) ;)"
    );
}

#[test]
fn test_generic_method_and_constructor() {
    let tree = unit_tree("class A { <T> T id(T t) { return t; } <T> A(T t) {} }");
    assert_eq!(
        body_kinds(&tree),
        vec![NodeKind::MethodDeclaration, NodeKind::ConstructorDeclaration]
    );
}

#[test]
fn test_type_parameter_bounds() {
    assert_eq!(
        unit("class A<T extends Comparable<T> & Serializable> {}"),
        "(CompilationUnit (ClassDeclaration (Modifiers) class A (TypeParameters < (TypeParameter T \
         (TypeBound extends (ClassType Comparable (TypeArguments < (ClassType T) >)) \
         (AdditionalBound & (ClassType Serializable)))) >) (ClassBody { })))"
    );
}

#[test]
fn test_enum_declaration() {
    assert_eq!(
        unit("enum Color { RED, GREEN(1) { }, ; int v; }"),
        "(CompilationUnit (EnumDeclaration (Modifiers) enum Color (EnumBody { (EnumConstant RED) , \
         (EnumConstant GREEN (ArgumentList ( (Literal(Integer) 1) )) (ClassBody { })) , ; \
         (FieldDeclaration (Modifiers) (PrimitiveType int) (VariableDeclarator v) ;) })))"
    );
}

#[test]
fn test_interface_members() {
    let tree = unit_tree(
        "public interface I<T> extends J, K { int X = 1; void m(); \
         default int n() { return 0; } static void s() {} class Nested {} }",
    );
    let decl = tree.child_nodes().next().unwrap();
    assert_eq!(decl.kind(), NodeKind::InterfaceDeclaration);
    assert!(decl.find_child(NodeKind::ExtendsInterfaces).is_some());
    assert_eq!(
        body_kinds(&tree),
        vec![
            NodeKind::FieldDeclaration,
            NodeKind::MethodDeclaration,
            NodeKind::MethodDeclaration,
            NodeKind::MethodDeclaration,
            NodeKind::ClassDeclaration,
        ]
    );
}

#[test]
fn test_annotation_type_declaration() {
    assert_eq!(
        unit("@interface Ann { String value() default \"\"; int[] ids(); }"),
        "(CompilationUnit (AnnotationTypeDeclaration (Modifiers) @ interface Ann (AnnotationTypeBody { \
         (AnnotationTypeElementDeclaration (Modifiers) (ClassType String) value ( ) \
         (DefaultValue default (Literal(String) \"\")) ;) \
         (AnnotationTypeElementDeclaration (Modifiers) (ArrayType (PrimitiveType int) (Dims [ ])) ids ( ) ;) })))"
    );
}

#[test]
fn test_annotation_arguments() {
    assert_eq!(
        unit("@SuppressWarnings({\"a\", \"b\"}) @Target(value = ElementType.TYPE) class A {}"),
        "(CompilationUnit (ClassDeclaration (Modifiers (Annotation @ (Name SuppressWarnings) ( \
         (ElementValueArrayInitializer { (Literal(String) \"a\") , (Literal(String) \"b\") }) )) \
         (Annotation @ (Name Target) ( (ElementValuePair value = (Name ElementType . TYPE)) ))) \
         class A (ClassBody { })))"
    );
}

#[test]
fn test_receiver_and_variable_arity_parameters() {
    let source = "class A { void m(A this, int... xs) {} }";
    let tree = unit_tree(source);
    let params = tree
        .descendants()
        .find(|n| n.kind() == NodeKind::FormalParameters)
        .unwrap();
    assert_eq!(
        params.to_sexp(source),
        "(FormalParameters ( (ReceiverParameter (Modifiers) (ClassType A) this) , \
         (FormalParameter (Modifiers) (PrimitiveType int) ... xs) ))"
    );
}

#[test]
fn test_member_types() {
    let tree =
        unit_tree("class A { static class B {} interface C {} enum D {} @interface E {} }");
    assert_eq!(
        body_kinds(&tree),
        vec![
            NodeKind::ClassDeclaration,
            NodeKind::InterfaceDeclaration,
            NodeKind::EnumDeclaration,
            NodeKind::AnnotationTypeDeclaration,
        ]
    );
}

#[test]
fn test_declaration_entry_points() {
    let tokens = lex("interface I {}");
    let err = crate::class_declaration(&tokens).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenSet::of(&[TokenKind::Class, TokenKind::Enum]),
            found: TokenKind::Interface,
        }
    );
    let tokens = lex("@interface A {}");
    let node = crate::interface_declaration(&tokens).unwrap();
    assert_eq!(node.kind(), NodeKind::AnnotationTypeDeclaration);
}

#[test]
fn test_method_needs_body_or_semicolon() {
    let err = unit_error("class A { void m() }");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenSet::of(&[TokenKind::LBrace, TokenKind::Semi]),
            found: TokenKind::RBrace,
        }
    );
}
