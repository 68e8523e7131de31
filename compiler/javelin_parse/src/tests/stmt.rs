//! Statement tests.

use pretty_assertions::assert_eq;

use super::{lex, stmt, stmt_error};
use crate::{ParseErrorKind, TokenSet};
use javelin_ir::{NodeKind, TokenKind};

#[test]
fn test_empty_block_vs_empty_statement() {
    assert_eq!(stmt("{}"), "(Block { })");
    assert_eq!(stmt(";"), "(EmptyStatement ;)");
}

#[test]
fn test_local_variable_declaration() {
    assert_eq!(
        stmt("int x = 1;"),
        "(LocalVariableDeclarationStatement (LocalVariableDeclaration (Modifiers) (PrimitiveType int) \
         (VariableDeclarator x = (Literal(Integer) 1))) ;)"
    );
    assert_eq!(
        stmt("final int[] a = {1}, b;"),
        "(LocalVariableDeclarationStatement (LocalVariableDeclaration (Modifiers final) \
         (ArrayType (PrimitiveType int) (Dims [ ])) \
         (VariableDeclarator a = (ArrayInitializer { (Literal(Integer) 1) })) , (VariableDeclarator b)) ;)"
    );
}

#[test]
fn test_qualified_generic_local_vs_relational_expression() {
    assert_eq!(
        stmt("a.b.C<D> x;"),
        "(LocalVariableDeclarationStatement (LocalVariableDeclaration (Modifiers) \
         (ClassType a . b . C (TypeArguments < (ClassType D) >)) (VariableDeclarator x)) ;)"
    );
    assert_eq!(
        stmt("a < b;"),
        "(ExpressionStatement (Binary(Lt) (Name a) < (Name b)) ;)"
    );
}

#[test]
fn test_expression_statements() {
    assert_eq!(
        stmt("x = 1;"),
        "(ExpressionStatement (Assign(Assign) (Name x) = (Literal(Integer) 1)) ;)"
    );
    assert_eq!(
        stmt("foo.bar();"),
        "(ExpressionStatement (MethodInvocation (Name foo . bar) (ArgumentList ( ))) ;)"
    );
}

#[test]
fn test_labeled_statement() {
    assert_eq!(
        stmt("outer: bar();"),
        "(LabeledStatement outer : (ExpressionStatement (MethodInvocation (Name bar) (ArgumentList ( ))) ;))"
    );
}

#[test]
fn test_local_class() {
    assert_eq!(
        stmt("class L {}"),
        "(ClassDeclaration (Modifiers) class L (ClassBody { }))"
    );
    assert_eq!(
        stmt("final class L {}"),
        "(ClassDeclaration (Modifiers final) class L (ClassBody { }))"
    );
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let source = "if (a) if (b) x(); else y();";
    let tokens = lex(source);
    let outer = crate::statement(&tokens).unwrap();
    assert_eq!(outer.kind(), NodeKind::IfStatement);
    assert!(!outer.has_token(TokenKind::Else));
    let inner = outer.find_child(NodeKind::IfStatement).unwrap();
    assert!(inner.has_token(TokenKind::Else));
}

#[test]
fn test_basic_for() {
    assert_eq!(
        stmt("for (int i = 0; i < n; i++) {}"),
        "(ForStatement for ( (ForInit (LocalVariableDeclaration (Modifiers) (PrimitiveType int) \
         (VariableDeclarator i = (Literal(Integer) 0)))) ; (Binary(Lt) (Name i) < (Name n)) ; \
         (ForUpdate (Postfix(Increment) (Name i) ++)) ) (Block { }))"
    );
    assert_eq!(stmt("for (;;) ;"), "(ForStatement for ( ; ; ) (EmptyStatement ;))");
    assert_eq!(
        stmt("for (i = 0, j = 1; ; ) ;"),
        "(ForStatement for ( (ForInit (Assign(Assign) (Name i) = (Literal(Integer) 0)) , \
         (Assign(Assign) (Name j) = (Literal(Integer) 1))) ; ; ) (EmptyStatement ;))"
    );
}

#[test]
fn test_enhanced_for() {
    assert_eq!(
        stmt("for (String s : list) {}"),
        "(EnhancedForStatement for ( (Modifiers) (ClassType String) s : (Name list) ) (Block { }))"
    );
    assert_eq!(
        stmt("for (final Map.Entry<K, V> e : m.entrySet()) ;"),
        "(EnhancedForStatement for ( (Modifiers final) (ClassType Map . Entry (TypeArguments < \
         (ClassType K) , (ClassType V) >)) e : (MethodInvocation (Name m . entrySet) (ArgumentList ( ))) ) \
         (EmptyStatement ;))"
    );
}

#[test]
fn test_switch_groups_labels() {
    let source = "switch (x) { case 1: case 2: a(); break; default: }";
    let tokens = lex(source);
    let node = crate::statement(&tokens).unwrap();
    assert_eq!(node.kind(), NodeKind::SwitchStatement);
    let groups: Vec<_> = node
        .child_nodes()
        .filter(|n| n.kind() == NodeKind::SwitchBlockStatementGroup)
        .collect();
    assert_eq!(groups.len(), 2);
    let kinds: Vec<_> = groups[0].child_nodes().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::SwitchLabel,
            NodeKind::SwitchLabel,
            NodeKind::ExpressionStatement,
            NodeKind::BreakStatement,
        ]
    );
    assert_eq!(groups[1].to_sexp(source), "(SwitchBlockStatementGroup (SwitchLabel default :))");
}

#[test]
fn test_loops_and_jumps() {
    assert_eq!(
        stmt("while (true) continue;"),
        "(WhileStatement while ( (Literal(Boolean) true) ) (ContinueStatement continue ;))"
    );
    assert_eq!(
        stmt("do x++; while (x < 3);"),
        "(DoStatement do (ExpressionStatement (Postfix(Increment) (Name x) ++) ;) while ( \
         (Binary(Lt) (Name x) < (Literal(Integer) 3)) ) ;)"
    );
    assert_eq!(stmt("break outer;"), "(BreakStatement break outer ;)");
    assert_eq!(stmt("return;"), "(ReturnStatement return ;)");
    assert_eq!(
        stmt("throw e;"),
        "(ThrowStatement throw (Name e) ;)"
    );
}

#[test]
fn test_assert_and_synchronized() {
    assert_eq!(
        stmt("assert x : \"msg\";"),
        "(AssertStatement assert (Name x) : (Literal(String) \"msg\") ;)"
    );
    assert_eq!(
        stmt("synchronized (lock) {}"),
        "(SynchronizedStatement synchronized ( (Name lock) ) (Block { }))"
    );
}

#[test]
fn test_try_forms() {
    assert_eq!(
        stmt("try {} catch (IOException | RuntimeException e) {} finally {}"),
        "(TryStatement try (Block { }) (CatchClause catch ( (Modifiers) (CatchType (ClassType IOException) | \
         (ClassType RuntimeException)) e ) (Block { })) (Finally finally (Block { })))"
    );
    assert_eq!(
        stmt("try (InputStream in = open(); ) {}"),
        "(TryStatement try (ResourceSpecification ( (Resource (Modifiers) (ClassType InputStream) in = \
         (MethodInvocation (Name open) (ArgumentList ( )))) ; )) (Block { }))"
    );
}

#[test]
fn test_try_without_handlers_is_rejected() {
    let err = stmt_error("try {} foo();");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenSet::of(&[TokenKind::Catch, TokenKind::Finally]),
            found: TokenKind::Ident,
        }
    );
    assert!(err.context.is_some());
}
