//! Probe, memo and budget tests.

use pretty_assertions::assert_eq;

use super::{expr, lex};
use javelin_ir::{BinaryOp, NodeKind, UnaryOp};

use crate::{Cursor, ParseErrorKind, ParseOptions, Parser, TokenStream};

#[test]
fn test_probe_restores_position() {
    let tokens = lex("(Foo) bar");
    let mut parser = Parser::new(Cursor::new(&tokens), ParseOptions::default());
    let node = parser.expression().unwrap();
    assert_eq!(node.to_sexp(tokens.source()), "(Cast ( (ClassType Foo) ) (Name bar))");
    // The probe consumed `( Foo )` once speculatively, then the real parse
    // consumed everything.
    assert_eq!(parser.speculated_tokens(), 3);
    assert_eq!(parser.stream().index(), tokens.len() - 1);
}

#[test]
fn test_budget_exhaustion_is_fatal() {
    let tokens = lex("(Foo) bar");
    let options = ParseOptions::default().with_speculation_budget(1);
    let err = crate::expression_with(&tokens, options).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SpeculationBudgetExceeded { budget: 1 });
    assert!(err.is_fatal());
}

#[test]
fn test_budget_exactly_enough() {
    let tokens = lex("(Foo) bar");
    let options = ParseOptions::default().with_speculation_budget(3);
    assert!(crate::expression_with(&tokens, options).is_ok());
}

#[test]
fn test_nested_probe_result_is_reused() {
    // The local-variable probe runs the annotated-dims probe at `@`; the
    // real parse then asks the same question at the same index.
    let source = "int @A [] x;";
    let tokens = lex(source);

    let mut memoized = Parser::new(Cursor::new(&tokens), ParseOptions::default());
    let with_memo = memoized.block_statement().unwrap();
    assert_eq!(memoized.memo().hits(), 1);
    assert_eq!(memoized.memo().len(), 2);

    let options = ParseOptions::default().with_memoize(false);
    let mut plain = Parser::new(Cursor::new(&tokens), options);
    let without_memo = plain.block_statement().unwrap();
    assert_eq!(plain.memo().hits(), 0);
    assert!(plain.memo().is_empty());
    assert!(plain.speculated_tokens() > memoized.speculated_tokens());

    assert_eq!(with_memo, without_memo);
}

#[test]
fn test_tables_are_unambiguous_on_real_input() {
    let tokens = lex(
        "class A { static {} int f; A() { this(1); } <T> void g() { outer: for (;;) { break outer; } } }",
    );
    let options = ParseOptions::default().with_detect_ambiguity(true);
    assert!(crate::compilation_unit_with(&tokens, options).is_ok());
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 1_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let sexp = expr(&source);
    assert!(sexp.starts_with("(Parenthesized ( (Parenthesized"));
}

#[test]
fn test_long_prefix_operator_chain_does_not_overflow() {
    let depth = 10_000;
    let tokens = lex(&format!("{}x", "! ".repeat(depth)));
    let node = crate::expression(&tokens).unwrap();
    assert_eq!(node.kind(), NodeKind::Unary(UnaryOp::Not));
    assert_eq!(node.descendants().count(), depth + 1);
}

/// `x0 < x1 < ... < x{n-1}`
fn relational_chain(operands: usize) -> String {
    (0..operands)
        .map(|i| format!("x{i}"))
        .collect::<Vec<_>>()
        .join(" < ")
}

#[test]
fn test_relational_chain_is_parsed_flat() {
    let tokens = lex(&relational_chain(1_000));
    let mut parser = Parser::new(Cursor::new(&tokens), ParseOptions::default());
    let node = parser.expression().unwrap();
    parser.expect_eof().unwrap();
    assert_eq!(node.kind(), NodeKind::Binary(BinaryOp::Lt));
    // No operand is ever tried as the head of `Type<...>::`.
    assert_eq!(parser.speculated_tokens(), 0);
    assert_eq!(parser.memo().len(), 0);
}

#[test]
fn test_speculation_stays_linear_on_long_relational_chains() {
    for operands in [100, 2_000] {
        let source = format!("{} < List<String>::size", relational_chain(operands));
        let tokens = lex(&source);
        let mut parser = Parser::new(Cursor::new(&tokens), ParseOptions::default());
        let node = parser.expression().unwrap();
        parser.expect_eof().unwrap();
        assert_eq!(node.kind(), NodeKind::Binary(BinaryOp::Lt));
        assert!(
            parser.speculated_tokens() <= tokens.len(),
            "{operands} operands: {} speculated tokens",
            parser.speculated_tokens()
        );
    }
}

#[test]
fn test_long_additive_chain_parses_and_drops() {
    let source = format!("a{}", " + a".repeat(50_000));
    let node = crate::expression(&lex(&source)).unwrap();
    assert_eq!(node.kind(), NodeKind::Binary(BinaryOp::Add));
    assert_eq!(node.tokens().count(), 100_001);
    drop(node);
}

#[test]
fn test_parser_state_can_move_between_threads() {
    fn assert_send<T: Send>() {}
    assert_send::<Parser<Cursor<'static>>>();
    assert_send::<javelin_ir::Node>();
}
