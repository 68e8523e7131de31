//! Property-based tests for the parser.
//!
//! Generated inputs check the parser's structural guarantees: parsing is
//! deterministic, every token lands in the tree exactly once, binary levels
//! associate to the left, and any expression subtree re-parses to itself.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use javelin_ir::{Node, NodeKind, TokenList};
use javelin_parse::{compilation_unit, expression, ParseErrorKind};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Identifiers that can never collide with a reserved word.
fn arb_ident() -> impl Strategy<Value = String> {
    "x[a-z0-9]{0,5}"
}

fn arb_leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_ident(),
        (0u32..1000).prop_map(|n| n.to_string()),
        "[a-z ]{0,8}".prop_map(|s| format!("\"{s}\"")),
        Just("true".to_string()),
        Just("null".to_string()),
    ]
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("||"),
        Just("&&"),
        Just("|"),
        Just("^"),
        Just("&"),
        Just("=="),
        Just("!="),
        Just("<"),
        Just(">"),
        Just("<="),
        Just(">="),
        Just("<<"),
        Just(">>"),
        Just(">>>"),
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("%"),
    ]
}

/// Syntactically valid expressions without assignments or lambdas.
fn arb_expr() -> impl Strategy<Value = String> {
    arb_leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), arb_binop(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("-{e}")),
            inner.clone().prop_map(|e| format!("!{e}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (arb_ident(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
            (inner.clone(), inner.clone(), inner)
                .prop_map(|(c, a, b)| format!("{c} ? {a} : {b}")),
        ]
    })
}

/// Operators sharing one precedence level.
fn arb_level() -> impl Strategy<Value = Vec<&'static str>> {
    prop_oneof![
        Just(vec!["+", "-"]),
        Just(vec!["*", "/", "%"]),
        Just(vec!["<<", ">>", ">>>"]),
        Just(vec!["<", ">", "<=", ">="]),
        Just(vec!["==", "!="]),
        Just(vec!["&"]),
        Just(vec!["||"]),
    ]
}

/// `x0 op x1 op ... xn` with every operator from one level.
fn arb_chain() -> impl Strategy<Value = (String, usize)> {
    (arb_level(), 2usize..7, any::<u64>()).prop_map(|(ops, count, seed)| {
        let mut source = "x0".to_string();
        for i in 1..count {
            let op = ops[(seed as usize).wrapping_add(i) % ops.len()];
            source.push_str(&format!(" {op} x{i}"));
        }
        (source, count)
    })
}

/// Token soup for robustness checks.
fn arb_token_soup() -> impl Strategy<Value = String> {
    let vocabulary = prop_oneof![
        Just("class"),
        Just("int"),
        Just("x"),
        Just("Foo"),
        Just("("),
        Just(")"),
        Just("{"),
        Just("}"),
        Just("["),
        Just("]"),
        Just("<"),
        Just(">"),
        Just(";"),
        Just(","),
        Just("."),
        Just("="),
        Just("->"),
        Just("::"),
        Just("@"),
        Just("1"),
        Just("+"),
        Just("new"),
        Just("for"),
        Just(":"),
    ];
    prop::collection::vec(vocabulary, 0..40).prop_map(|tokens| tokens.join(" "))
}

fn lex(source: &str) -> TokenList {
    javelin_lexer::lex(source).expect("generated source should lex")
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parsing the same tokens twice gives the same outcome.
    #[test]
    fn parse_is_deterministic(source in arb_expr()) {
        let tokens = lex(&source);
        prop_assert_eq!(expression(&tokens), expression(&tokens));
    }

    /// Every generated expression parses, and the tree's tokens are exactly
    /// the stream's tokens without the `Eof` sentinel.
    #[test]
    fn tree_covers_every_token(source in arb_expr()) {
        let tokens = lex(&source);
        let tree = expression(&tokens).unwrap();
        let in_tree: Vec<_> = tree.tokens().map(|t| (t.kind, t.span)).collect();
        let in_stream: Vec<_> = tokens
            .iter()
            .take(tokens.len() - 1)
            .map(|t| (t.kind, t.span))
            .collect();
        prop_assert_eq!(in_tree, in_stream);
        prop_assert_eq!(tree.span().start, 0);
        prop_assert_eq!(tree.span().end as usize, source.len());
    }

    /// A chain of same-level operators nests down its left spine.
    #[test]
    fn binary_levels_associate_left((source, count) in arb_chain()) {
        let tokens = lex(&source);
        let tree = expression(&tokens).unwrap();
        let mut node: &Node = &tree;
        for _ in 1..count {
            prop_assert!(
                matches!(node.kind(), NodeKind::Binary(_)),
                "expected a binary node in {}, got {:?}", source, node.kind()
            );
            node = node.child_nodes().next().unwrap();
        }
        prop_assert_eq!(node.kind(), NodeKind::Name);
        prop_assert_eq!(node.text(tokens.source()), "x0");
    }

    /// Every expression subtree re-parses on its own to the same tree.
    #[test]
    fn subexpressions_reparse_identically(source in arb_expr()) {
        let tokens = lex(&source);
        let tree = expression(&tokens).unwrap();
        for node in tree.descendants().filter(|n| n.kind().is_expression()) {
            let text = node.text(&source);
            let sub_tokens = lex(text);
            let reparsed = expression(&sub_tokens).unwrap();
            prop_assert_eq!(reparsed.to_sexp(text), node.to_sexp(&source));
        }
    }

    /// Arbitrary token sequences either parse or fail with an input error;
    /// the fatal kinds never surface for ordinary input.
    #[test]
    fn token_soup_never_panics(source in arb_token_soup()) {
        let tokens = lex(&source);
        if let Err(err) = compilation_unit(&tokens) {
            prop_assert!(
                matches!(
                    err.kind,
                    ParseErrorKind::UnexpectedToken { .. } | ParseErrorKind::EndOfInput { .. }
                ),
                "unexpected error kind for {:?}: {:?}", source, err.kind
            );
        }
    }
}
