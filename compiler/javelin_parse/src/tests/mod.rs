//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `expr`: precedence, casts, lambdas, shifts, primaries and selectors
//! - `stmt`: blocks, local declarations and every statement form
//! - `decl`: compilation units, type declarations and members
//! - `speculation`: probes, the prediction memo and the speculation budget
//! - `errors`: error kinds, expected sets and diagnostics

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod decl;
mod expr;
mod speculation;
mod stmt;

use std::sync::Once;

use javelin_ir::{Node, TokenList};

use crate::{ParseError, ParseOptions};

/// Install a fmt subscriber once when `RUST_LOG` is set, so probe and
/// decision traces can be inspected with `RUST_LOG=javelin_parse=debug`.
pub(super) fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;
        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

pub(super) fn lex(source: &str) -> TokenList {
    init_tracing();
    javelin_lexer::lex(source).expect("test source should lex")
}

type Entry = fn(&TokenList, ParseOptions) -> Result<Node, ParseError>;

fn sexp_with(entry: Entry, source: &str) -> String {
    let tokens = lex(source);
    match entry(&tokens, ParseOptions::default()) {
        Ok(node) => node.to_sexp(source),
        Err(err) => panic!("Expected {source:?} to parse, got {err}"),
    }
}

fn error_with(entry: Entry, source: &str) -> ParseError {
    let tokens = lex(source);
    match entry(&tokens, ParseOptions::default()) {
        Ok(node) => panic!("Expected {source:?} to fail, got {}", node.to_sexp(source)),
        Err(err) => err,
    }
}

pub(super) fn expr(source: &str) -> String {
    sexp_with(crate::expression_with, source)
}

pub(super) fn stmt(source: &str) -> String {
    sexp_with(crate::statement_with, source)
}

pub(super) fn unit(source: &str) -> String {
    sexp_with(crate::compilation_unit_with, source)
}

pub(super) fn ty(source: &str) -> String {
    sexp_with(crate::type_with, source)
}

pub(super) fn expr_error(source: &str) -> ParseError {
    error_with(crate::expression_with, source)
}

pub(super) fn stmt_error(source: &str) -> ParseError {
    error_with(crate::statement_with, source)
}

pub(super) fn unit_error(source: &str) -> ParseError {
    error_with(crate::compilation_unit_with, source)
}

/// Parse a compilation unit and return the tree.
pub(super) fn unit_tree(source: &str) -> Node {
    let tokens = lex(source);
    crate::compilation_unit(&tokens).expect("test source should parse")
}
