//! Deterministic recursive-descent parser for Java 8.
//!
//! One method per grammar rule on [`Parser`]. Overlapping alternatives are
//! resolved in three ways:
//! - fixed-k decision tables over the next few token kinds (`decision`)
//! - syntactic predicates run speculatively with mark/restore and cached
//!   per token index (`speculate`, `memo`)
//! - precedence climbing for binary operators (`grammar::expr::operators`)
//!
//! A parse returns the root [`Node`] or exactly one [`ParseError`]; there is
//! no partial tree and no recovery.

mod decision;
mod error;
mod grammar;
mod memo;
mod options;
mod speculate;
pub mod stack;
pub mod stream;
mod token_set;

pub use error::{ParseError, ParseErrorKind};
pub use grammar::expr::operators::{
    Associativity, InfixOp, OperatorInfo, PrecedenceTable, PRECEDENCE,
};
pub use memo::{PredictionMemo, Probe, ProbeResult};
pub use options::{ParseOptions, DEFAULT_SPECULATION_BUDGET};
pub use stream::{Checkpoint, Cursor, TokenStream};
pub use token_set::TokenSet;

use javelin_diagnostic::{ColorMode, Diagnostic, ErrorCode, Renderer};
use javelin_ir::{Node, TokenKind, TokenList};
use javelin_lexer::LexError;

/// Parser state for one parse over a token stream.
pub struct Parser<S: TokenStream> {
    stream: S,
    options: ParseOptions,
    memo: PredictionMemo,
    /// Nesting depth of active probes; tokens consumed while non-zero are
    /// charged to the speculation budget.
    speculation_depth: u32,
    speculated: usize,
}

impl<S: TokenStream> Parser<S> {
    pub fn new(stream: S, options: ParseOptions) -> Self {
        Parser {
            stream,
            options,
            memo: PredictionMemo::new(),
            speculation_depth: 0,
            speculated: 0,
        }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn memo(&self) -> &PredictionMemo {
        &self.memo
    }

    /// Tokens consumed by probes so far.
    pub fn speculated_tokens(&self) -> usize {
        self.speculated
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Fail unless every token before `Eof` has been consumed.
    pub fn expect_eof(&self) -> Result<(), ParseError> {
        if self.stream.la(1) == TokenKind::Eof {
            Ok(())
        } else {
            Err(self.unexpected(TokenSet::single(TokenKind::Eof)))
        }
    }
}

macro_rules! entry_points {
    ($($(#[$doc:meta])* $name:ident, $name_with:ident => $rule:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(tokens: &TokenList) -> Result<Node, ParseError> {
                $name_with(tokens, ParseOptions::default())
            }

            #[doc = concat!("[`", stringify!($name), "`] with explicit options.")]
            pub fn $name_with(tokens: &TokenList, options: ParseOptions) -> Result<Node, ParseError> {
                let mut parser = Parser::new(Cursor::new(tokens), options);
                let node = parser.$rule()?;
                parser.expect_eof()?;
                Ok(node)
            }
        )*
    };
}

entry_points! {
    /// Parse a whole source file.
    compilation_unit, compilation_unit_with => compilation_unit;
    /// Parse a single expression.
    expression, expression_with => expression;
    /// Parse a single block statement (a statement or a local declaration).
    statement, statement_with => block_statement;
    /// Parse a class or enum declaration, modifiers included.
    class_declaration, class_declaration_with => class_declaration;
    /// Parse an interface or annotation type declaration.
    interface_declaration, interface_declaration_with => interface_declaration;
    /// Parse a `{ ... }` block.
    block, block_with => block;
    /// Parse a type.
    type_, type_with => type_;
}

/// Failure of [`parse_source`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SourceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SourceError::Lex(err) => err.code(),
            SourceError::Parse(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SourceError::Lex(err) => err.to_diagnostic(),
            SourceError::Parse(err) => err.to_diagnostic(),
        }
    }

    /// Render the error against the `source` it came from, with the
    /// offending line and a caret under the failing token.
    pub fn render(&self, path: &str, source: &str, color: ColorMode) -> String {
        Renderer::new(path, source)
            .with_color(color, false)
            .render(&self.to_diagnostic())
    }
}

/// Lex and parse a compilation unit.
pub fn parse_source(source: &str) -> Result<Node, SourceError> {
    let tokens = javelin_lexer::lex(source)?;
    Ok(compilation_unit(&tokens)?)
}

#[cfg(test)]
mod tests;
