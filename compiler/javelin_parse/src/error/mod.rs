//! Parse errors.
//!
//! A parse produces either a tree or exactly one `ParseError`. Probe
//! failures inside speculation never reach the caller; only the fatal
//! kinds (see [`ParseError::is_fatal`]) cross a speculation boundary.

use javelin_diagnostic::{Diagnostic, ErrorCode};
use javelin_ir::{Span, Token, TokenKind};

use crate::TokenSet;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A token outside the expected set was found.
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken { expected: TokenSet, found: TokenKind },

    /// `Eof` was reached while a rule still needed tokens.
    #[error("unexpected end of input, expected {expected}")]
    EndOfInput { expected: TokenSet },

    /// Two decision-table rows of equal length matched with different
    /// alternatives. A defect in the tables, never in the input.
    #[error("ambiguous decision between {}", candidates.join(" and "))]
    AmbiguousGrammar { candidates: Vec<&'static str> },

    /// A checkpoint was restored on a stream that did not create it, or
    /// points past the end of the stream.
    #[error("checkpoint does not belong to this token stream")]
    InvalidCheckpoint,

    /// Speculative probes consumed more tokens than the configured budget.
    #[error("speculation budget of {budget} tokens exhausted")]
    SpeculationBudgetExceeded { budget: usize },
}

/// A parse failure at a single location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Span of the offending token (zero-width at `Eof`).
    pub span: Span,
    /// Index of the offending token in the stream.
    pub token_index: usize,
    /// What the parser was doing, e.g. "while parsing a method body".
    pub context: Option<String>,
}

impl ParseError {
    #[cold]
    #[inline(never)]
    pub fn new(kind: ParseErrorKind, span: Span, token_index: usize) -> Self {
        ParseError {
            kind,
            span,
            token_index,
            context: None,
        }
    }

    /// `found` was not in `expected`. Reports `EndOfInput` when `found` is
    /// the `Eof` sentinel.
    #[cold]
    #[inline(never)]
    pub fn unexpected(expected: TokenSet, found: Token, token_index: usize) -> Self {
        let kind = if found.kind == TokenKind::Eof {
            ParseErrorKind::EndOfInput { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.kind,
            }
        };
        ParseError::new(kind, found.span, token_index)
    }

    #[cold]
    #[inline(never)]
    pub fn invalid_checkpoint(span: Span, token_index: usize) -> Self {
        ParseError::new(ParseErrorKind::InvalidCheckpoint, span, token_index)
    }

    /// Attach rule context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Errors that abort the whole parse, even inside a speculative probe.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::AmbiguousGrammar { .. }
                | ParseErrorKind::InvalidCheckpoint
                | ParseErrorKind::SpeculationBudgetExceeded { .. }
        )
    }

    /// The expected-token set, for the two input errors.
    pub fn expected(&self) -> Option<TokenSet> {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. }
            | ParseErrorKind::EndOfInput { expected } => Some(*expected),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::EndOfInput { .. } => ErrorCode::E1002,
            ParseErrorKind::SpeculationBudgetExceeded { .. } => ErrorCode::E1003,
            ParseErrorKind::AmbiguousGrammar { .. } => ErrorCode::E9001,
            ParseErrorKind::InvalidCheckpoint => ErrorCode::E9002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            ParseErrorKind::UnexpectedToken { found, .. } => format!("unexpected `{found}`"),
            ParseErrorKind::EndOfInput { .. } => "input ends here".to_string(),
            _ => "here".to_string(),
        };
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        if let Some(context) = &self.context {
            diag = diag.with_note(context.clone());
        }
        match &self.kind {
            ParseErrorKind::SpeculationBudgetExceeded { .. } => diag.with_help(
                "raise JAVELIN_SPECULATION_BUDGET or ParseOptions::speculation_budget",
            ),
            ParseErrorKind::AmbiguousGrammar { .. } | ParseErrorKind::InvalidCheckpoint => {
                diag.with_note("this is a bug in the parser, not in the input")
            }
            _ => diag,
        }
    }
}
