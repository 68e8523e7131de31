//! The [`Diagnostic`] value the lexer and parser hand back to callers.

use std::fmt;

use javelin_ir::Span;

use crate::{ErrorCode, Phase};

/// How a diagnostic should be read.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// The input is not valid Java.
    Error,
    /// The parser reached a state it should never reach.
    Bug,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Bug => "internal error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message attached to a source range.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// The primary label marks the offending token; others give context.
    pub primary: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic does nothing until it is rendered or returned"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Suggested fix, rendered as `help:`.
    pub help: Option<String>,
}

impl Diagnostic {
    /// Start a diagnostic for `code`. Internal codes get [`Severity::Bug`].
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        let severity = match code.phase() {
            Phase::Internal => Severity::Bug,
            Phase::Lex | Phase::Parse => Severity::Error,
        };
        Diagnostic {
            code,
            severity,
            message: code.summary().to_string(),
            labels: Vec::new(),
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
            primary: true,
        });
        self
    }

    pub fn with_context_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
            primary: false,
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|label| label.primary).map(|label| label.span)
    }
}

/// Single-line form without source context: `error[E1001] at 8..9: message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.severity, self.code)?;
        if let Some(span) = self.primary_span() {
            write!(f, " at {span}")?;
        }
        write!(f, ": {}", self.message)
    }
}
