//! Fixed-k decision tables.
//!
//! A table maps short token patterns to grammar alternatives. Rows are
//! tried in declaration order and the first full match wins, so a longer,
//! more specific row must come before a shorter one sharing its prefix.

use tracing::debug;

use javelin_ir::TokenKind;

use crate::stream::TokenStream;
use crate::{ParseError, ParseErrorKind, TokenSet};

/// One lookahead position of a row.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Pattern {
    Kind(TokenKind),
    OneOf(TokenSet),
    Any,
}

impl Pattern {
    #[inline]
    fn matches(self, kind: TokenKind) -> bool {
        match self {
            Pattern::Kind(expected) => kind == expected,
            Pattern::OneOf(set) => set.contains(kind),
            Pattern::Any => kind != TokenKind::Eof,
        }
    }

    fn first_set(self) -> TokenSet {
        match self {
            Pattern::Kind(kind) => TokenSet::single(kind),
            Pattern::OneOf(set) => set,
            Pattern::Any => TokenSet::new(),
        }
    }
}

/// A grammar alternative chosen by a table.
pub(crate) trait Alternative: Copy + Eq + 'static {
    fn name(self) -> &'static str;
}

pub(crate) struct Row<A: 'static> {
    pub pattern: &'static [Pattern],
    pub alt: A,
}

pub(crate) struct DecisionTable<A: 'static> {
    pub name: &'static str,
    pub rows: &'static [Row<A>],
    /// Taken when no row matches. Without one, no match is a parse error
    /// expecting the table's FIRST set.
    pub fallback: Option<A>,
}

impl<A: Alternative> DecisionTable<A> {
    /// Union of the first column of every row.
    pub fn first_set(&self) -> TokenSet {
        self.rows
            .iter()
            .filter_map(|row| row.pattern.first())
            .fold(TokenSet::new(), |set, p| set.union(p.first_set()))
    }

    fn row_matches<S: TokenStream>(row: &Row<A>, stream: &S) -> bool {
        row.pattern
            .iter()
            .enumerate()
            .all(|(i, pattern)| pattern.matches(stream.la(i + 1)))
    }

    /// Choose an alternative from the upcoming tokens without consuming any.
    pub fn predict<S: TokenStream>(
        &self,
        stream: &S,
        detect_ambiguity: bool,
    ) -> Result<A, ParseError> {
        let Some(position) = self.rows.iter().position(|row| Self::row_matches(row, stream))
        else {
            return match self.fallback {
                Some(alt) => {
                    debug!(table = self.name, alt = alt.name(), "decision (fallback)");
                    Ok(alt)
                }
                None => Err(ParseError::unexpected(
                    self.first_set(),
                    stream.lt(1),
                    stream.index(),
                )),
            };
        };
        let chosen = &self.rows[position];
        if detect_ambiguity {
            let rival = self.rows[position + 1..].iter().find(|row| {
                row.alt != chosen.alt
                    && row.pattern.len() == chosen.pattern.len()
                    && Self::row_matches(row, stream)
            });
            if let Some(rival) = rival {
                return Err(ParseError::new(
                    ParseErrorKind::AmbiguousGrammar {
                        candidates: vec![chosen.alt.name(), rival.alt.name()],
                    },
                    stream.lt(1).span,
                    stream.index(),
                ));
            }
        }
        debug!(table = self.name, alt = chosen.alt.name(), "decision");
        Ok(chosen.alt)
    }
}
