//! Per-parse prediction memo.
//!
//! Probe outcomes depend only on the probe and the token index it started
//! at, so each `(Probe, index)` pair is evaluated at most once per parse.
//! The memo also owns the token scans that let the parser skip probes
//! cheaply: the delimiter table used for lambda-head detection and the
//! type-prefix scan in front of `GenericMethodRef`.

use std::ops::Range;

use rustc_hash::FxHashMap;
use tracing::trace;

use javelin_ir::TokenKind;

use crate::stream::TokenStream;
use crate::token_set::PRIMITIVE_TYPES;
use crate::TokenSet;

/// Tokens that may appear between the `<` of a type argument list and the
/// `::` of a method reference, apart from `<`, `>` and `(`.
const TYPE_PREFIX_TOKENS: TokenSet = PRIMITIVE_TYPES.union(TokenSet::of(&[
    TokenKind::Ident,
    TokenKind::Dot,
    TokenKind::Comma,
    TokenKind::Question,
    TokenKind::Extends,
    TokenKind::Super,
    TokenKind::Amp,
    TokenKind::LBracket,
    TokenKind::RBracket,
    TokenKind::At,
]));

/// A syntactic predicate: a fragment of grammar tried speculatively to pick
/// between alternatives that fixed lookahead cannot separate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Probe {
    /// `final? Type Ident`: local variable declaration vs expression
    /// statement.
    LocalVariable,
    /// Modifiers then `class`: local class vs local variable.
    LocalClass,
    /// `( ReferenceType (& ClassType)* )` followed by a cast operand.
    ReferenceCast,
    /// `for ( final? Type Ident :`.
    EnhancedFor,
    /// `Type<Args> ::` in expression position vs relational `<`.
    GenericMethodRef,
    /// Annotations followed by `package`.
    AnnotatedPackage,
    /// `Outer.super(...)` at the start of a constructor body.
    ExplicitConstructor,
    /// Annotations followed by `[ ]` after a type.
    AnnotatedDims,
}

impl Probe {
    pub fn name(self) -> &'static str {
        match self {
            Probe::LocalVariable => "local variable",
            Probe::LocalClass => "local class",
            Probe::ReferenceCast => "reference cast",
            Probe::EnhancedFor => "enhanced for",
            Probe::GenericMethodRef => "generic method reference",
            Probe::AnnotatedPackage => "annotated package",
            Probe::ExplicitConstructor => "explicit constructor invocation",
            Probe::AnnotatedDims => "annotated dimensions",
        }
    }
}

/// Outcome of one probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    pub accepted: bool,
    /// Index the probe reached before it was rolled back.
    pub end: usize,
}

/// Probe cache plus matching-delimiter table for one parse.
#[derive(Debug, Default)]
pub struct PredictionMemo {
    results: FxHashMap<(Probe, usize), ProbeResult>,
    /// `delimiters[i]` is the index of the token closing the `(`, `[` or
    /// `{` at `i`. Built on first use.
    delimiters: Option<Vec<Option<u32>>>,
    /// Token range already known to hold no `Type<...>::` prefix: a scan
    /// from its start hit a token outside [`TYPE_PREFIX_TOKENS`] at its end.
    type_prefix_dead_end: Range<usize>,
    hits: usize,
}

impl PredictionMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, probe: Probe, index: usize) -> Option<ProbeResult> {
        let result = self.results.get(&(probe, index)).copied();
        if result.is_some() {
            self.hits += 1;
        }
        result
    }

    pub fn insert(&mut self, probe: Probe, index: usize, result: ProbeResult) {
        self.results.insert((probe, index), result);
    }

    /// Number of cached probe outcomes.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn clear(&mut self) {
        self.results.clear();
        self.delimiters = None;
        self.type_prefix_dead_end = 0..0;
        self.hits = 0;
    }

    /// Whether the tokens from the `<` at `open` could be type arguments
    /// leading up to a `::`.
    ///
    /// `false` is definite; `true` still needs the real rule. A scan that
    /// stops on a foreign token records the range it covered: any scan
    /// starting inside it would walk the same tokens and stop on the same
    /// one, so `x0 < x1 < ... < xn` costs one pass in total.
    pub fn may_be_type_prefix<S: TokenStream>(&mut self, stream: &S, open: usize) -> bool {
        if self.type_prefix_dead_end.contains(&open) {
            return false;
        }
        let mut depth = 0usize;
        let mut index = open;
        loop {
            match stream.kind_at(index) {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                TokenKind::ColonColon => return depth == 0,
                // Annotation arguments; leave them to the real rule.
                TokenKind::LParen => return true,
                kind if TYPE_PREFIX_TOKENS.contains(kind) => {}
                _ => {
                    trace!(open, stop = index, "type prefix dead end");
                    self.type_prefix_dead_end = open..index;
                    return false;
                }
            }
            index += 1;
        }
    }

    /// Index of the token closing the delimiter opened at `open`.
    ///
    /// `None` when `open` is not an opening delimiter or is never closed.
    pub fn matching_close<S: TokenStream>(&mut self, stream: &S, open: usize) -> Option<usize> {
        let table = self
            .delimiters
            .get_or_insert_with(|| build_delimiter_table(stream));
        table
            .get(open)
            .copied()
            .flatten()
            .map(|close| close as usize)
    }
}

fn closer_for(kind: TokenKind) -> Option<TokenKind> {
    match kind {
        TokenKind::LParen => Some(TokenKind::RParen),
        TokenKind::LBracket => Some(TokenKind::RBracket),
        TokenKind::LBrace => Some(TokenKind::RBrace),
        _ => None,
    }
}

/// One pass with a stack of open delimiters. A closer that does not match
/// the innermost opener is ignored, leaving mismatched openers unmatched.
fn build_delimiter_table<S: TokenStream>(stream: &S) -> Vec<Option<u32>> {
    let count = stream.token_count();
    let mut table = vec![None; count];
    let mut open: Vec<(usize, TokenKind)> = Vec::new();
    for index in 0..count {
        let kind = stream.kind_at(index);
        if let Some(closer) = closer_for(kind) {
            open.push((index, closer));
        } else if open.last().is_some_and(|&(_, closer)| closer == kind) {
            if let Some((opener, _)) = open.pop() {
                table[opener] = u32::try_from(index).ok();
            }
        }
    }
    trace!(tokens = count, unmatched = open.len(), "built delimiter table");
    table
}
