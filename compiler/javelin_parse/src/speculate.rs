//! Syntactic predicates.
//!
//! A probe marks the stream, runs real rule functions over the ambiguous
//! fragment and always restores, so the caller sees only accept or reject.
//! Tokens consumed while speculating count against
//! [`ParseOptions::speculation_budget`](crate::ParseOptions).

use tracing::debug;

use crate::memo::{Probe, ProbeResult};
use crate::stream::TokenStream;
use crate::{ParseError, ParseErrorKind, Parser};

impl<S: TokenStream> Parser<S> {
    /// Run `fragment` speculatively and report whether it parsed.
    ///
    /// The stream position is unchanged on return. Input errors inside the
    /// fragment become a rejection; fatal errors propagate.
    pub(crate) fn speculate(
        &mut self,
        probe: Probe,
        fragment: impl FnOnce(&mut Self) -> Result<(), ParseError>,
    ) -> Result<bool, ParseError> {
        let start = self.stream.index();
        if self.options.memoize {
            if let Some(cached) = self.memo.get(probe, start) {
                debug!(probe = probe.name(), start, accepted = cached.accepted, "probe (memo)");
                return Ok(cached.accepted);
            }
        }

        let checkpoint = self.stream.mark();
        self.speculation_depth += 1;
        let outcome = fragment(self);
        self.speculation_depth -= 1;
        let end = self.stream.index();
        self.stream.restore(checkpoint)?;

        let accepted = match outcome {
            Ok(()) => true,
            Err(err) if err.is_fatal() => return Err(err),
            Err(_) => false,
        };
        if self.options.memoize {
            self.memo.insert(probe, start, ProbeResult { accepted, end });
        }
        debug!(probe = probe.name(), start, end, accepted, "probe");
        Ok(accepted)
    }

    /// Count one consumed token against the budget when speculating.
    #[inline]
    pub(crate) fn charge_speculation(&mut self) -> Result<(), ParseError> {
        if self.speculation_depth == 0 {
            return Ok(());
        }
        self.speculated += 1;
        if self.speculated > self.options.speculation_budget {
            return Err(self.budget_exceeded());
        }
        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn budget_exceeded(&self) -> ParseError {
        ParseError::new(
            ParseErrorKind::SpeculationBudgetExceeded {
                budget: self.options.speculation_budget,
            },
            self.stream.lt(1).span,
            self.stream.index(),
        )
    }
}
