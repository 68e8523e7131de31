//! Parser configuration.

use tracing::warn;

/// Default cap on tokens consumed by speculative probes in one parse.
pub const DEFAULT_SPECULATION_BUDGET: usize = 1 << 20;

/// Tuning knobs for one parse.
///
/// ```text
/// let options = ParseOptions::default().with_speculation_budget(4096);
/// let tree = javelin_parse::compilation_unit_with(&tokens, options)?;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Total tokens all probes of one parse may consume before the parse
    /// fails with `SpeculationBudgetExceeded`.
    pub speculation_budget: usize,
    /// Cache probe outcomes per `(probe, token index)`.
    pub memoize: bool,
    /// Check every decision-table lookup for equally specific rows naming
    /// different alternatives.
    pub detect_ambiguity: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            speculation_budget: DEFAULT_SPECULATION_BUDGET,
            memoize: true,
            detect_ambiguity: cfg!(debug_assertions),
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_speculation_budget(mut self, budget: usize) -> Self {
        self.speculation_budget = budget;
        self
    }

    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    #[must_use]
    pub fn with_detect_ambiguity(mut self, detect: bool) -> Self {
        self.detect_ambiguity = detect;
        self
    }

    /// Defaults overridden by `JAVELIN_SPECULATION_BUDGET`,
    /// `JAVELIN_NO_MEMO` and `JAVELIN_DETECT_AMBIGUITY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = ParseOptions::default();
        if let Some(raw) = lookup("JAVELIN_SPECULATION_BUDGET") {
            match raw.trim().parse::<usize>() {
                Ok(budget) => options.speculation_budget = budget,
                Err(_) => warn!(value = %raw, "ignoring invalid JAVELIN_SPECULATION_BUDGET"),
            }
        }
        if let Some(raw) = lookup("JAVELIN_NO_MEMO") {
            options.memoize = !is_truthy(&raw);
        }
        if let Some(raw) = lookup("JAVELIN_DETECT_AMBIGUITY") {
            options.detect_ambiguity = is_truthy(&raw);
        }
        options
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
