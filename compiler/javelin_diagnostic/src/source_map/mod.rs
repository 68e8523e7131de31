//! Byte offset to line/column translation.

use std::fmt;

/// One-based position in a source text. `column` counts characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start offsets of every line in a source text.
///
/// ```
/// use javelin_diagnostic::{LineIndex, Location};
///
/// let source = "class A {\n  int x;\n}";
/// let index = LineIndex::new(source);
/// assert_eq!(index.locate(source, 12), Location { line: 2, column: 3 });
/// assert_eq!(index.line(source, 2), Some("  int x;"));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(at, _)| at + 1))
            .collect();
        LineIndex { starts }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Zero-based index of the line holding byte `offset`.
    fn line_index(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset) - 1
    }

    /// Locate `offset`, clamped to the end of `source`.
    pub fn locate(&self, source: &str, offset: u32) -> Location {
        let offset = (offset as usize).min(source.len());
        let index = self.line_index(offset);
        let start = self.starts[index];
        let column = source.get(start..offset).map_or(0, |text| text.chars().count());
        Location {
            line: to_u32(index + 1),
            column: to_u32(column + 1),
        }
    }

    /// Text of one-based `line` without its line terminator.
    pub fn line<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.starts.get(index)?;
        let end = self.starts.get(index + 1).copied().unwrap_or(source.len());
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
