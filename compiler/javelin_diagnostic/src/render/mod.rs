//! Plain-text rendering of diagnostics against their source.
//!
//! ```text
//! error[E1001]: unexpected `;`, expected expression
//!  --> Foo.java:1:9
//!   |
//! 1 | int x = ;
//!   |         ^ unexpected `;`
//!   = note: while parsing a variable initializer
//! ```

use std::fmt::{self, Write};

use crate::{Diagnostic, Label, LineIndex, Severity};

const RED: &str = "\x1b[1;31m";
const MAGENTA: &str = "\x1b[1;35m";
const BLUE: &str = "\x1b[1;34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Whether rendered output carries ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Renders diagnostics for one source file.
pub struct Renderer<'src> {
    path: &'src str,
    source: &'src str,
    lines: LineIndex,
    color: bool,
}

impl<'src> Renderer<'src> {
    pub fn new(path: &'src str, source: &'src str) -> Self {
        Renderer {
            path,
            source,
            lines: LineIndex::new(source),
            color: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, mode: ColorMode, is_terminal: bool) -> Self {
        self.color = mode.enabled(is_terminal);
        self
    }

    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write(&mut out, diagnostic);
        out
    }

    pub fn write(&self, out: &mut impl Write, diagnostic: &Diagnostic) -> fmt::Result {
        let severity_color = match diagnostic.severity {
            Severity::Error => RED,
            Severity::Bug => MAGENTA,
        };
        self.paint(out, severity_color, diagnostic.severity.as_str())?;
        self.paint(out, BOLD, &format!("[{}]", diagnostic.code))?;
        writeln!(out, ": {}", diagnostic.message)?;

        let gutter = self.gutter_width(diagnostic);
        if let Some(span) = diagnostic.primary_span() {
            let at = self.lines.locate(self.source, span.start);
            writeln!(out, "{:gutter$}--> {}:{at}", "", self.path)?;
        }
        for label in &diagnostic.labels {
            self.write_snippet(out, gutter, label)?;
        }
        for note in &diagnostic.notes {
            writeln!(out, "{:gutter$} = note: {note}", "")?;
        }
        if let Some(help) = &diagnostic.help {
            writeln!(out, "{:gutter$} = help: {help}", "")?;
        }
        Ok(())
    }

    /// Width of the widest line number any label points at.
    fn gutter_width(&self, diagnostic: &Diagnostic) -> usize {
        diagnostic
            .labels
            .iter()
            .map(|label| self.lines.locate(self.source, label.span.start).line)
            .max()
            .map_or(1, |line| line.to_string().len())
    }

    fn write_snippet(&self, out: &mut impl Write, gutter: usize, label: &Label) -> fmt::Result {
        let at = self.lines.locate(self.source, label.span.start);
        let Some(text) = self.lines.line(self.source, at.line) else {
            return Ok(());
        };
        // Underline at most to the end of the first line.
        let remaining = text.chars().count().saturating_sub(at.column as usize - 1);
        let width = self
            .source
            .get(label.span.to_range())
            .map_or(1, |s| s.chars().count())
            .clamp(1, remaining.max(1));
        let (marker, color) = if label.primary { ('^', RED) } else { ('-', BLUE) };

        writeln!(out, "{:gutter$} |", "")?;
        writeln!(out, "{:>gutter$} | {text}", at.line)?;
        write!(out, "{:gutter$} | {:pad$}", "", "", pad = at.column as usize - 1)?;
        let underline = marker.to_string().repeat(width);
        self.paint(out, color, &underline)?;
        if label.message.is_empty() {
            writeln!(out)
        } else {
            out.write_char(' ')?;
            self.paint(out, color, &label.message)?;
            writeln!(out)
        }
    }

    fn paint(&self, out: &mut impl Write, color: &str, text: &str) -> fmt::Result {
        if self.color {
            write!(out, "{color}{text}{RESET}")
        } else {
            out.write_str(text)
        }
    }
}
