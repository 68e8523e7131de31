//! Diagnostics for the Javelin lexer and parser.
//!
//! A [`Diagnostic`] pairs an [`ErrorCode`] with a message, a primary span
//! and optional notes. [`Renderer`] turns one into text, resolving spans to
//! `line:column` through a [`LineIndex`] when the source is at hand.

mod code;
mod diagnostic;
mod render;
mod source_map;

pub use code::{ErrorCode, Phase};
pub use diagnostic::{Diagnostic, Label, Severity};
pub use render::{ColorMode, Renderer};
pub use source_map::{LineIndex, Location};
