//! Context types for rule execution.

use crate::tree::Span;
use crate::types::Location;
use std::path::Path;

/// Context provided to per-container rules.
///
/// Carries what a rule needs to build diagnostic locations. There is
/// deliberately no source text here: the host supplies a parsed tree, and
/// node positions travel on the nodes themselves as [`Span`]s.
#[derive(Debug, Clone, Copy)]
pub struct DocumentContext<'a> {
    /// Path of the document being checked, as supplied by the host.
    pub path: &'a Path,
}

impl<'a> DocumentContext<'a> {
    /// Creates a new document context.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Builds a diagnostic [`Location`] from a node span.
    #[must_use]
    pub fn location_for(&self, span: Span) -> Location {
        Location::new(self.path.to_path_buf(), span.line, span.column)
            .with_span(span.offset, span.length)
    }
}
