//! # markup-lint
//!
//! Linter for JSX-like markup trees.
//!
//! This is the main facade crate that re-exports core functionality and the
//! built-in rules. The linter does not parse source text: the embedding host
//! builds a [`Document`] from its own parser's output and hands it over.
//!
//! ## Quick Start
//!
//! ```
//! use markup_lint::{lint_document, Document, Expression, Node};
//!
//! // <div>{condition && 'Welcome'}<span>Something</span></div>
//! let doc = Document::new(
//!     "app.jsx",
//!     vec![Node::element(
//!         "div",
//!         vec![
//!             Node::slot(Expression::and(
//!                 Expression::ident("condition"),
//!                 Expression::str_lit("Welcome"),
//!             )),
//!             Node::element("span", vec![Node::text("Something")]),
//!         ],
//!     )],
//! );
//!
//! let result = lint_document(&doc);
//! assert!(result.has_errors());
//! ```
//!
//! ## `cargo test` Integration
//!
//! Hosts that keep golden markup trees in their test suite can fail the
//! build on lint findings:
//!
//! ```rust,ignore
//! // tests/markup.rs
//! #[test]
//! fn markup_is_lint_clean() {
//!     markup_lint::runner::run_check(&documents, None);
//! }
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use markup_lint::{Analyzer, rules};
//!
//! let mut builder = Analyzer::builder();
//! for rule in rules::recommended_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! let analyzer = builder.build()?;
//! let result = analyzer.analyze(&document);
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use markup_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use markup_lint_rules::*;
}

pub mod runner;

/// Lints a single document with the recommended rule set.
///
/// Convenience wrapper for hosts that do not need custom configuration.
///
/// # Panics
///
/// Panics if the analyzer cannot be built, which cannot happen without a
/// user-supplied config.
#[must_use]
pub fn lint_document(doc: &Document) -> LintResult {
    let mut builder = Analyzer::builder();
    for rule in markup_lint_rules::recommended_rules() {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().unwrap_or_else(|e| {
        panic!("markup-lint: failed to build analyzer: {e}");
    });
    analyzer.analyze(doc)
}
