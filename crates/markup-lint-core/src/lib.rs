//! # markup-lint-core
//!
//! Core framework for linting JSX-like markup trees.
//!
//! This crate provides the foundational traits and types for building
//! markup linters. It includes:
//!
//! - [`tree`] — the markup tree data model hosts build their input from
//! - [`ContainerRule`] trait for per-container rules
//! - [`Analyzer`] for walking a tree and dispatching rules
//! - [`Diagnostic`] for representing lint findings
//!
//! The crate never parses source text: the embedding host supplies an
//! already-parsed tree ([`Document`]) and receives an ordered
//! [`LintResult`] back.
//!
//! ## Example
//!
//! ```ignore
//! use markup_lint_core::{Analyzer, Document};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze(&document);
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// Markup tree data model.
pub mod tree;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, Document};
pub use config::{Config, ConfigError, RuleConfig};
pub use context::DocumentContext;
pub use rule::{ContainerRule, RuleBox};
pub use tree::{ContainerKind, ContainerRef, Expression, LogicalOp, Node, Span};
pub use types::{Diagnostic, LintResult, Location, RenderedDiagnostic, Severity};
