//! # markup-lint-rules
//!
//! Built-in lint rules for markup-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | ML001 | `no-conditional-text-node` | Forbids conditionally rendered text nodes or elements with siblings |
//!
//! ## Usage
//!
//! ```ignore
//! use markup_lint_core::Analyzer;
//! use markup_lint_rules::NoConditionalTextNode;
//!
//! let analyzer = Analyzer::builder()
//!     .rule(NoConditionalTextNode::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_conditional_text_node;
mod presets;

pub use no_conditional_text_node::{ConditionKind, NoConditionalTextNode};
pub use presets::{all_rules, lenient_rules, recommended_rules, Preset};

/// Re-export core types for convenience.
pub use markup_lint_core::{ContainerRule, Diagnostic, Severity};
