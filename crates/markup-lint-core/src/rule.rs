//! Rule trait for defining per-container lint rules.

use crate::context::DocumentContext;
use crate::tree::ContainerRef;
use crate::types::{Diagnostic, Severity};

/// A lint rule that inspects one container's child list at a time.
///
/// The analyzer invokes [`check`](ContainerRule::check) once per container
/// node (element or fragment) as it walks the tree. Rules are pure functions
/// of the container's ordered children: no mutation, no recursion into nested
/// containers (the analyzer drives that), and no failure path — a rule that
/// does not understand a node or expression shape must treat it as
/// uninteresting rather than erroring.
///
/// # Example
///
/// ```ignore
/// use markup_lint_core::{ContainerRule, DocumentContext, Diagnostic};
/// use markup_lint_core::tree::ContainerRef;
///
/// pub struct NoEmptyElements;
///
/// impl ContainerRule for NoEmptyElements {
///     fn name(&self) -> &'static str { "no-empty-elements" }
///     fn code(&self) -> &'static str { "ML099" }
///
///     fn check(&self, ctx: &DocumentContext, container: &ContainerRef) -> Vec<Diagnostic> {
///         // inspect container.children ...
///         vec![]
///     }
/// }
/// ```
pub trait ContainerRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-conditional-text-node").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "ML001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single container and returns any diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the document being checked
    /// * `container` - The container node's kind, children, and span
    ///
    /// # Returns
    ///
    /// Diagnostics for this container, in document order.
    fn check(&self, ctx: &DocumentContext, container: &ContainerRef<'_>) -> Vec<Diagnostic>;
}

/// Type alias for boxed `ContainerRule` trait objects.
pub type RuleBox = Box<dyn ContainerRule>;
