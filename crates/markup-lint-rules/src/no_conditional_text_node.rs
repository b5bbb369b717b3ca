//! Rule to forbid conditionally rendered text nodes or elements that have
//! sibling content.
//!
//! # Rationale
//!
//! Some rendering runtimes cache references to text nodes by position within
//! their parent. A `cond && 'text'` or ternary child that flips between
//! present and absent (or between text and element) across re-renders shifts
//! the positions of its siblings and can leave those cached references
//! pointing at stale nodes. With at most one real child there is nothing to
//! shift, so single-child containers are always safe.
//!
//! The check is purely syntactic: it looks for `&&` and ternary shapes with a
//! literal arm rather than evaluating truthiness. Expression shapes it does
//! not recognize are treated as not conditional, trading false negatives for
//! zero false positives on code it does not understand.
//!
//! # Examples
//!
//! ```jsx
//! // flagged (text-node): the text can vanish while <span> stays
//! <div>{condition && 'Welcome'}<span>Something</span></div>
//!
//! // flagged (element-before-text): the element can vanish before the text
//! <div>{condition && <span>Something</span>}Welcome</div>
//!
//! // safe: only one meaningful child
//! <div>{show && 'Welcome'}</div>
//! ```

use markup_lint_core::tree::{ContainerRef, Expression, LogicalOp, Node};
use markup_lint_core::{ContainerRule, Diagnostic, DocumentContext, Severity};
use tracing::trace;

/// Rule code for no-conditional-text-node.
pub const CODE: &str = "ML001";

/// Rule name for no-conditional-text-node.
pub const NAME: &str = "no-conditional-text-node";

/// How a flagged conditional can go stale relative to its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    /// The conditional itself can yield a bare text value.
    TextNode,
    /// The conditional yields an element positioned before guaranteed text.
    ElementBeforeText,
}

impl ConditionKind {
    /// Returns the machine-readable tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextNode => "text-node",
            Self::ElementBeforeText => "element-before-text",
        }
    }

    /// Returns the phrase used in the diagnostic message.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::TextNode => "a text node",
            Self::ElementBeforeText => "a conditional element before a text node",
        }
    }
}

/// Forbids conditional rendering of text nodes or elements with siblings.
#[derive(Debug, Clone)]
pub struct NoConditionalTextNode {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoConditionalTextNode {
    fn default() -> Self {
        Self::new()
    }
}

impl NoConditionalTextNode {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn diagnostic(
        &self,
        ctx: &DocumentContext<'_>,
        node: &Node,
        kind: ConditionKind,
    ) -> Diagnostic {
        Diagnostic::new(
            CODE,
            NAME,
            self.severity,
            ctx.location_for(node.span()),
            format!(
                "Conditional rendering of {} inside a parent with other children \
                 can lead to stale text-node references.",
                kind.describe()
            ),
        )
        .with_kind(kind.as_str())
    }
}

impl ContainerRule for NoConditionalTextNode {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids conditional rendering of text nodes or elements when they have siblings"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &DocumentContext<'_>, container: &ContainerRef<'_>) -> Vec<Diagnostic> {
        let kids = meaningful_children(container.children);
        if kids.len() <= 1 {
            // only one real child, nothing whose position could shift
            return Vec::new();
        }

        // indices of children guaranteed to render text, the protected
        // siblings a vanishing element must not be inserted before
        let text_indices: Vec<usize> = kids
            .iter()
            .enumerate()
            .filter(|(_, child)| is_text_bearing(child))
            .map(|(i, _)| i)
            .collect();

        let mut diagnostics = Vec::new();

        for (idx, child) in kids.iter().enumerate() {
            let Node::ExpressionSlot(slot) = child else {
                continue;
            };
            let expr = &slot.expression;
            if !is_conditional_like(expr) {
                continue;
            }

            // Case 1: the conditional itself can yield text
            if yields_text(expr) {
                trace!("conditional child {idx} yields text");
                diagnostics.push(self.diagnostic(ctx, child, ConditionKind::TextNode));
                continue;
            }

            // Case 2: the conditional yields an element before guaranteed text
            if text_indices.iter().any(|&ti| ti > idx) {
                trace!("conditional child {idx} precedes a text-bearing sibling");
                diagnostics.push(self.diagnostic(ctx, child, ConditionKind::ElementBeforeText));
            }
        }

        diagnostics
    }
}

/// Filters out text nodes that are only whitespace/tabs/newlines.
fn meaningful_children(children: &[Node]) -> Vec<&Node> {
    children
        .iter()
        .filter(|child| match child {
            Node::Text(text) => text.is_meaningful(),
            _ => true,
        })
        .collect()
}

/// Is this expression a ternary or an `&&` logical expression?
///
/// Only `&&` counts; `||` and `??` never conditionally remove their
/// right-hand side from the rendered output in the pattern this rule
/// targets.
fn is_conditional_like(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Logical {
            op: LogicalOp::And,
            ..
        } | Expression::Conditional { .. }
    )
}

/// Can this expression directly yield a literal text value?
fn yields_text(expr: &Expression) -> bool {
    match expr {
        Expression::Logical {
            op: LogicalOp::And,
            right,
            ..
        } => right.is_literal(),
        Expression::Conditional {
            consequent,
            alternate,
            ..
        } => consequent.is_literal() || alternate.is_literal(),
        _ => false,
    }
}

/// Is this meaningful child guaranteed to render literal text?
fn is_text_bearing(child: &Node) -> bool {
    match child {
        Node::Text(text) => text.is_meaningful(),
        Node::ExpressionSlot(slot) => slot.expression.is_literal(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(children: Vec<Node>) -> Vec<Diagnostic> {
        let ctx = DocumentContext::new(Path::new("app.jsx"));
        let container = Node::element("div", children);
        NoConditionalTextNode::new().check(&ctx, &container.as_container().unwrap())
    }

    fn kinds(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics
            .iter()
            .map(|d| d.kind.as_deref().unwrap_or(""))
            .collect()
    }

    // <div>{show && 'Welcome'}</div>
    #[test]
    fn single_conditional_text_child_is_safe() {
        let diagnostics = check(vec![Node::slot(Expression::and(
            Expression::ident("show"),
            Expression::str_lit("Welcome"),
        ))]);
        assert!(diagnostics.is_empty());
    }

    // <div><span>Hello</span></div>
    #[test]
    fn plain_children_without_conditionals_are_safe() {
        let diagnostics = check(vec![Node::element("span", vec![Node::text("Hello")])]);
        assert!(diagnostics.is_empty());
    }

    // <div>{condition && <span>Welcome</span>}<span>Hello</span></div>
    #[test]
    fn conditional_element_without_text_sibling_is_safe() {
        let diagnostics = check(vec![
            Node::slot(Expression::and(
                Expression::ident("condition"),
                Expression::element("span", vec![Node::text("Welcome")]),
            )),
            Node::element("span", vec![Node::text("Hello")]),
        ]);
        assert!(diagnostics.is_empty());
    }

    // <div>{condition && 'Welcome'}<span>Something</span></div>
    #[test]
    fn conditional_text_with_sibling_is_flagged() {
        let diagnostics = check(vec![
            Node::slot(Expression::and(
                Expression::ident("condition"),
                Expression::str_lit("Welcome"),
            )),
            Node::element("span", vec![Node::text("Something")]),
        ]);
        assert_eq!(kinds(&diagnostics), ["text-node"]);
        assert_eq!(
            diagnostics[0].message,
            "Conditional rendering of a text node inside a parent with other \
             children can lead to stale text-node references."
        );
    }

    // <div>{condition && <span>Something</span>}Welcome</div>
    #[test]
    fn conditional_element_before_text_is_flagged() {
        let diagnostics = check(vec![
            Node::slot(Expression::and(
                Expression::ident("condition"),
                Expression::element("span", vec![Node::text("Something")]),
            )),
            Node::text("Welcome"),
        ]);
        assert_eq!(kinds(&diagnostics), ["element-before-text"]);
        assert_eq!(
            diagnostics[0].message,
            "Conditional rendering of a conditional element before a text node \
             inside a parent with other children can lead to stale text-node \
             references."
        );
    }

    // <div>{a ? 'X' : <span/>}<span/></div>
    #[test]
    fn ternary_with_literal_consequent_is_flagged_as_text() {
        let diagnostics = check(vec![
            Node::slot(Expression::ternary(
                Expression::ident("a"),
                Expression::str_lit("X"),
                Expression::element("span", vec![]),
            )),
            Node::element("span", vec![]),
        ]);
        assert_eq!(kinds(&diagnostics), ["text-node"]);
    }

    #[test]
    fn ternary_with_literal_alternate_is_flagged_as_text() {
        let diagnostics = check(vec![
            Node::slot(Expression::ternary(
                Expression::ident("a"),
                Expression::element("span", vec![]),
                Expression::str_lit("X"),
            )),
            Node::element("span", vec![]),
        ]);
        assert_eq!(kinds(&diagnostics), ["text-node"]);
    }

    #[test]
    fn ternary_of_two_elements_without_later_text_is_safe() {
        let diagnostics = check(vec![
            Node::slot(Expression::ternary(
                Expression::ident("a"),
                Expression::element("b", vec![]),
                Expression::element("i", vec![]),
            )),
            Node::element("span", vec![]),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn ternary_of_two_elements_before_literal_slot_is_flagged() {
        let diagnostics = check(vec![
            Node::slot(Expression::ternary(
                Expression::ident("a"),
                Expression::element("b", vec![]),
                Expression::element("i", vec![]),
            )),
            Node::slot(Expression::str_lit("Welcome")),
        ]);
        assert_eq!(kinds(&diagnostics), ["element-before-text"]);
    }

    #[test]
    fn text_before_conditional_element_is_safe() {
        // the protected text comes first, so nothing is inserted before it
        let diagnostics = check(vec![
            Node::text("Welcome"),
            Node::slot(Expression::and(
                Expression::ident("condition"),
                Expression::element("span", vec![]),
            )),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn logical_or_is_never_conditional_like() {
        let diagnostics = check(vec![
            Node::slot(Expression::or(
                Expression::ident("fallback"),
                Expression::str_lit("Welcome"),
            )),
            Node::element("span", vec![Node::text("Something")]),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn nullish_coalescing_is_never_conditional_like() {
        let diagnostics = check(vec![
            Node::slot(Expression::Logical {
                op: LogicalOp::NullishCoalescing,
                left: Box::new(Expression::ident("maybe")),
                right: Box::new(Expression::str_lit("Welcome")),
            }),
            Node::text("Something"),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn whitespace_text_nodes_do_not_count_as_siblings() {
        // pretty-printed markup: indentation around a single conditional
        let diagnostics = check(vec![
            Node::text("\n  "),
            Node::slot(Expression::and(
                Expression::ident("show"),
                Expression::str_lit("Welcome"),
            )),
            Node::text("\n"),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn whitespace_does_not_shift_indices() {
        // same diagnostics with or without interleaved whitespace
        let without_ws = check(vec![
            Node::slot(Expression::and(
                Expression::ident("condition"),
                Expression::element("span", vec![]),
            )),
            Node::text("Welcome"),
        ]);
        let with_ws = check(vec![
            Node::text("\n  "),
            Node::slot(Expression::and(
                Expression::ident("condition"),
                Expression::element("span", vec![]),
            )),
            Node::text("\n  "),
            Node::text("Welcome"),
            Node::text("\n"),
        ]);
        assert_eq!(kinds(&without_ws), kinds(&with_ws));
    }

    #[test]
    fn text_node_case_wins_over_element_before_text() {
        // yields_text holds and a later text sibling exists; only the
        // text-node diagnostic is emitted for the slot
        let diagnostics = check(vec![
            Node::slot(Expression::and(
                Expression::ident("condition"),
                Expression::str_lit("Welcome"),
            )),
            Node::text("Something"),
        ]);
        assert_eq!(kinds(&diagnostics), ["text-node"]);
    }

    #[test]
    fn multiple_conditionals_report_in_document_order() {
        let diagnostics = check(vec![
            Node::slot(Expression::and(
                Expression::ident("a"),
                Expression::element("b", vec![]),
            )),
            Node::slot(Expression::and(
                Expression::ident("c"),
                Expression::str_lit("mid"),
            )),
            Node::text("tail"),
        ]);
        assert_eq!(kinds(&diagnostics), ["element-before-text", "text-node"]);
    }

    #[test]
    fn unrecognized_expressions_are_ignored() {
        let diagnostics = check(vec![
            Node::slot(Expression::Other),
            Node::slot(Expression::ident("x")),
            Node::text("Something"),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn empty_container_is_safe() {
        assert!(check(vec![]).is_empty());
    }

    #[test]
    fn numeric_literal_arm_counts_as_text() {
        let diagnostics = check(vec![
            Node::slot(Expression::and(
                Expression::ident("count"),
                Expression::number(0.0),
            )),
            Node::element("span", vec![]),
        ]);
        assert_eq!(kinds(&diagnostics), ["text-node"]);
    }

    #[test]
    fn fragment_containers_are_checked_too() {
        let ctx = DocumentContext::new(Path::new("app.jsx"));
        let container = Node::fragment(vec![
            Node::slot(Expression::and(
                Expression::ident("condition"),
                Expression::str_lit("Welcome"),
            )),
            Node::element("span", vec![]),
        ]);
        let diagnostics =
            NoConditionalTextNode::new().check(&ctx, &container.as_container().unwrap());
        assert_eq!(kinds(&diagnostics), ["text-node"]);
    }

    #[test]
    fn diagnostic_location_points_at_the_slot() {
        use markup_lint_core::Span;

        let ctx = DocumentContext::new(Path::new("app.jsx"));
        let container = Node::element(
            "div",
            vec![
                Node::slot(Expression::and(
                    Expression::ident("condition"),
                    Expression::str_lit("Welcome"),
                ))
                .with_span(Span::new(2, 11, 16, 24)),
                Node::element("span", vec![]),
            ],
        );
        let diagnostics =
            NoConditionalTextNode::new().check(&ctx, &container.as_container().unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.line, 2);
        assert_eq!(diagnostics[0].location.column, 11);
        assert_eq!(diagnostics[0].location.offset, 16);
        assert_eq!(diagnostics[0].location.length, 24);
    }

    #[test]
    fn diagnostic_format_snapshot() {
        use markup_lint_core::Span;

        let ctx = DocumentContext::new(Path::new("app.jsx"));
        let container = Node::element(
            "div",
            vec![
                Node::slot(Expression::and(
                    Expression::ident("condition"),
                    Expression::str_lit("Welcome"),
                ))
                .with_span(Span::new(2, 11, 16, 24)),
                Node::element("span", vec![]),
            ],
        );
        let diagnostics =
            NoConditionalTextNode::new().check(&ctx, &container.as_container().unwrap());
        insta::assert_snapshot!(diagnostics[0].format(), @r"
        ML001 no-conditional-text-node at app.jsx:2:11
          error: Conditional rendering of a text node inside a parent with other children can lead to stale text-node references.
        ");
    }

    #[test]
    fn severity_builder_applies() {
        let ctx = DocumentContext::new(Path::new("app.jsx"));
        let container = Node::element(
            "div",
            vec![
                Node::slot(Expression::and(
                    Expression::ident("condition"),
                    Expression::str_lit("Welcome"),
                )),
                Node::element("span", vec![]),
            ],
        );
        let diagnostics = NoConditionalTextNode::new()
            .severity(Severity::Warning)
            .check(&ctx, &container.as_container().unwrap());
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }
}
