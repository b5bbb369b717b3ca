//! Core analyzer for orchestrating lint execution over markup trees.

use crate::config::Config;
use crate::context::DocumentContext;
use crate::rule::{ContainerRule, RuleBox};
use crate::tree::{ContainerRef, Expression, Node};
use crate::types::LintResult;

use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building an analyzer.
///
/// Analysis itself never fails: rules are total functions over well-formed
/// trees, and unknown node shapes are simply ignored.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Configuration references a rule that is not registered.
    #[error("Configuration references unknown rule: {name}")]
    UnknownRule {
        /// The unmatched rule name from the config.
        name: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// A parsed markup document supplied whole by the host.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path of the document, used for diagnostic locations.
    pub path: PathBuf,
    /// Top-level nodes in document order.
    pub children: Vec<Node>,
}

impl Document {
    /// Creates a new document.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, children: Vec<Node>) -> Self {
        Self {
            path: path.into(),
            children,
        }
    }
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: ContainerRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration names a rule that was not
    /// registered, which usually indicates a typo in a config key.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        for name in config.rules.keys() {
            if !self.rules.iter().any(|r| r.name() == name) {
                return Err(AnalyzerError::UnknownRule { name: name.clone() });
            }
        }

        Ok(Analyzer {
            rules: self.rules,
            config,
        })
    }
}

/// The main analyzer that walks markup trees and dispatches rules.
///
/// The analyzer owns the traversal: it visits every container node in the
/// tree (pre-order, descending into expression arms so that elements nested
/// inside conditionals are also checked) and invokes each enabled rule once
/// per container. Rules never recurse themselves.
///
/// `analyze` takes `&self` and keeps no state between calls, so a single
/// analyzer may be shared across threads to lint disjoint documents
/// concurrently.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes a single document and returns the results.
    ///
    /// Diagnostics are emitted in tree order: an outer container's
    /// diagnostics precede those of its nested containers, and within one
    /// container children are reported in document order.
    #[must_use]
    pub fn analyze(&self, doc: &Document) -> LintResult {
        info!("Linting {}", doc.path.display());

        let ctx = DocumentContext::new(&doc.path);
        let mut result = LintResult::new();

        for node in &doc.children {
            self.walk_node(&ctx, node, &mut result);
        }

        info!(
            "Lint complete: {} diagnostic(s) in {} container(s)",
            result.diagnostics.len(),
            result.containers_checked
        );

        result
    }

    /// Analyzes several documents and merges the results.
    #[must_use]
    pub fn analyze_all(&self, docs: &[Document]) -> LintResult {
        let mut result = LintResult::new();
        for doc in docs {
            result.extend(self.analyze(doc));
        }
        result
    }

    /// Visits one node: containers are checked then recursed into.
    fn walk_node(&self, ctx: &DocumentContext<'_>, node: &Node, result: &mut LintResult) {
        match node {
            Node::Element(el) => {
                self.check_container(ctx, &el.as_container(), result);
                for child in &el.children {
                    self.walk_node(ctx, child, result);
                }
            }
            Node::Fragment(frag) => {
                self.check_container(ctx, &frag.as_container(), result);
                for child in &frag.children {
                    self.walk_node(ctx, child, result);
                }
            }
            Node::ExpressionSlot(slot) => {
                self.walk_expression(ctx, &slot.expression, result);
            }
            Node::Text(_) | Node::Opaque => {}
        }
    }

    /// Descends into expression arms looking for nested elements.
    fn walk_expression(&self, ctx: &DocumentContext<'_>, expr: &Expression, result: &mut LintResult) {
        match expr {
            Expression::Logical { left, right, .. } => {
                self.walk_expression(ctx, left, result);
                self.walk_expression(ctx, right, result);
            }
            Expression::Conditional {
                test,
                consequent,
                alternate,
            } => {
                self.walk_expression(ctx, test, result);
                self.walk_expression(ctx, consequent, result);
                self.walk_expression(ctx, alternate, result);
            }
            Expression::Element(el) => {
                self.check_container(ctx, &el.as_container(), result);
                for child in &el.children {
                    self.walk_node(ctx, child, result);
                }
            }
            Expression::Literal(_) | Expression::Ident { .. } | Expression::Other => {}
        }
    }

    /// Runs every enabled rule against one container.
    fn check_container(
        &self,
        ctx: &DocumentContext<'_>,
        container: &ContainerRef<'_>,
        result: &mut LintResult,
    ) {
        debug!("Checking container with {} children", container.children.len());
        result.containers_checked += 1;

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let mut diagnostics = rule.check(ctx, container);

            if let Some(severity) = self.config.rule_severity(rule.name()) {
                for d in &mut diagnostics {
                    d.severity = severity;
                }
            }

            result.diagnostics.extend(diagnostics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Diagnostic, Severity};

    /// Flags every container it sees, tagging the diagnostic with the
    /// child count so tests can observe visit order.
    struct FlagEveryContainer;

    impl ContainerRule for FlagEveryContainer {
        fn name(&self) -> &'static str {
            "flag-every-container"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn check(&self, ctx: &DocumentContext<'_>, container: &ContainerRef<'_>) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.code(),
                self.name(),
                self.default_severity(),
                ctx.location_for(container.span),
                format!("container with {} children", container.children.len()),
            )]
        }
    }

    fn doc(children: Vec<Node>) -> Document {
        Document::new("app.jsx", children)
    }

    #[test]
    fn walks_nested_containers_pre_order() {
        let analyzer = Analyzer::builder().rule(FlagEveryContainer).build().unwrap();

        let tree = Node::element(
            "div",
            vec![
                Node::element("span", vec![Node::text("hi")]),
                Node::element("p", vec![]),
            ],
        );

        let result = analyzer.analyze(&doc(vec![tree]));
        assert_eq!(result.containers_checked, 3);
        assert_eq!(result.diagnostics.len(), 3);
        // outer div first, then its children left to right
        assert!(result.diagnostics[0].message.contains("2 children"));
        assert!(result.diagnostics[1].message.contains("1 children"));
        assert!(result.diagnostics[2].message.contains("0 children"));
    }

    #[test]
    fn walks_elements_inside_expression_arms() {
        let analyzer = Analyzer::builder().rule(FlagEveryContainer).build().unwrap();

        let tree = Node::element(
            "div",
            vec![Node::slot(Expression::and(
                Expression::ident("cond"),
                Expression::element("span", vec![Node::text("Something")]),
            ))],
        );

        let result = analyzer.analyze(&doc(vec![tree]));
        // the outer div and the span nested in the && arm
        assert_eq!(result.containers_checked, 2);
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let config = Config::parse(
            r"
[rules.flag-every-container]
enabled = false
",
        )
        .unwrap();

        let analyzer = Analyzer::builder()
            .rule(FlagEveryContainer)
            .config(config)
            .build()
            .unwrap();

        let result = analyzer.analyze(&doc(vec![Node::element("div", vec![])]));
        assert_eq!(result.containers_checked, 1);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn severity_override_applies() {
        let config = Config::parse(
            r#"
[rules.flag-every-container]
severity = "info"
"#,
        )
        .unwrap();

        let analyzer = Analyzer::builder()
            .rule(FlagEveryContainer)
            .config(config)
            .build()
            .unwrap();

        let result = analyzer.analyze(&doc(vec![Node::element("div", vec![])]));
        assert_eq!(result.diagnostics[0].severity, Severity::Info);
    }

    #[test]
    fn unknown_rule_in_config_fails_build() {
        let config = Config::parse(
            r"
[rules.no-such-rule]
enabled = false
",
        )
        .unwrap();

        let err = Analyzer::builder()
            .rule(FlagEveryContainer)
            .config(config)
            .build()
            .unwrap_err();

        assert!(matches!(err, AnalyzerError::UnknownRule { ref name } if name == "no-such-rule"));
    }

    #[test]
    fn empty_document_checks_nothing() {
        let analyzer = Analyzer::builder().rule(FlagEveryContainer).build().unwrap();
        let result = analyzer.analyze(&doc(vec![Node::text("just text")]));
        assert_eq!(result.containers_checked, 0);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn analyze_all_merges_results() {
        let analyzer = Analyzer::builder().rule(FlagEveryContainer).build().unwrap();
        let docs = vec![
            doc(vec![Node::element("div", vec![])]),
            doc(vec![Node::fragment(vec![])]),
        ];
        let result = analyzer.analyze_all(&docs);
        assert_eq!(result.containers_checked, 2);
        assert_eq!(result.diagnostics.len(), 2);
    }
}
