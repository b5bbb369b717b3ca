//! Test-suite runner for `cargo test` integration.
//!
//! Hosts that keep canonical markup trees in their test suite call
//! [`run_check`] from a test function; it panics with a formatted report if
//! any diagnostic at or above the failure threshold is found.

use markup_lint_core::{Analyzer, Config, Document, Severity};
use markup_lint_rules::recommended_rules;

/// Runs markup-lint over the given documents as part of `cargo test`.
///
/// Uses the recommended rule set, honoring enable/severity overrides from
/// `config`. The failure threshold is `config.fail_on` when set, otherwise
/// [`Severity::Error`].
///
/// # Panics
///
/// Panics if diagnostics at or above the failure threshold are found, or if
/// the config references an unknown rule.
pub fn run_check(documents: &[Document], config: Option<Config>) {
    let config = config.unwrap_or_default();
    let fail_on = config.fail_on.unwrap_or(Severity::Error);

    let mut builder = Analyzer::builder().config(config);
    for rule in recommended_rules() {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().unwrap_or_else(|e| {
        panic!("markup-lint: failed to build analyzer: {e}");
    });

    let result = analyzer.analyze_all(documents);

    if result.has_diagnostics_at(fail_on) {
        let report = result.format_test_report(fail_on);
        panic!("{report}");
    }
}
