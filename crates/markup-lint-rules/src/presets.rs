//! Rule presets for common configurations.

use crate::NoConditionalTextNode;
use markup_lint_core::{RuleBox, Severity};

/// Preset configurations for markup-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// All available rules, reported as warnings for gradual adoption.
    Lenient,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Lenient => lenient_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `no-conditional-text-node` (ML001) - Forbids conditionally rendered
///   text nodes or elements with siblings
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![Box::new(NoConditionalTextNode::new())]
}

/// Returns all rules downgraded to warnings, for gradual adoption.
#[must_use]
pub fn lenient_rules() -> Vec<RuleBox> {
    vec![Box::new(
        NoConditionalTextNode::new().severity(Severity::Warning),
    )]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(NoConditionalTextNode::new())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_not_empty() {
        assert!(!Preset::Recommended.rules().is_empty());
        assert!(!Preset::Lenient.rules().is_empty());
        assert!(!all_rules().is_empty());
    }

    #[test]
    fn lenient_downgrades_severity() {
        for rule in Preset::Lenient.rules() {
            assert_eq!(rule.default_severity(), Severity::Warning);
        }
    }
}
