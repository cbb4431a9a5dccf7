//! Rule trait for defining SRS checks.

use crate::context::SpecContext;
use crate::types::{Finding, Severity};

/// A validation rule over a loaded spec directory.
///
/// Rules are pure functions of the [`SpecContext`]: they never re-read files
/// and return their findings in a deterministic order.
///
/// # Example
///
/// ```ignore
/// use srs_lint_core::{Finding, Rule, SpecContext};
///
/// pub struct RequireGlossary;
///
/// impl Rule for RequireGlossary {
///     fn name(&self) -> &'static str { "require-glossary" }
///     fn code(&self) -> &'static str { "SRS100" }
///
///     fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
///         if ctx.first_with_prefix("08").is_none() {
///             vec![Finding::new(self.code(), self.name(), self.default_severity(),
///                 "Missing glossary section.")]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "required-sections").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "SRS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    ///
    /// Rules that mix severities report the most severe one.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks the spec directory and returns findings in emission order.
    fn check(&self, ctx: &SpecContext) -> Vec<Finding>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::SpecSet;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
            ctx.file_names
                .iter()
                .map(|name| {
                    Finding::new(
                        self.code(),
                        self.name(),
                        self.default_severity(),
                        format!("saw {name}"),
                    )
                })
                .collect()
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);

        let set = SpecSet::from_documents("/spec", Vec::new());
        assert!(rule.check(&set.context()).is_empty());
    }
}
