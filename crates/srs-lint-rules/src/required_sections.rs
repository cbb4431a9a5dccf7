//! Rule requiring one file per SRS section.
//!
//! Presence is decided by file name only: a section counts as present when
//! some markdown file name starts with its two-digit prefix. Findings follow
//! the order of the section table.

use srs_lint_core::catalog::REQUIRED_SECTIONS;
use srs_lint_core::{Finding, Rule, Severity, SpecContext, Suggestion};

/// Rule code for required-sections.
pub const CODE: &str = "SRS001";

/// Rule name for required-sections.
pub const NAME: &str = "required-sections";

/// Requires a file for each of the sections `00` through `07`.
#[derive(Debug, Clone)]
pub struct RequiredSections {
    severity: Severity,
}

impl Default for RequiredSections {
    fn default() -> Self {
        Self::new()
    }
}

impl RequiredSections {
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
}

impl Rule for RequiredSections {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a file for every section prefix 00-07"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
        REQUIRED_SECTIONS
            .iter()
            .filter(|(prefix, _)| !ctx.file_names.iter().any(|n| n.starts_with(prefix)))
            .map(|(prefix, title)| {
                Finding::new(
                    CODE,
                    NAME,
                    self.severity,
                    format!("Missing section {prefix} ({title})."),
                )
                .with_suggestion(Suggestion::new(format!(
                    "Add a file named `{prefix}-<slug>.md` for the {title} section"
                )))
            })
            .collect()
    }
}
