//! Rule requiring the introduction to define the SRS vocabulary.
//!
//! Looks at the first file whose name starts with `00`. Every required term
//! must appear there as a whole word; where in the file does not matter.
//! When no introduction file exists the rule stays silent, since
//! `required-sections` already reports it.

use srs_lint_core::catalog::INTRODUCTION_PREFIX;
use srs_lint_core::extract::missing_definitions;
use srs_lint_core::{Finding, Location, Rule, Severity, SpecContext, Suggestion};

/// Rule code for definitions.
pub const CODE: &str = "SRS003";

/// Rule name for definitions.
pub const NAME: &str = "definitions";

/// Requires the introduction to mention every required acronym.
#[derive(Debug, Clone)]
pub struct Definitions {
    severity: Severity,
}

impl Default for Definitions {
    fn default() -> Self {
        Self::new()
    }
}

impl Definitions {
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

impl Rule for Definitions {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the introduction to define SRS, RTM, MoSCoW, IADT and the category acronyms"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
        let Some(intro) = ctx.first_with_prefix(INTRODUCTION_PREFIX) else {
            return Vec::new();
        };

        missing_definitions(&intro.content)
            .into_iter()
            .map(|term| {
                Finding::new(
                    CODE,
                    NAME,
                    self.severity,
                    format!(
                        "{} is missing required definition or acronym: {term}.",
                        intro.name
                    ),
                )
                .at(Location::file(&intro.name))
                .with_suggestion(Suggestion::new(format!(
                    "Add {term} to the definitions and acronyms table"
                )))
            })
            .collect()
    }
}
