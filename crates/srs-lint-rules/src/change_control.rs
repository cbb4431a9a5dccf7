//! Rule requiring a version history in the change-control section.
//!
//! The first file whose name starts with `07` must contain the version
//! history table header. A missing initial `0.1` row is only a warning.

use regex::Regex;
use std::sync::OnceLock;

use srs_lint_core::catalog::{CHANGE_CONTROL_PREFIX, VERSION_TABLE_HEADER};
use srs_lint_core::{Finding, Location, Rule, Severity, SpecContext, Suggestion};

/// Rule code for change-control.
pub const CODE: &str = "SRS004";

/// Rule name for change-control.
pub const NAME: &str = "change-control";

#[allow(clippy::expect_used)] // literal pattern
fn initial_version_row() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?mR)^\|\s*0\.1\s*\|").expect("version row pattern is valid")
    })
}

/// Requires a version history table starting at version 0.1.
#[derive(Debug, Clone, Default)]
pub struct ChangeControl;

impl ChangeControl {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ChangeControl {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a version history table with an initial 0.1 row"
    }

    fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
        let mut findings = Vec::new();
        let Some(doc) = ctx.first_with_prefix(CHANGE_CONTROL_PREFIX) else {
            return findings;
        };

        if !doc.content.contains(VERSION_TABLE_HEADER) {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    format!(
                        "{} is missing the required version history table header.",
                        doc.name
                    ),
                )
                .at(Location::file(&doc.name))
                .with_suggestion(Suggestion::new(format!(
                    "Add the header row `{VERSION_TABLE_HEADER}`"
                ))),
            );
        }

        if !initial_version_row().is_match(&doc.content) {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    Severity::Warning,
                    format!("{} does not include an initial 0.1 version row.", doc.name),
                )
                .at(Location::file(&doc.name)),
            );
        }

        findings
    }
}
