//! Rule to keep section files short.
//!
//! # Rationale
//!
//! Modular SRS sections are meant to be reviewed one file at a time. Long
//! files should be split into sub-sections. Traceability matrices (`rtm*`)
//! grow with the requirement count and are exempt.
//!
//! # Configuration
//!
//! - `max_lines`: Maximum lines per file (default: 150)

use srs_lint_core::catalog::DEFAULT_MAX_LINES;
use srs_lint_core::{Finding, Location, Rule, Severity, SpecContext, Suggestion};

/// Rule code for line-limits.
pub const CODE: &str = "SRS002";

/// Rule name for line-limits.
pub const NAME: &str = "line-limits";

/// Limits the number of lines in each non-RTM file.
#[derive(Debug, Clone)]
pub struct LineLimits {
    max_lines: usize,
    severity: Severity,
}

impl Default for LineLimits {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLimits {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            severity: Severity::Error,
        }
    }

    /// Sets maximum lines per file.
    #[must_use]
    pub fn max_lines(mut self, max: usize) -> Self {
        self.max_lines = max;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for LineLimits {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Limits lines per section file (RTM files exempt)"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for doc in ctx.documents {
            if doc.is_rtm() {
                continue;
            }
            let line_count = doc.line_count();
            if line_count > self.max_lines {
                findings.push(
                    Finding::new(
                        CODE,
                        NAME,
                        self.severity,
                        format!(
                            "{} has {} lines (max {}); split this section.",
                            doc.name, line_count, self.max_lines
                        ),
                    )
                    .at(Location::file(&doc.name))
                    .with_suggestion(Suggestion::new(
                        "Move sub-sections into their own numbered files",
                    )),
                );
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, run};

    fn lines(n: usize) -> String {
        (1..=n).map(|i| format!("line {i}\n")).collect()
    }

    #[test]
    fn rtm_files_are_exempt() {
        let body = lines(300);
        assert!(run(&LineLimits::new(), &[("rtm.md", body.as_str())]).is_empty());
        assert!(run(&LineLimits::new(), &[("RTM-full.md", body.as_str())]).is_empty());
    }

    #[test]
    fn long_section_is_reported() {
        let body = lines(300);
        let findings = run(&LineLimits::new(), &[("99-appendix.md", body.as_str())]);
        assert_eq!(
            messages(&findings),
            ["99-appendix.md has 300 lines (max 150); split this section."]
        );
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn limit_is_inclusive() {
        let body = lines(150);
        assert!(run(&LineLimits::new(), &[("03-fr.md", body.as_str())]).is_empty());
    }

    #[test]
    fn unicode_line_separators_count() {
        let findings = run(
            &LineLimits::new().max_lines(2),
            &[("03-fr.md", "a\u{2028}b\u{2029}c")],
        );
        assert_eq!(
            messages(&findings),
            ["03-fr.md has 3 lines (max 2); split this section."]
        );
    }

    #[test]
    fn custom_limit() {
        let body = lines(11);
        let findings = run(&LineLimits::new().max_lines(10), &[("03-fr.md", body.as_str())]);
        assert_eq!(
            messages(&findings),
            ["03-fr.md has 11 lines (max 10); split this section."]
        );
    }
}
