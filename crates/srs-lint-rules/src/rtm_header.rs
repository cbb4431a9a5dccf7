//! Rule recommending the standard traceability matrix header.

use srs_lint_core::catalog::RTM_TABLE_HEADER;
use srs_lint_core::{Finding, Location, Rule, Severity, SpecContext, Suggestion};

/// Rule code for rtm-header.
pub const CODE: &str = "SRS005";

/// Rule name for rtm-header.
pub const NAME: &str = "rtm-header";

/// Warns when an `rtm*` file lacks the standard header row.
#[derive(Debug, Clone)]
pub struct RtmHeader {
    severity: Severity,
}

impl Default for RtmHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl RtmHeader {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for RtmHeader {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Recommends the standard header row in traceability matrices"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
        ctx.documents
            .iter()
            .filter(|doc| doc.is_rtm() && !doc.content.contains(RTM_TABLE_HEADER))
            .map(|doc| {
                Finding::new(
                    CODE,
                    NAME,
                    self.severity,
                    format!("{} is missing the recommended RTM header row.", doc.name),
                )
                .at(Location::file(&doc.name))
                .with_suggestion(Suggestion::new(format!(
                    "Start the matrix with `{RTM_TABLE_HEADER}`"
                )))
            })
            .collect()
    }
}
