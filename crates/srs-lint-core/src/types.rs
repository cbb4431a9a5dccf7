//! Core types for validation findings and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::extract::RequirementStats;

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational problem, never fails validation.
    Warning,
    /// Problem that fails validation.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Location of a finding inside a spec document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File name relative to the spec directory.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 when the finding concerns the whole file).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a location covering a whole file.
    #[must_use]
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 0, 0)
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A suggested fix for a finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single validation finding.
///
/// Findings are immutable once emitted; the report keeps them in
/// emission order and never deduplicates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Rule code (e.g., "SRS001").
    pub code: String,
    /// Rule name (e.g., "required-sections").
    pub rule: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Primary location, if the finding points into a document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Finding {
    /// Creates a new finding without a location.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attaches a location to this finding.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Adds a suggestion to this finding.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Returns true for error-severity findings.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{}", location.file.display())?;
            if location.line > 0 {
                write!(f, ":{}", location.line)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} [{}] {}", self.severity, self.code, self.message)
    }
}

/// Result of validating a spec directory.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// All findings, in emission order.
    pub findings: Vec<Finding>,
    /// Number of markdown files checked.
    pub files_checked: usize,
    /// Requirement coverage statistics.
    pub stats: RequirementStats,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    /// Returns true when validation passed (no error-severity findings).
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.has_errors()
    }

    /// Returns error findings in emission order.
    #[must_use]
    pub fn errors(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Error)
    }

    /// Returns warning findings in emission order.
    #[must_use]
    pub fn warnings(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Warning)
    }

    /// Returns findings filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    /// Counts findings as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self.findings.iter().filter(|f| f.is_error()).count();
        (errors, self.findings.len() - errors)
    }

    /// Records every warning a second time as an error prefixed with `[strict]`.
    ///
    /// The original warnings stay in place, so the report still lists them.
    pub fn promote_warnings(&mut self) {
        let promoted: Vec<Finding> = self
            .warnings()
            .into_iter()
            .map(|w| {
                let mut f = w.clone();
                f.severity = Severity::Error;
                f.message = format!("[strict] {}", w.message);
                f
            })
            .collect();
        self.findings.extend(promoted);
    }
}
