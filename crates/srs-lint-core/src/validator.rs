//! Validator orchestrating loading and rule execution.

use crate::config::Config;
use crate::extract::RequirementStats;
use crate::loader::{self, LoadError, SpecSet};
use crate::rule::{Rule, RuleBox};
use crate::types::{Finding, Location, Severity, ValidationReport};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Rule code attached to unreadable-file findings.
pub const READ_ERROR_CODE: &str = "SRS000";

/// Rule name attached to unreadable-file findings.
pub const READ_ERROR_NAME: &str = "read-error";

/// Errors that can occur while building a validator.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Glob pattern error.
    #[error("Invalid exclude pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Builder for configuring a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl ValidatorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spec directory to validate.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the validator.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the validator.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern, matched against file names.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the validator.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Validator, ValidatorError> {
        let config = self.config.unwrap_or_default();

        let exclude = self
            .exclude_patterns
            .iter()
            .chain(config.validator.exclude.iter())
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Validator {
            root: self
                .root
                .as_deref()
                .map_or_else(|| PathBuf::from("."), loader::normalize_root),
            rules: self.rules,
            exclude,
            config,
        })
    }
}

/// Runs rules in registration order over a spec directory.
///
/// Use [`Validator::builder()`] to construct an instance.
pub struct Validator {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude: Vec<glob::Pattern>,
    config: Config,
}

impl Validator {
    /// Creates a new builder for configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Returns the spec directory being validated.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Loads the spec directory.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when validation cannot proceed.
    pub fn load(&self) -> Result<SpecSet, LoadError> {
        loader::load(&self.root, &self.exclude)
    }

    /// Runs every enabled rule over a loaded spec set.
    ///
    /// Findings keep emission order: unreadable files first, then each rule
    /// in registration order.
    #[must_use]
    pub fn check(&self, set: &SpecSet) -> ValidationReport {
        info!(
            "Validating {} files with {} rules",
            set.files_checked(),
            self.rule_count()
        );

        let mut report = ValidationReport::new();
        report.files_checked = set.files_checked();

        for failure in &set.read_failures {
            report.findings.push(
                Finding::new(
                    READ_ERROR_CODE,
                    READ_ERROR_NAME,
                    Severity::Error,
                    format!("Failed to read {}: {}.", failure.name, failure.message),
                )
                .at(Location::file(&failure.name)),
            );
        }

        let ctx = set.context();
        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let findings = rule.check(&ctx);
            debug!("{} produced {} findings", rule.name(), findings.len());
            let findings = self.apply_severity_override(rule.name(), findings);
            report.findings.extend(findings);
        }

        report.stats = RequirementStats::collect(&set.documents, &set.requirements);

        let (errors, warnings) = report.count_by_severity();
        info!(
            "Validation complete: {} errors, {} warnings in {} files",
            errors, warnings, report.files_checked
        );

        report
    }

    /// Loads the spec directory and runs every rule.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when validation cannot proceed.
    pub fn validate(&self) -> Result<ValidationReport, LoadError> {
        let set = self.load()?;
        Ok(self.check(&set))
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, rule_name: &str, mut findings: Vec<Finding>) -> Vec<Finding> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for f in &mut findings {
                f.severity = severity;
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Document, SpecContext};

    struct EveryFile(Severity);

    impl Rule for EveryFile {
        fn name(&self) -> &'static str {
            "every-file"
        }
        fn code(&self) -> &'static str {
            "T001"
        }
        fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
            ctx.documents
                .iter()
                .map(|d| Finding::new(self.code(), self.name(), self.0, d.name.clone()))
                .collect()
        }
    }

    fn sample_set() -> SpecSet {
        SpecSet::from_documents(
            "/spec",
            vec![
                Document::new("01-b.md", "/spec/01-b.md", ""),
                Document::new("00-a.md", "/spec/00-a.md", ""),
            ],
        )
    }

    #[test]
    fn test_builder_rejects_bad_pattern() {
        let result = Validator::builder().root(".").exclude("[").build();
        assert!(matches!(result, Err(ValidatorError::Glob(_))));
    }

    #[test]
    fn test_root_is_normalized() {
        let validator = Validator::builder().root("./spec/").build().unwrap();
        assert_eq!(validator.root(), Path::new("spec"));
        assert_eq!(Validator::builder().build().unwrap().root(), Path::new("."));
    }

    #[test]
    fn test_findings_follow_rule_then_file_order() {
        let validator = Validator::builder()
            .rule(EveryFile(Severity::Warning))
            .rule(EveryFile(Severity::Error))
            .build()
            .expect("Failed to build validator");

        let report = validator.check(&sample_set());
        let messages: Vec<&str> = report.findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, ["00-a.md", "01-b.md", "00-a.md", "01-b.md"]);
        assert_eq!(report.files_checked, 2);
        assert!(report.has_errors());
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let config = Config::parse("[rules.every-file]\nenabled = false\n").unwrap();
        let validator = Validator::builder()
            .config(config)
            .rule(EveryFile(Severity::Error))
            .build()
            .unwrap();

        assert!(validator.check(&sample_set()).findings.is_empty());
    }

    #[test]
    fn test_severity_override() {
        let config = Config::parse("[rules.every-file]\nseverity = \"warning\"\n").unwrap();
        let validator = Validator::builder()
            .config(config)
            .rule(EveryFile(Severity::Error))
            .build()
            .unwrap();

        let report = validator.check(&sample_set());
        assert!(report.passed());
        assert_eq!(report.warnings().len(), 2);
    }
}
