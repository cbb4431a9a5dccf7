//! Rule presets.

use crate::{
    ChangeControl, Definitions, LineLimits, RequiredSections, RequirementQuality, RtmHeader,
};
use srs_lint_core::{Config, RuleBox};

/// Returns the standard rule pipeline with the given line limit.
///
/// Rules run in this order, which is also the order of the report:
/// - `required-sections` (SRS001)
/// - `line-limits` (SRS002)
/// - `definitions` (SRS003)
/// - `change-control` (SRS004)
/// - `rtm-header` (SRS005)
/// - `requirement-quality` (SRS006)
#[must_use]
pub fn standard_rules(max_lines: usize) -> Vec<RuleBox> {
    vec![
        Box::new(RequiredSections::new()),
        Box::new(LineLimits::new().max_lines(max_lines)),
        Box::new(Definitions::new()),
        Box::new(ChangeControl::new()),
        Box::new(RtmHeader::new()),
        Box::new(RequirementQuality::new()),
    ]
}

/// Returns all available rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    standard_rules(srs_lint_core::catalog::DEFAULT_MAX_LINES)
}

/// Returns the standard pipeline configured from `config`.
///
/// Enablement and severity overrides are applied by the validator.
#[must_use]
pub fn rules_for(config: &Config) -> Vec<RuleBox> {
    standard_rules(config.validator.max_lines)
}
