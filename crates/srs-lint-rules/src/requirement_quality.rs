//! Rule checking requirement identifiers and their blocks.
//!
//! # Detected Problems
//!
//! Per identifier occurrence, in scan order:
//! - the identifier was already defined earlier (error, names the original)
//! - the file prefix does not match the identifier's category (warning)
//!
//! Per requirement block (the lines from an identifier up to the next one):
//! - no `shall`, `should` or `may` (error)
//! - each missing `Priority:`, `Verify:` or `Release:` label (warning)
//!
//! Per category section `02`..`06` that has files:
//! - none of its files mention any identifier (warning)
//!
//! A duplicate in the wrong section gets both the duplicate error and the
//! prefix warning.

use std::collections::HashMap;

use srs_lint_core::extract::{
    contains_requirement, has_modality, missing_meta_fields, requirement_blocks,
};
use srs_lint_core::{
    Category, Document, Finding, Location, RequirementRef, Rule, Severity, SpecContext, Suggestion,
};
use tracing::debug;

/// Rule code for requirement-quality.
pub const CODE: &str = "SRS006";

/// Rule name for requirement-quality.
pub const NAME: &str = "requirement-quality";

/// Checks uniqueness, placement, modality and metadata of requirements.
#[derive(Debug, Clone, Default)]
pub struct RequirementQuality;

impl RequirementQuality {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RequirementQuality {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Checks requirement IDs for duplicates, placement, modality and metadata"
    }

    fn check(&self, ctx: &SpecContext) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut seen: HashMap<&str, &RequirementRef> = HashMap::new();
        debug!("Checking {} requirement occurrences", ctx.requirements.len());

        for doc in ctx.documents {
            let occurrences: Vec<&RequirementRef> = ctx.requirements_in(doc).collect();

            for &req in &occurrences {
                if let Some(original) = seen.get(req.id.as_str()) {
                    findings.push(duplicate(doc, req, original));
                } else {
                    seen.insert(req.id.as_str(), req);
                }

                let expected = req.category.section_prefix();
                if !doc.has_prefix(expected) {
                    findings.push(misplaced(doc, req, expected));
                }
            }

            for block in requirement_blocks(doc, &occurrences) {
                let req = block.requirement;
                if !has_modality(&block.text) {
                    findings.push(
                        Finding::new(
                            CODE,
                            NAME,
                            Severity::Error,
                            format!(
                                "{} in {}:{} does not contain shall/should/may.",
                                req.id, doc.name, req.line
                            ),
                        )
                        .at(locate(doc, req))
                        .with_suggestion(Suggestion::new(
                            "State the requirement as \"The system shall ...\"",
                        )),
                    );
                }
                for field in missing_meta_fields(&block.text) {
                    findings.push(
                        Finding::new(
                            CODE,
                            NAME,
                            Severity::Warning,
                            format!(
                                "{} in {}:{} is missing '{field}'.",
                                req.id, doc.name, req.line
                            ),
                        )
                        .at(locate(doc, req)),
                    );
                }
            }
        }

        for prefix in Category::ALL.map(Category::section_prefix) {
            let mut section = ctx.with_prefix(prefix).peekable();
            if section.peek().is_none() {
                continue;
            }
            if !section.any(|doc| contains_requirement(&doc.content)) {
                findings.push(Finding::new(
                    CODE,
                    NAME,
                    Severity::Warning,
                    format!("Section {prefix} has no requirement IDs detected."),
                ));
            }
        }

        findings
    }
}

fn locate(doc: &Document, req: &RequirementRef) -> Location {
    Location::new(&doc.name, req.line, req.column).with_span(req.offset, req.id.len())
}

fn duplicate(doc: &Document, req: &RequirementRef, original: &RequirementRef) -> Finding {
    Finding::new(
        CODE,
        NAME,
        Severity::Error,
        format!(
            "Duplicate requirement ID {} in {}:{}; already defined at {}:{}.",
            req.id, doc.name, req.line, original.file, original.line
        ),
    )
    .at(locate(doc, req))
    .with_suggestion(Suggestion::new(format!(
        "Renumber this requirement or refer to {} without redefining it",
        req.id
    )))
}

fn misplaced(doc: &Document, req: &RequirementRef, expected: &str) -> Finding {
    Finding::new(
        CODE,
        NAME,
        Severity::Warning,
        format!(
            "{} appears in {}; expected section prefix {expected} for {} requirements.",
            req.id, doc.name, req.category
        ),
    )
    .at(locate(doc, req))
}
