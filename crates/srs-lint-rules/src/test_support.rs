//! Helpers for building in-memory spec sets in rule tests.

use srs_lint_core::{Document, Finding, Rule, SpecSet};

pub fn spec(files: &[(&str, &str)]) -> SpecSet {
    let documents = files
        .iter()
        .map(|(name, content)| Document::new(*name, format!("/spec/{name}"), *content))
        .collect();
    SpecSet::from_documents("/spec", documents)
}

pub fn run(rule: &dyn Rule, files: &[(&str, &str)]) -> Vec<Finding> {
    let set = spec(files);
    rule.check(&set.context())
}

pub fn messages(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.message.as_str()).collect()
}
