//! Shared output formatting for validation reports.

use anyhow::Result;
use miette::{GraphicalReportHandler, GraphicalTheme};
use serde::Serialize;
use srs_lint_core::{
    Category, Finding, FindingDiagnostic, RequirementStats, SpecSet, ValidationReport,
};
use std::path::Path;

use crate::OutputFormat;

/// Print a validation report in the specified format.
pub fn print(
    report: &ValidationReport,
    set: &SpecSet,
    format: OutputFormat,
    stats: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report, &set.root),
        OutputFormat::Json => return print_json(report, &set.root),
        OutputFormat::Compact => print_compact(report),
        OutputFormat::Pretty => print_pretty(report, set)?,
    }
    if stats {
        println!();
        print!("{}", render_stats(&report.stats));
    }
    Ok(())
}

/// Renders the plain report: outcome line, errors, warnings and, on
/// success, the number of files checked.
pub fn render_text(report: &ValidationReport, spec_dir: &Path) -> String {
    let mut out = String::new();
    let passed = report.passed();

    out.push_str(if passed {
        "SRS validation passed.\n"
    } else {
        "SRS validation failed.\n"
    });
    for error in report.errors() {
        out.push_str(&format!("ERROR: {}\n", error.message));
    }
    for warning in report.warnings() {
        out.push_str(&format!("WARN: {}\n", warning.message));
    }
    if passed {
        out.push_str(&format!(
            "Checked {} markdown files in {}.\n",
            report.files_checked,
            spec_dir.display()
        ));
    }
    out
}

fn print_text(report: &ValidationReport, spec_dir: &Path) {
    print!("{}", render_text(report, spec_dir));
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    passed: bool,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

fn print_json(report: &ValidationReport, spec_dir: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport {
        root: spec_dir,
        passed: report.passed(),
        report,
    })?;
    println!("{json}");
    Ok(())
}

/// Renders one finding per line as `file:line: severity [code] message`.
pub fn render_compact(findings: &[Finding]) -> String {
    findings.iter().map(|f| format!("{f}\n")).collect()
}

fn print_compact(report: &ValidationReport) {
    print!("{}", render_compact(&report.findings));
}

fn print_pretty(report: &ValidationReport, set: &SpecSet) -> Result<()> {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    for finding in &report.findings {
        let document = finding
            .location
            .as_ref()
            .and_then(|l| l.file.to_str())
            .and_then(|name| set.document(name));
        let diagnostic = FindingDiagnostic::new(finding, document);

        let mut rendered = String::new();
        handler.render_report(&mut rendered, &diagnostic)?;
        println!("{rendered}");
    }

    let (errors, warnings) = report.count_by_severity();
    let outcome = if report.passed() { "passed" } else { "failed" };
    println!(
        "SRS validation {outcome}: {errors} error(s), {warnings} warning(s) in {} file(s) under {}",
        report.files_checked,
        set.root.display()
    );
    Ok(())
}

/// Renders the requirements summary printed by `--stats`.
pub fn render_stats(stats: &RequirementStats) -> String {
    let by_category = Category::ALL
        .iter()
        .map(|c| {
            let count = stats.by_category.get(c.tag()).copied().unwrap_or(0);
            format!("{} {count}", c.tag())
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Requirements summary:\n  \
         Unique IDs: {}\n  \
         By category: {by_category}\n  \
         Duplicates: {}\n  \
         Modality coverage: {:.1}%\n  \
         Metadata coverage: {:.1}%\n",
        stats.unique,
        stats.duplicates,
        stats.modality_coverage(),
        stats.metadata_coverage(),
    )
}
