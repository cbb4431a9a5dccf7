//! List rules command implementation.

use srs_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<22} {:<9} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<10} {:<22} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nRules run in the order listed; the report keeps that order.");
    println!("Disable or re-grade a rule in srs-lint.toml, e.g.:");
    println!("  [rules.rtm-header]");
    println!("  enabled = false");
}
