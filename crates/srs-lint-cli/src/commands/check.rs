//! Check command implementation.

use anyhow::{Context, Result};
use srs_lint_core::{Config, Validator};
use srs_lint_rules::rules_for;

use crate::config_resolver::{self, ConfigSource};
use crate::CheckArgs;

/// Runs the validation of a spec directory.
pub fn run(args: &CheckArgs, explicit_config: Option<&std::path::Path>) -> Result<()> {
    let spec_dir = args
        .spec_dir
        .as_deref()
        .context("a spec directory is required")?;

    let source = config_resolver::resolve(spec_dir, explicit_config);
    let mut config = load_config(&source)?;
    if let Some(max_lines) = args.max_lines {
        config.validator.max_lines = max_lines;
    }

    let mut builder = Validator::builder().root(spec_dir);
    for rule in rules_for(&config) {
        builder = builder.rule_box(rule);
    }
    for pattern in &args.exclude {
        builder = builder.exclude(pattern);
    }
    let validator = builder
        .config(config)
        .build()
        .context("Failed to build validator")?;

    tracing::info!(
        "Validating {} with {} rules",
        validator.root().display(),
        validator.rule_count()
    );

    let set = match validator.load() {
        Ok(set) => set,
        Err(e) => {
            println!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    let mut report = validator.check(&set);
    if args.strict {
        report.promote_warnings();
    }

    super::output::print(&report, &set, args.format, args.stats)?;

    if report.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
