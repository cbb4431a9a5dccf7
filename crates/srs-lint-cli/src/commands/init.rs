//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE_NAME: &str = "srs-lint.toml";

const DEFAULT_CONFIG: &str = r#"# srs-lint configuration
# Place this file in the spec directory or pass it with --config.

[validator]
# Maximum lines per section file; rtm*.md files are exempt.
max_lines = 150

# File name patterns to leave out of validation
exclude = [
    # "draft-*.md",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.required-sections]
enabled = true

[rules.line-limits]
enabled = true
# severity = "warning"  # Override default severity

[rules.definitions]
enabled = true

[rules.change-control]
enabled = true

[rules.rtm-header]
enabled = true

[rules.requirement-quality]
enabled = true
"#;

/// Runs the init command.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to configure rules");
    println!("  2. Run: srs-lint {}", dir.display());

    Ok(())
}
