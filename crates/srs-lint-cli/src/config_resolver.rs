//! Locating the configuration for a validation run.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <FILE>`
//! 2. `srs-lint.toml`, then `.srs-lint.toml`, inside the spec directory
//! 3. `config.toml` in the user directory (`$SRS_LINT_CONFIG_DIR` or `~/.srs-lint/`)
//! 4. built-in defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Stored next to the spec files.
    SpecDir(PathBuf),
    /// Shared user configuration.
    User(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::SpecDir(p) | Self::User(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` for the shared user configuration.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

const SPEC_DIR_CONFIG_NAMES: [&str; 2] = ["srs-lint.toml", ".srs-lint.toml"];

const USER_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration for `spec_dir`.
#[must_use]
pub fn resolve(spec_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with(spec_dir, explicit, user_config_dir())
}

fn resolve_with(
    spec_dir: &Path,
    explicit: Option<&Path>,
    user_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = SPEC_DIR_CONFIG_NAMES
        .iter()
        .map(|name| spec_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found spec directory config: {}", found.display());
        return ConfigSource::SpecDir(found);
    }

    match user_dir.map(|dir| dir.join(USER_CONFIG_NAME)) {
        Some(candidate) if candidate.is_file() => {
            tracing::debug!("Found user config: {}", candidate.display());
            ConfigSource::User(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// Returns the user configuration directory.
///
/// `$SRS_LINT_CONFIG_DIR` wins over `~/.srs-lint/`.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("SRS_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".srs-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_is_trusted_as_is() {
        let spec = TempDir::new().unwrap();
        fs::write(spec.path().join("srs-lint.toml"), "").unwrap();

        let result = resolve_with(spec.path(), Some(Path::new("/nowhere/x.toml")), None);
        assert_eq!(result, ConfigSource::Explicit(PathBuf::from("/nowhere/x.toml")));
    }

    #[test]
    fn plain_name_preferred_over_dotfile() {
        let spec = TempDir::new().unwrap();
        fs::write(spec.path().join(".srs-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_with(spec.path(), None, None),
            ConfigSource::SpecDir(spec.path().join(".srs-lint.toml"))
        );

        fs::write(spec.path().join("srs-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_with(spec.path(), None, None),
            ConfigSource::SpecDir(spec.path().join("srs-lint.toml"))
        );
    }

    #[test]
    fn user_config_is_the_fallback() {
        let spec = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();

        let empty = resolve_with(spec.path(), None, Some(user.path().to_path_buf()));
        assert_eq!(empty, ConfigSource::Default);

        fs::write(user.path().join("config.toml"), "").unwrap();
        let found = resolve_with(spec.path(), None, Some(user.path().to_path_buf()));
        assert_eq!(found, ConfigSource::User(user.path().join("config.toml")));
        assert!(found.is_global());

        fs::write(spec.path().join("srs-lint.toml"), "").unwrap();
        let local = resolve_with(spec.path(), None, Some(user.path().to_path_buf()));
        assert!(matches!(local, ConfigSource::SpecDir(_)));
    }

    #[test]
    fn missing_spec_dir_falls_back_to_default() {
        let result = resolve_with(Path::new("/does/not/exist"), None, None);
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }
}
