//! Spec directory loading.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::context::{Document, SpecContext};
use crate::extract::{extract_requirements, RequirementRef};

/// Errors that stop validation before any rule runs.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The spec directory does not exist.
    #[error("Directory does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The spec path exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory holds no markdown files.
    #[error("No markdown files found in {}", .0.display())]
    NoMarkdownFiles(PathBuf),

    /// Listing the directory failed.
    #[error("Failed to list {}: {source}", path.display())]
    Walk {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },
}

/// A markdown file that was found but could not be read.
#[derive(Debug, Clone)]
pub struct ReadFailure {
    /// File name within the spec directory.
    pub name: String,
    /// Underlying error message.
    pub message: String,
}

/// Everything loaded from one spec directory.
#[derive(Debug, Clone)]
pub struct SpecSet {
    /// Spec directory, normalized by [`normalize_root`].
    pub root: PathBuf,
    /// Names of every markdown file found, sorted.
    pub file_names: Vec<String>,
    /// Successfully read documents, sorted by name.
    pub documents: Vec<Document>,
    /// Files that could not be read.
    pub read_failures: Vec<ReadFailure>,
    /// Requirement occurrences in scan order.
    pub requirements: Vec<RequirementRef>,
}

impl SpecSet {
    /// Builds a spec set from already loaded documents.
    ///
    /// Documents are sorted by name and scanned for requirement identifiers.
    #[must_use]
    pub fn from_documents(root: impl Into<PathBuf>, mut documents: Vec<Document>) -> Self {
        documents.sort_by(|a, b| a.name.cmp(&b.name));
        let file_names = documents.iter().map(|d| d.name.clone()).collect();
        let requirements = extract_requirements(&documents);
        Self {
            root: root.into(),
            file_names,
            documents,
            read_failures: Vec::new(),
            requirements,
        }
    }

    /// Returns the rule context borrowing this set.
    #[must_use]
    pub fn context(&self) -> SpecContext<'_> {
        SpecContext {
            file_names: &self.file_names,
            documents: &self.documents,
            requirements: &self.requirements,
        }
    }

    /// Number of markdown files found, readable or not.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.file_names.len()
    }

    /// Looks up a loaded document by name.
    #[must_use]
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name == name)
    }
}

/// Normalizes a spec directory path for loading and reporting.
///
/// Drops `.` components, repeated and trailing separators, so `./spec/`
/// becomes `spec`. A path that normalizes to nothing becomes `.`.
#[must_use]
pub fn normalize_root(root: &Path) -> PathBuf {
    let normalized: PathBuf = root
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Lists the markdown files directly inside `root`, sorted by name.
///
/// Only regular files with a `.md` extension (any case) are returned.
/// File names matching any of `exclude` are skipped.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] or [`LoadError::NotADirectory`] for a bad
/// root, and [`LoadError::Walk`] if the directory cannot be listed.
pub fn markdown_files(root: &Path, exclude: &[glob::Pattern]) -> Result<Vec<PathBuf>, LoadError> {
    if !root.exists() {
        return Err(LoadError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(LoadError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let is_markdown = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("md"));
        if !is_markdown || !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if exclude.iter().any(|p| p.matches(&name)) {
            debug!("Excluding: {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Loads every markdown file of a spec directory.
///
/// Unreadable files are recorded in [`SpecSet::read_failures`] rather than
/// aborting the load.
///
/// # Errors
///
/// Returns a [`LoadError`] if the directory is missing, not a directory,
/// cannot be listed, or contains no markdown files.
pub fn load(root: &Path, exclude: &[glob::Pattern]) -> Result<SpecSet, LoadError> {
    let root = normalize_root(root);
    let files = markdown_files(&root, exclude)?;
    if files.is_empty() {
        return Err(LoadError::NoMarkdownFiles(root));
    }

    let mut file_names = Vec::with_capacity(files.len());
    let mut documents = Vec::with_capacity(files.len());
    let mut read_failures = Vec::new();

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        file_names.push(name.clone());

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Loaded: {} ({} bytes)", name, content.len());
                documents.push(Document::new(name, path, content));
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                read_failures.push(ReadFailure {
                    name,
                    message: e.to_string(),
                });
            }
        }
    }

    let requirements = extract_requirements(&documents);

    Ok(SpecSet {
        root,
        file_names,
        documents,
        read_failures,
        requirements,
    })
}
