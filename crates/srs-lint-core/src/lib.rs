//! # srs-lint-core
//!
//! Core framework for validating modular Software Requirements
//! Specification (SRS) directories.
//!
//! This crate provides the foundational traits and types for building
//! SRS checks. It includes:
//!
//! - [`loader`] for listing and reading the markdown files of a spec directory
//! - [`extract`] for requirement identifiers, requirement blocks and statistics
//! - [`Rule`] trait for checks over the loaded spec set
//! - [`Validator`] for orchestrating rule execution
//! - [`Finding`] and [`ValidationReport`] for representing results
//!
//! ## Example
//!
//! ```ignore
//! use srs_lint_core::Validator;
//!
//! let validator = Validator::builder()
//!     .root("./specs/my-project")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let report = validator.validate()?;
//! assert!(report.passed());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
mod config;
mod context;
mod diagnostic;
pub mod extract;
pub mod loader;
mod rule;
mod types;
mod validator;

pub use catalog::Category;
pub use config::{Config, ConfigError, RuleConfig, ValidatorConfig};
pub use context::{Document, SpecContext};
pub use diagnostic::FindingDiagnostic;
pub use extract::{RequirementRef, RequirementStats};
pub use loader::{LoadError, SpecSet};
pub use rule::{Rule, RuleBox};
pub use types::{Finding, Location, Severity, Suggestion, ValidationReport};
pub use validator::{Validator, ValidatorBuilder, ValidatorError};
