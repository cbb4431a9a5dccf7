//! # srs-lint-rules
//!
//! Built-in structure rules for modular SRS directories.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SRS001 | `required-sections` | Every section prefix `00`..`07` has a file |
//! | SRS002 | `line-limits` | Section files stay under the line limit (RTM exempt) |
//! | SRS003 | `definitions` | The introduction defines every required acronym |
//! | SRS004 | `change-control` | The change-control section has a version history table |
//! | SRS005 | `rtm-header` | Traceability matrices use the standard header row |
//! | SRS006 | `requirement-quality` | Requirement IDs are unique, well placed and complete |
//!
//! ## Usage
//!
//! ```ignore
//! use srs_lint_core::Validator;
//! use srs_lint_rules::{LineLimits, RequiredSections};
//!
//! let validator = Validator::builder()
//!     .root("./specs/my-project")
//!     .rule(RequiredSections::new())
//!     .rule(LineLimits::new().max_lines(200))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod change_control;
mod definitions;
mod line_limits;
mod presets;
mod required_sections;
mod requirement_quality;
mod rtm_header;

#[cfg(test)]
mod test_support;

pub use change_control::ChangeControl;
pub use definitions::Definitions;
pub use line_limits::LineLimits;
pub use presets::{all_rules, rules_for, standard_rules};
pub use required_sections::RequiredSections;
pub use requirement_quality::RequirementQuality;
pub use rtm_header::RtmHeader;

/// Re-export core types for convenience.
pub use srs_lint_core::{Finding, Rule, Severity};
