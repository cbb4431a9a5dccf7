//! Fixed layout tables for modular SRS directories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Required section prefixes and their titles, in reporting order.
pub const REQUIRED_SECTIONS: &[(&str, &str)] = &[
    ("00", "Introduction"),
    ("01", "Product perspective"),
    ("02", "External interfaces"),
    ("03", "Functional requirements"),
    ("04", "Data requirements"),
    ("05", "Non-functional requirements"),
    ("06", "Constraints"),
    ("07", "Change control"),
];

/// Prefix of the introduction section holding definitions and acronyms.
pub const INTRODUCTION_PREFIX: &str = "00";

/// Prefix of the change-control section.
pub const CHANGE_CONTROL_PREFIX: &str = "07";

/// File name prefix (case-insensitive) of traceability matrices.
pub const RTM_PREFIX: &str = "rtm";

/// Terms the introduction must define.
pub const REQUIRED_DEFINITIONS: &[&str] = &[
    "SRS", "RTM", "MoSCoW", "IADT", "FR", "NFR", "DR", "IR", "CR",
];

/// Metadata labels every requirement block must carry.
pub const REQUIRED_META_FIELDS: &[&str] = &["Priority:", "Verify:", "Release:"];

/// Header row of the change-control version history table.
pub const VERSION_TABLE_HEADER: &str = "| Version | Date | Author | Changes |";

/// Header row of the traceability matrix.
pub const RTM_TABLE_HEADER: &str =
    "| Req ID | Requirement | Source/Need | Design Ref | Test Case | Status |";

/// Default maximum number of lines per section file.
pub const DEFAULT_MAX_LINES: usize = 150;

/// Requirement category, the `<CATEGORY>` part of `<CATEGORY>-NNN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Interface requirement.
    #[serde(rename = "IR")]
    Interface,
    /// Functional requirement.
    #[serde(rename = "FR")]
    Functional,
    /// Data requirement.
    #[serde(rename = "DR")]
    Data,
    /// Non-functional requirement.
    #[serde(rename = "NFR")]
    NonFunctional,
    /// Constraint.
    #[serde(rename = "CR")]
    Constraint,
}

impl Category {
    /// All categories in section order.
    pub const ALL: [Self; 5] = [
        Self::Interface,
        Self::Functional,
        Self::Data,
        Self::NonFunctional,
        Self::Constraint,
    ];

    /// Returns the identifier tag (e.g. `"NFR"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Interface => "IR",
            Self::Functional => "FR",
            Self::Data => "DR",
            Self::NonFunctional => "NFR",
            Self::Constraint => "CR",
        }
    }

    /// Returns the section prefix where requirements of this category belong.
    #[must_use]
    pub fn section_prefix(self) -> &'static str {
        match self {
            Self::Interface => "02",
            Self::Functional => "03",
            Self::Data => "04",
            Self::NonFunctional => "05",
            Self::Constraint => "06",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown category tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown requirement category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.tag() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Returns true if `name` starts with `prefix`, ignoring ASCII case.
#[must_use]
pub fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.is_char_boundary(prefix.len())
        && name[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Returns true if the file name marks a traceability matrix.
#[must_use]
pub fn is_rtm_name(name: &str) -> bool {
    starts_with_ignore_case(name, RTM_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_tag() {
        for category in Category::ALL {
            assert_eq!(category.tag().parse::<Category>(), Ok(category));
        }
        assert!("XR".parse::<Category>().is_err());
    }

    #[test]
    fn category_prefixes_cover_sections_02_to_06() {
        let prefixes: Vec<&str> = Category::ALL.iter().map(|c| c.section_prefix()).collect();
        assert_eq!(prefixes, ["02", "03", "04", "05", "06"]);
    }

    #[test]
    fn rtm_detection_ignores_case() {
        assert!(is_rtm_name("rtm.md"));
        assert!(is_rtm_name("RTM-matrix.md"));
        assert!(is_rtm_name("Rtm.MD"));
        assert!(!is_rtm_name("99-rtm.md"));
        assert!(!is_rtm_name("rt.md"));
    }
}
