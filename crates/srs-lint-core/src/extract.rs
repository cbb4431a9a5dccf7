//! Requirement identifier and block extraction.
//!
//! Identifiers are tokens of the form `<CATEGORY>-NNN` (e.g. `NFR-012`).
//! Occurrences are recorded in scan order: documents in sorted name order,
//! then line order, then left to right within a line. That order decides
//! which occurrence of a repeated identifier counts as the original.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use crate::catalog::{Category, REQUIRED_DEFINITIONS, REQUIRED_META_FIELDS};
use crate::context::{split_lines_inclusive, Document};

/// Matches a requirement identifier as a whole word.
#[allow(clippy::expect_used)] // literal pattern
pub fn requirement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b(IR|FR|DR|NFR|CR)-\d{3}\b").expect("requirement pattern is valid")
    })
}

#[allow(clippy::expect_used)] // escaped literal terms
fn definition_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        REQUIRED_DEFINITIONS
            .iter()
            .map(|term| {
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                    .expect("definition pattern is valid");
                (*term, re)
            })
            .collect()
    })
}

#[allow(clippy::expect_used)] // literal pattern
fn modality_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(shall|should|may)\b").expect("modality pattern is valid")
    })
}

/// One occurrence of a requirement identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRef {
    /// The identifier, e.g. `FR-001`.
    pub id: String,
    /// Category parsed from the identifier.
    pub category: Category,
    /// Name of the document it occurs in.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
    /// Byte offset of the identifier within the document.
    pub offset: usize,
}

/// Scans documents for requirement identifiers, in scan order.
#[must_use]
pub fn extract_requirements(documents: &[Document]) -> Vec<RequirementRef> {
    let pattern = requirement_pattern();
    let mut refs = Vec::new();

    for doc in documents {
        let mut line_offset = 0;
        for (index, line) in split_lines_inclusive(&doc.content).into_iter().enumerate() {
            for caps in pattern.captures_iter(line) {
                let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let Ok(category) = tag.as_str().parse::<Category>() else {
                    continue;
                };
                refs.push(RequirementRef {
                    id: whole.as_str().to_string(),
                    category,
                    file: doc.name.clone(),
                    line: index + 1,
                    column: whole.start() + 1,
                    offset: line_offset + whole.start(),
                });
            }
            line_offset += line.len();
        }
    }

    tracing::debug!("Extracted {} requirement occurrences", refs.len());
    refs
}

/// Returns true if `text` contains any requirement identifier.
#[must_use]
pub fn contains_requirement(text: &str) -> bool {
    requirement_pattern().is_match(text)
}

/// Returns the required definition terms that do not appear in `text` as
/// whole words, in table order.
#[must_use]
pub fn missing_definitions(text: &str) -> Vec<&'static str> {
    definition_patterns()
        .iter()
        .filter(|(_, re)| !re.is_match(text))
        .map(|(term, _)| *term)
        .collect()
}

/// Returns true if `text` contains `shall`, `should` or `may` as a word, in any case.
#[must_use]
pub fn has_modality(text: &str) -> bool {
    modality_pattern().is_match(text)
}

/// Returns the metadata labels absent from `text`, in table order.
#[must_use]
pub fn missing_meta_fields(text: &str) -> Vec<&'static str> {
    REQUIRED_META_FIELDS
        .iter()
        .copied()
        .filter(|field| !text.contains(field))
        .collect()
}

/// Text associated with one requirement occurrence.
///
/// Spans from the occurrence's line up to, but excluding, the line of the
/// next occurrence in the same document.
#[derive(Debug, Clone)]
pub struct RequirementBlock<'a> {
    /// The occurrence that opens this block.
    pub requirement: &'a RequirementRef,
    /// Block lines joined with `\n`.
    pub text: String,
}

/// Splits a document into requirement blocks.
///
/// `occurrences` must be the document's occurrences in scan order. When two
/// identifiers share a line, the earlier one gets an empty block.
#[must_use]
pub fn requirement_blocks<'a>(
    doc: &Document,
    occurrences: &[&'a RequirementRef],
) -> Vec<RequirementBlock<'a>> {
    let lines = doc.lines();
    occurrences
        .iter()
        .enumerate()
        .map(|(index, req)| {
            let start = (req.line - 1).min(lines.len());
            let end = occurrences
                .get(index + 1)
                .map_or(lines.len(), |next| next.line - 1)
                .clamp(start, lines.len());
            RequirementBlock {
                requirement: *req,
                text: lines[start..end].join("\n"),
            }
        })
        .collect()
}

/// Requirement coverage statistics for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementStats {
    /// Number of distinct identifiers.
    pub unique: usize,
    /// Number of occurrences, including duplicates.
    pub occurrences: usize,
    /// Occurrences repeating an already registered identifier.
    pub duplicates: usize,
    /// Distinct identifiers per category tag.
    pub by_category: BTreeMap<String, usize>,
    /// Blocks containing shall/should/may.
    pub with_modality: usize,
    /// Blocks carrying every metadata label.
    pub with_metadata: usize,
}

impl RequirementStats {
    /// Collects statistics from loaded documents and their occurrences.
    #[must_use]
    pub fn collect(documents: &[Document], requirements: &[RequirementRef]) -> Self {
        let mut stats = Self {
            occurrences: requirements.len(),
            ..Self::default()
        };

        let mut seen = HashSet::new();
        for req in requirements {
            if seen.insert(req.id.as_str()) {
                *stats
                    .by_category
                    .entry(req.category.tag().to_string())
                    .or_default() += 1;
            } else {
                stats.duplicates += 1;
            }
        }
        stats.unique = seen.len();

        for doc in documents {
            let occurrences: Vec<&RequirementRef> =
                requirements.iter().filter(|r| r.file == doc.name).collect();
            for block in requirement_blocks(doc, &occurrences) {
                if has_modality(&block.text) {
                    stats.with_modality += 1;
                }
                if missing_meta_fields(&block.text).is_empty() {
                    stats.with_metadata += 1;
                }
            }
        }

        stats
    }

    /// Percentage of blocks with a modality keyword.
    #[must_use]
    pub fn modality_coverage(&self) -> f64 {
        percent(self.with_modality, self.occurrences)
    }

    /// Percentage of blocks with complete metadata.
    #[must_use]
    pub fn metadata_coverage(&self) -> f64 {
        percent(self.with_metadata, self.occurrences)
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, content: &str) -> Document {
        Document::new(name, format!("/spec/{name}"), content)
    }

    #[test]
    fn extracts_multiple_ids_per_line_in_order() {
        let docs = vec![doc("03-fr.md", "intro\nFR-001 and NFR-002, see CR-010\n")];
        let refs = extract_requirements(&docs);

        let ids: Vec<&str> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["FR-001", "NFR-002", "CR-010"]);
        assert!(refs.iter().all(|r| r.line == 2));
        assert_eq!(refs[1].category, Category::NonFunctional);
        assert_eq!(refs[1].column, 12);
        assert_eq!(refs[1].offset, 6 + 11);
    }

    #[test]
    fn line_numbers_follow_every_line_break() {
        let docs = vec![doc(
            "03-fr.md",
            "FR-001 shall x\rPriority:\r\nFR-002\u{2028}FR-003",
        )];
        let refs = extract_requirements(&docs);
        let lines: Vec<usize> = refs.iter().map(|r| r.line).collect();
        assert_eq!(lines, [1, 3, 4]);
        assert_eq!(refs[1].offset, 15 + 11);
        assert_eq!(refs[2].offset, 15 + 11 + 9);
    }

    #[test]
    fn ignores_non_word_bounded_tokens() {
        let docs = vec![doc("03-fr.md", "XFR-001 FR-0011 FR-01 FR-001a\n")];
        assert!(extract_requirements(&docs).is_empty());
    }

    #[test]
    fn nfr_is_not_read_as_fr() {
        let docs = vec![doc("05-nfr.md", "NFR-100\n")];
        let refs = extract_requirements(&docs);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].id, "NFR-100");
    }

    #[test]
    fn definitions_must_be_whole_words() {
        let all = "SRS RTM MoSCoW IADT FR NFR DR IR CR";
        assert!(missing_definitions(all).is_empty());
        assert_eq!(
            missing_definitions(&all.replace("RTM", "RTMs")),
            ["RTM"]
        );
        assert_eq!(
            missing_definitions(&all.replace("MoSCoW", "moscow")),
            ["MoSCoW"]
        );
        assert_eq!(missing_definitions("").len(), REQUIRED_DEFINITIONS.len());
    }

    #[test]
    fn modality_is_case_insensitive_whole_word() {
        assert!(has_modality("The system SHALL respond."));
        assert!(has_modality("Users May export."));
        assert!(!has_modality("The shallow copy mayhem."));
    }

    #[test]
    fn blocks_span_until_next_occurrence_line() {
        let d = doc(
            "03-fr.md",
            "FR-001: first\nshall do\nFR-002: second\nFR-003 FR-004 last\ntail\n",
        );
        let refs = extract_requirements(std::slice::from_ref(&d));
        let occ: Vec<&RequirementRef> = refs.iter().collect();
        let blocks = requirement_blocks(&d, &occ);

        let texts: Vec<&str> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "FR-001: first\nshall do",
                "FR-002: second",
                "",
                "FR-003 FR-004 last\ntail",
            ]
        );
    }

    #[test]
    fn stats_count_unique_and_duplicates() {
        let docs = vec![
            doc(
                "03-fr.md",
                "FR-001 shall work. Priority: M Verify: T Release: 1\nFR-002 fast\n",
            ),
            doc("05-nfr.md", "FR-001 again\nNFR-001 should scale\n"),
        ];
        let refs = extract_requirements(&docs);
        let stats = RequirementStats::collect(&docs, &refs);

        assert_eq!(stats.occurrences, 4);
        assert_eq!(stats.unique, 3);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.by_category.get("FR"), Some(&2));
        assert_eq!(stats.by_category.get("NFR"), Some(&1));
        assert_eq!(stats.with_modality, 2);
        assert_eq!(stats.with_metadata, 1);
        assert!((stats.metadata_coverage() - 25.0).abs() < f64::EPSILON);
    }
}
