//! Context types for rule execution.

use std::path::PathBuf;

use crate::catalog;
use crate::extract::RequirementRef;

/// Returns true for characters that end a line.
///
/// Besides `\n` and `\r` this covers the vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. `\r\n` counts as a single break.
#[must_use]
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e'
            | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `text` into lines, each keeping its terminator.
///
/// A trailing line without terminator is included; empty input yields no
/// lines.
#[must_use]
pub fn split_lines_inclusive(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        let mut end = index + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                end = next + 1;
                chars.next();
            }
        }
        lines.push(&text[start..end]);
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Strips the terminator from a line produced by [`split_lines_inclusive`].
#[must_use]
pub fn strip_line_break(line: &str) -> &str {
    line.trim_end_matches(is_line_break)
}

/// A loaded markdown document.
///
/// Identified by its file name; immutable once loaded.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name within the spec directory.
    pub name: String,
    /// Absolute path to the file.
    pub path: PathBuf,
    /// File contents as a string.
    pub content: String,
}

impl Document {
    /// Creates a new document.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the document lines without their terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        split_lines_inclusive(&self.content)
            .into_iter()
            .map(strip_line_break)
            .collect()
    }

    /// Returns the number of lines in the document.
    #[must_use]
    pub fn line_count(&self) -> usize {
        split_lines_inclusive(&self.content).len()
    }

    /// Returns true if the file name starts with the given section prefix.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }

    /// Returns true if this document is a traceability matrix.
    #[must_use]
    pub fn is_rtm(&self) -> bool {
        catalog::is_rtm_name(&self.name)
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file, or the file length if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in split_lines_inclusive(&self.content).into_iter().enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len();
        }

        offset
    }

    /// Returns the byte length of the given 1-indexed line, without terminator.
    #[must_use]
    pub fn line_len(&self, line: usize) -> usize {
        line.checked_sub(1)
            .and_then(|i| split_lines_inclusive(&self.content).get(i).copied())
            .map_or(0, |l| strip_line_break(l).len())
    }
}

/// Context provided to rules.
///
/// A borrowed view of everything loaded and extracted from one spec
/// directory.
#[derive(Debug, Clone, Copy)]
pub struct SpecContext<'a> {
    /// Names of every markdown file found, sorted. Includes unreadable files.
    pub file_names: &'a [String],
    /// Successfully loaded documents, sorted by name.
    pub documents: &'a [Document],
    /// Requirement identifier occurrences in scan order.
    pub requirements: &'a [RequirementRef],
}

impl<'a> SpecContext<'a> {
    /// Returns the first document whose name starts with `prefix`.
    #[must_use]
    pub fn first_with_prefix(&self, prefix: &str) -> Option<&'a Document> {
        self.documents.iter().find(|d| d.has_prefix(prefix))
    }

    /// Returns all documents whose name starts with `prefix`.
    pub fn with_prefix<'p>(&self, prefix: &'p str) -> impl Iterator<Item = &'a Document> + 'p
    where
        'a: 'p,
    {
        let documents = self.documents;
        documents.iter().filter(move |d| d.has_prefix(prefix))
    }

    /// Returns the requirement occurrences found in the given document.
    pub fn requirements_in(
        &self,
        doc: &'a Document,
    ) -> impl Iterator<Item = &'a RequirementRef> + 'a {
        let name = doc.name.as_str();
        let requirements = self.requirements;
        requirements.iter().filter(move |r| r.file == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content: &str) -> Document {
        Document::new("03-functional.md", "/spec/03-functional.md", content)
    }

    #[test]
    fn test_offset_calculation() {
        let d = doc("line1\nline2\nline3");
        assert_eq!(d.offset_for(1, 1), 0);
        assert_eq!(d.offset_for(2, 1), 6);
        assert_eq!(d.offset_for(2, 3), 8);
    }

    #[test]
    fn test_offset_with_crlf() {
        let d = doc("ab\r\ncd\r\n");
        assert_eq!(d.offset_for(2, 1), 4);
        assert_eq!(d.line_len(1), 2);
    }

    #[test]
    fn test_line_count_ignores_trailing_newline() {
        assert_eq!(doc("a\nb\n").line_count(), 2);
        assert_eq!(doc("").line_count(), 0);
    }

    #[test]
    fn test_lone_carriage_return_breaks_lines() {
        let d = doc("FR-001 shall x\rPriority:\rFR-002 fast\r");
        assert_eq!(d.lines(), ["FR-001 shall x", "Priority:", "FR-002 fast"]);
        assert_eq!(d.line_count(), 3);
        assert_eq!(d.offset_for(3, 1), 25);
    }

    #[test]
    fn test_unicode_separators_break_lines() {
        let d = doc("a\u{2028}b\u{2029}c\x0cd\u{85}e");
        assert_eq!(d.lines(), ["a", "b", "c", "d", "e"]);
        assert_eq!(d.line_len(2), 1);
        assert_eq!(d.offset_for(2, 1), 4);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(doc("a\n\nb\r\n\r\n").lines(), ["a", "", "b", ""]);
        assert_eq!(split_lines_inclusive("a\r\nb"), ["a\r\n", "b"]);
    }

    #[test]
    fn test_prefix_is_case_sensitive_but_rtm_is_not() {
        let d = Document::new("RTM.md", "/spec/RTM.md", "");
        assert!(d.is_rtm());
        assert!(!d.has_prefix("rtm"));
    }
}
