//! Rich diagnostic rendering of findings via `miette`.

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use std::fmt::Display;

use crate::context::Document;
use crate::types::{Finding, Severity};

/// A finding paired with the source of the document it points into.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct FindingDiagnostic {
    message: String,
    code: String,
    severity: Severity,
    help: Option<String>,
    label: String,
    span: Option<SourceSpan>,
    src: Option<NamedSource<String>>,
}

impl FindingDiagnostic {
    /// Builds a diagnostic for `finding`.
    ///
    /// `document` should be the document named by the finding's location;
    /// without it the diagnostic renders without a snippet.
    #[must_use]
    pub fn new(finding: &Finding, document: Option<&Document>) -> Self {
        let located = finding
            .location
            .as_ref()
            .filter(|l| l.line > 0)
            .zip(document);

        let (span, source) = match located {
            Some((location, doc)) => (
                Some(SourceSpan::from((location.offset, location.length))),
                Some(NamedSource::new(doc.path.display().to_string(), doc.content.clone())),
            ),
            None => (None, None),
        };

        Self {
            message: finding.message.clone(),
            code: finding.code.clone(),
            severity: finding.severity,
            help: finding.suggestion.as_ref().map(|s| s.message.clone()),
            label: finding.rule.clone(),
            span,
            src: source,
        }
    }
}

impl Diagnostic for FindingDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Warning => miette::Severity::Warning,
            Severity::Error => miette::Severity::Error,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.src.as_ref().map(|s| s as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            span,
        ))))
    }
}
