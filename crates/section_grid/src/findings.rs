//! Validation findings and the caller-owned report they accumulate into.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::slice::Iter;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Geometrically invalid; the layout cannot be rendered
    Error,
    /// Tolerated but suspicious; flagged for review
    Warning,
}

impl Display for Severity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => formatter.write_str("error"),
            Self::Warning => formatter.write_str("warning"),
        }
    }
}

/// A single finding. Coordinates are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    level: Severity,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

impl ValidationMessage {
    /// Create an error-level finding.
    pub fn error(text: impl Into<String>) -> Self {
        Self::with_level(Severity::Error, text)
    }

    /// Create a warning-level finding.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_level(Severity::Warning, text)
    }

    fn with_level(level: Severity, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            row: None,
            column: None,
        }
    }

    /// Attach a zero-based address; stored 1-based.
    #[must_use]
    pub fn at(mut self, row: usize, column: usize) -> Self {
        self.row = Some(row.saturating_add(1));
        self.column = Some(column.saturating_add(1));
        self
    }

    /// Attach a zero-based row; stored 1-based.
    #[must_use]
    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row.saturating_add(1));
        self
    }

    /// Severity.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Human-readable text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based row, if the finding is tied to one.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// 1-based column, if the finding is tied to one.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Whether this finding is error-level.
    pub fn is_error(&self) -> bool {
        self.level == Severity::Error
    }
}

impl Display for ValidationMessage {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.level)?;
        match (self.row, self.column) {
            (Some(row), Some(column)) => write!(formatter, " at row {row}, column {column}")?,
            (Some(row), None) => write!(formatter, " at row {row}")?,
            _ => {}
        }
        write!(formatter, ": {}", self.text)
    }
}

/// Ordered, append-only list of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    messages: Vec<ValidationMessage>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding.
    pub fn push(&mut self, message: ValidationMessage) {
        self.messages.push(message);
    }

    /// All findings in the order they were reported.
    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    /// Iterate over findings in order.
    pub fn iter(&self) -> Iter<'_, ValidationMessage> {
        self.messages.iter()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no findings were reported.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True iff the report holds no error-level findings.
    pub fn is_valid(&self) -> bool {
        !self.messages.iter().any(ValidationMessage::is_error)
    }

    /// Error-level findings.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages.iter().filter(|message| message.is_error())
    }

    /// Warning-level findings.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages
            .iter()
            .filter(|message| message.level == Severity::Warning)
    }

    /// Count of error-level findings.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count of warning-level findings.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }
}

impl Extend<ValidationMessage> for ValidationReport {
    fn extend<I: IntoIterator<Item = ValidationMessage>>(&mut self, iter: I) {
        self.messages.extend(iter);
    }
}

impl<'report> IntoIterator for &'report ValidationReport {
    type Item = &'report ValidationMessage;
    type IntoIter = Iter<'report, ValidationMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(formatter, "{message}")?;
        }
        Ok(())
    }
}
