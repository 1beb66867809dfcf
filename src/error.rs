//! Errors that stop a check, either for the whole run or for one section.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LintError {
    #[error("failed to read {}: {reason}", .path.display())]
    DocumentUnreadable { path: PathBuf, reason: String },

    #[error("section {0} not found")]
    SectionNotFound(String),

    #[error("no contributors found in {0} section")]
    EmptySection(String),

    #[error("malformed entry: {0}")]
    MalformedEntry(String),
}

impl LintError {
    /// Short machine-readable name used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            LintError::DocumentUnreadable { .. } => "document_unreadable",
            LintError::SectionNotFound(_) => "section_not_found",
            LintError::EmptySection(_) => "empty_section",
            LintError::MalformedEntry(_) => "malformed_entry",
        }
    }
}
