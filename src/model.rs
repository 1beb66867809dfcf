//! Data model for a roster check: independent of the output format.

use crate::error::LintError;
use serde::Serialize;

/// Roster document: the bytes as read, plus text normalized to
/// `\n`-terminated lines for parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw: Vec<u8>,
    text: String,
    /// `(text offset, raw offset)` of every line start, then of the end.
    line_starts: Vec<(usize, usize)>,
}

impl Document {
    #[cfg(test)]
    pub fn new(raw: &str) -> Self {
        Document::from_bytes(raw.as_bytes().to_vec())
    }

    /// Normalize raw file content: drop `\r` from CRLF endings, make sure
    /// every line, the last one included, ends with `\n`, and replace
    /// invalid UTF-8 with U+FFFD.
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        let mut text = String::with_capacity(raw.len() + 1);
        let mut line_starts = Vec::new();
        let mut raw_pos = 0;
        for piece in raw.split_inclusive(|b| *b == b'\n') {
            line_starts.push((text.len(), raw_pos));
            let (content, _) = split_line_ending(piece);
            text.push_str(&String::from_utf8_lossy(content));
            text.push('\n');
            raw_pos += piece.len();
        }
        line_starts.push((text.len(), raw.len()));
        Document {
            raw,
            text,
            line_starts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Raw byte offset of a line boundary in the normalized text. `None` for
    /// offsets inside a line.
    pub fn raw_offset(&self, text_offset: usize) -> Option<usize> {
        self.line_starts
            .binary_search_by_key(&text_offset, |(t, _)| *t)
            .ok()
            .map(|i| self.line_starts[i].1)
    }
}

/// Split a raw line into its content and its `\n` or `\r\n` ending, if any.
pub fn split_line_ending(line: &[u8]) -> (&[u8], &[u8]) {
    let content_len = match line {
        [.., b'\r', b'\n'] => line.len() - 2,
        [.., b'\n'] => line.len() - 1,
        _ => line.len(),
    };
    line.split_at(content_len)
}

/// Which section to look for and whether it lists former contributors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: String,
    pub emeritus: bool,
}

impl SectionSpec {
    pub fn new(name: impl Into<String>, emeritus: bool) -> Self {
        SectionSpec {
            name: name.into(),
            emeritus,
        }
    }

    /// `### <name>` as it must appear in the document.
    pub fn heading(&self) -> String {
        format!("### {}", self.name)
    }

    /// The four sections every roster carries.
    pub fn defaults() -> Vec<SectionSpec> {
        vec![
            SectionSpec::new("Maintainers", false),
            SectionSpec::new("Approvers", false),
            SectionSpec::new("Emeritus Maintainers", true),
            SectionSpec::new("Emeritus Approvers", true),
        ]
    }
}

/// Bullet block found under a section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// The bullet lines, each still terminated by `\n`.
    pub block: &'a str,
    /// Byte offset of `block` within the document text.
    pub start: usize,
}

impl Section<'_> {
    pub fn end(&self) -> usize {
        self.start + self.block.len()
    }

    /// Block lines with surrounding whitespace trimmed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.block.lines().map(str::trim)
    }
}

/// One contributor line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Trimmed bullet line as written.
    pub line: String,
    /// Display name with any `(nickname)` aside removed.
    pub name: String,
    /// Lowercased first name.
    pub sort_key: String,
}

/// A reported, non-fatal problem in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    Order {
        current: Vec<String>,
        expected: Vec<String>,
        /// Raw lines re-emitted in sorted order.
        corrected: Vec<String>,
    },
    Affiliation {
        line: String,
        company: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum SectionStatus {
    Passed,
    Failed(Vec<Violation>),
    Error(LintError),
}

#[derive(Debug)]
pub struct SectionReport {
    pub spec: SectionSpec,
    pub entries: Vec<Entry>,
    /// Bullet lines that could not be parsed and were left out.
    pub skipped: Vec<LintError>,
    pub status: SectionStatus,
}

impl SectionReport {
    pub fn passed(&self) -> bool {
        matches!(self.status, SectionStatus::Passed)
    }

    pub fn violations(&self) -> &[Violation] {
        match &self.status {
            SectionStatus::Failed(v) => v,
            _ => &[],
        }
    }
}

/// Outcome of checking every configured section of one document.
#[derive(Debug)]
pub struct Report {
    pub path: String,
    pub sections: Vec<SectionReport>,
}

impl Report {
    pub fn passed_count(&self) -> usize {
        self.sections.iter().filter(|s| s.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.sections.len() - self.passed_count()
    }

    pub fn is_ok(&self) -> bool {
        self.failed_count() == 0
    }
}
