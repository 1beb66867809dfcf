//! Section-by-section validation of a roster document.
//!
//! Each section is checked in isolation: a missing or empty section fails
//! only its own report, and every configured section is always attempted.

pub mod affiliation;
pub mod order;

use crate::error::LintError;
use crate::model::*;
use crate::parser::{entry, section, BULLET_PREFIX};

/// Check every section in `specs` against `doc`.
pub fn validate(path: &str, doc: &Document, specs: &[SectionSpec]) -> Report {
    Report {
        path: path.to_string(),
        sections: specs.iter().map(|spec| validate_section(doc, spec)).collect(),
    }
}

/// Extract, parse and check a single section.
pub fn validate_section(doc: &Document, spec: &SectionSpec) -> SectionReport {
    let mut report = SectionReport {
        spec: spec.clone(),
        entries: Vec::new(),
        skipped: Vec::new(),
        status: SectionStatus::Passed,
    };

    let section = match section::extract(doc.text(), spec) {
        Ok(s) => s,
        Err(e) => {
            report.status = SectionStatus::Error(e);
            return report;
        }
    };

    let (entries, skipped) = parse_entries(&section);
    report.entries = entries;
    report.skipped = skipped;

    if report.entries.is_empty() {
        report.status = SectionStatus::Error(LintError::EmptySection(spec.name.clone()));
        return report;
    }

    let mut violations: Vec<Violation> = order::check(&report.entries).into_iter().collect();
    if spec.emeritus {
        violations.extend(affiliation::check(section.lines()));
    }
    if !violations.is_empty() {
        report.status = SectionStatus::Failed(violations);
    }
    report
}

/// Parse bullet lines of a block. Malformed lines are returned separately
/// instead of failing the section.
pub fn parse_entries(section: &Section) -> (Vec<Entry>, Vec<LintError>) {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for line in section.lines().filter(|l| l.starts_with(BULLET_PREFIX)) {
        match entry::parse(line) {
            Ok(e) => entries.push(e),
            Err(e) => skipped.push(e),
        }
    }
    (entries, skipped)
}
