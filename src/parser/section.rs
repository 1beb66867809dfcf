//! Locate the bullet block under a `### <name>` heading.
//!
//! The heading must be followed by exactly one blank line and at least one
//! line starting with `- [`. The block runs until the first line without
//! that prefix. Occurrences of the heading that are not followed by such a
//! block are skipped, and the search continues further down the document.

use super::BULLET_PREFIX;
use crate::error::LintError;
use crate::model::{Section, SectionSpec};

/// Find the first qualifying block for `spec` in the normalized document text.
pub fn extract<'a>(text: &'a str, spec: &SectionSpec) -> Result<Section<'a>, LintError> {
    let marker = format!("{}\n\n", spec.heading());
    let mut from = 0;
    while let Some(pos) = text[from..].find(&marker) {
        let heading_at = from + pos;
        let start = heading_at + marker.len();
        let len = bullet_run(&text[start..]);
        if len > 0 {
            return Ok(Section {
                block: &text[start..start + len],
                start,
            });
        }
        // '#' is ASCII, so one byte past it is still a char boundary
        from = heading_at + 1;
    }
    Err(LintError::SectionNotFound(spec.name.clone()))
}

/// Byte length of the leading run of complete bullet lines in `rest`.
fn bullet_run(rest: &str) -> usize {
    rest.split_inclusive('\n')
        .take_while(|line| line.starts_with(BULLET_PREFIX) && line.ends_with('\n'))
        .map(str::len)
        .sum()
}
