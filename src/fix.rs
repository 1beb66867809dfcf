//! Rewrite out-of-order sections in sorted order.
//!
//! Only ordering is repaired. Affiliation suffixes need a human decision and
//! are left untouched. Edits are made on the file's raw bytes: everything
//! outside a reordered block is written back as read, and inside a block
//! each line position keeps its original line ending.

use crate::model::*;
use crate::parser::{entry, section};

/// Return the fixed file content, or `None` when no section needed reordering.
pub fn apply(doc: &Document, report: &Report) -> Option<Vec<u8>> {
    let mut edits: Vec<(usize, usize, Vec<u8>)> = Vec::new();

    for section_report in &report.sections {
        let needs_order = section_report
            .violations()
            .iter()
            .any(|v| matches!(v, Violation::Order { .. }));
        if !needs_order {
            continue;
        }
        let Ok(section) = section::extract(doc.text(), &section_report.spec) else {
            continue;
        };
        let (Some(start), Some(end)) = (
            doc.raw_offset(section.start),
            doc.raw_offset(section.end()),
        ) else {
            continue;
        };
        if edits.iter().any(|(s, _, _)| *s == start) {
            continue;
        }
        edits.push((start, end, reorder_block(&doc.raw()[start..end])));
    }

    if edits.is_empty() {
        return None;
    }

    let mut raw = doc.raw().to_vec();
    edits.sort_by(|a, b| b.0.cmp(&a.0));
    for (start, end, block) in edits {
        raw = [&raw[..start], &block[..], &raw[end..]].concat();
    }
    Some(raw)
}

/// Sort the parseable lines of a raw bullet block by first name. Lines that
/// do not parse keep their relative order after the sorted ones.
fn reorder_block(block: &[u8]) -> Vec<u8> {
    let lines: Vec<(&[u8], &[u8])> = block
        .split_inclusive(|b| *b == b'\n')
        .map(split_line_ending)
        .collect();

    let mut parsed: Vec<(String, &[u8])> = Vec::new();
    let mut rest: Vec<&[u8]> = Vec::new();
    for (content, _) in &lines {
        match entry::parse(String::from_utf8_lossy(content).trim()) {
            Ok(e) => parsed.push((e.sort_key, *content)),
            Err(_) => rest.push(*content),
        }
    }
    parsed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = Vec::with_capacity(block.len());
    let contents = parsed.iter().map(|(_, c)| *c).chain(rest);
    for (content, (_, ending)) in contents.zip(&lines) {
        out.extend_from_slice(content);
        out.extend_from_slice(ending);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check;

    fn fix_bytes(raw: &[u8]) -> Option<Vec<u8>> {
        let doc = Document::from_bytes(raw.to_vec());
        let report = check::validate("README.md", &doc, &SectionSpec::defaults());
        apply(&doc, &report)
    }

    fn fix(text: &str) -> Option<String> {
        fix_bytes(text.as_bytes()).map(|raw| String::from_utf8(raw).unwrap())
    }

    #[test]
    fn reorders_section_in_place() {
        let text = "intro\n\n### Maintainers\n\n- [Bob Jones]\n- [Alice Smith]\n\n### Approvers\n\n- [Zed]\n";
        let fixed = fix(text).unwrap();
        assert_eq!(
            fixed,
            "intro\n\n### Maintainers\n\n- [Alice Smith]\n- [Bob Jones]\n\n### Approvers\n\n- [Zed]\n"
        );
    }

    #[test]
    fn fixes_several_sections() {
        let text = "### Maintainers\n\n- [B]\n- [A]\n\n### Approvers\n\n- [D]\n- [C]\n";
        let fixed = fix(text).unwrap();
        assert_eq!(
            fixed,
            "### Maintainers\n\n- [A]\n- [B]\n\n### Approvers\n\n- [C]\n- [D]\n"
        );
    }

    #[test]
    fn sorted_document_needs_no_fix() {
        assert_eq!(fix("### Maintainers\n\n- [A]\n- [B]\n"), None);
    }

    #[test]
    fn affiliation_is_not_fixed() {
        assert_eq!(fix("### Emeritus Approvers\n\n- [Carol Lee], Acme Corp\n"), None);
    }

    #[test]
    fn malformed_lines_move_to_end() {
        assert_eq!(
            reorder_block(b"- [B]\n- [oops\n- [A]\n"),
            b"- [A]\n- [B]\n- [oops\n"
        );
    }

    #[test]
    fn crlf_endings_are_kept() {
        let text = "intro\r\n\r\n### Maintainers\r\n\r\n- [Bob]\r\n- [Alice]\r\n\r\nfooter\r\n";
        assert_eq!(
            fix(text).unwrap(),
            "intro\r\n\r\n### Maintainers\r\n\r\n- [Alice]\r\n- [Bob]\r\n\r\nfooter\r\n"
        );
    }

    #[test]
    fn missing_final_newline_is_kept() {
        assert_eq!(
            fix("### Maintainers\n\n- [B]\n- [A]").unwrap(),
            "### Maintainers\n\n- [A]\n- [B]"
        );
    }

    #[test]
    fn invalid_utf8_outside_block_is_kept() {
        let fixed = fix_bytes(b"Caf\xe9\n\n### Maintainers\n\n- [B]\n- [A]\n").unwrap();
        assert_eq!(fixed, b"Caf\xe9\n\n### Maintainers\n\n- [A]\n- [B]\n");
    }

    #[test]
    fn fixed_document_passes() {
        let text = "### Maintainers\n\n- [Carl]\n- [Bea]\n- [Al]\n";
        let fixed = Document::new(&fix(text).unwrap());
        let specs = [SectionSpec::new("Maintainers", false)];
        let report = check::validate("README.md", &fixed, &specs);
        assert!(report.is_ok());
    }
}
