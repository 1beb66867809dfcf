//! Emeritus entries must not keep a company suffix.
//!
//! Heuristic: a line that contains `, ` and does not end with `)` is split on
//! `, `; the second piece is taken as an affiliation unless it is empty or
//! looks like a URL. Names such as "Smith, Jr." are flagged too, and
//! affiliations written without a comma go unnoticed.

use crate::model::Violation;
use crate::parser::BULLET_PREFIX;

/// Check trimmed block lines of an emeritus section.
pub fn check<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Violation> {
    lines.into_iter().filter_map(company_suffix).collect()
}

fn company_suffix(line: &str) -> Option<Violation> {
    if !line.starts_with(BULLET_PREFIX) || !line.contains(", ") || line.ends_with(')') {
        return None;
    }
    let company = line.split(", ").nth(1)?.trim();
    if company.is_empty() || company.starts_with("http") {
        return None;
    }
    Some(Violation::Affiliation {
        line: line.to_string(),
        company: company.to_string(),
    })
}
