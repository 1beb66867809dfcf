//! Alphabetical ordering by first name.

use crate::model::{Entry, Violation};

/// Compare the keys in document order against a sorted copy.
///
/// Equal keys are allowed in any relative order; any inversion is reported
/// together with the full listing in corrected order.
pub fn check(entries: &[Entry]) -> Option<Violation> {
    let current: Vec<String> = entries.iter().map(|e| e.sort_key.clone()).collect();
    let mut expected = current.clone();
    expected.sort();

    if current == expected {
        return None;
    }

    Some(Violation::Order {
        current,
        expected,
        corrected: sorted(entries).into_iter().map(|e| e.line.clone()).collect(),
    })
}

/// Entries in sort-key order, keeping document order between equal keys.
pub fn sorted(entries: &[Entry]) -> Vec<&Entry> {
    let mut out: Vec<&Entry> = entries.iter().collect();
    out.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
    out
}
