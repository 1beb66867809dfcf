//! Bullet line → contributor entry.

use crate::error::LintError;
use crate::model::Entry;
use regex::Regex;
use std::sync::LazyLock;

/// `- [Display Name]`, capturing the display name.
static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\s*\[([^\]]+)\]").unwrap());

/// Parse one trimmed bullet line.
pub fn parse(line: &str) -> Result<Entry, LintError> {
    let caps = RE_NAME
        .captures(line)
        .ok_or_else(|| LintError::MalformedEntry(line.to_string()))?;
    let name = normalize_name(&caps[1]);
    let sort_key = sort_key(&name);
    Ok(Entry {
        line: line.to_string(),
        name,
        sort_key,
    })
}

/// Drop a `(nickname)` aside: "John L. Peterson (Jack)" → "John L. Peterson".
pub fn normalize_name(display: &str) -> String {
    match display.split_once('(') {
        Some((before, _)) => before.trim().to_string(),
        None => display.to_string(),
    }
}

/// Lowercased first space-separated token of a normalized name.
pub fn sort_key(name: &str) -> String {
    name.split(' ').next().unwrap_or_default().to_lowercase()
}
