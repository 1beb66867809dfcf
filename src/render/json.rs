//! JSON renderer: structured output for CI tooling.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    sections: Vec<JsonSection<'a>>,
    passed: usize,
    failed: usize,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    name: &'a str,
    emeritus: bool,
    status: &'static str,
    entries: &'a [Entry],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<String>,
    violations: &'a [Violation],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    kind: &'static str,
    message: String,
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let sections = report
            .sections
            .iter()
            .map(|s| JsonSection {
                name: &s.spec.name,
                emeritus: s.spec.emeritus,
                status: match s.status {
                    SectionStatus::Passed => "passed",
                    SectionStatus::Failed(_) => "failed",
                    SectionStatus::Error(_) => "error",
                },
                entries: &s.entries,
                skipped: s.skipped.iter().map(|e| e.to_string()).collect(),
                violations: s.violations(),
                error: match &s.status {
                    SectionStatus::Error(e) => Some(JsonError {
                        kind: e.kind(),
                        message: e.to_string(),
                    }),
                    _ => None,
                },
            })
            .collect();

        let mut out = serde_json::to_string_pretty(&JsonReport {
            path: &report.path,
            sections,
            passed: report.passed_count(),
            failed: report.failed_count(),
        })?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check;
    use serde_json::Value;

    fn render(text: &str) -> Value {
        let doc = Document::new(text);
        let report = check::validate("README.md", &doc, &SectionSpec::defaults());
        serde_json::from_str(&JsonRenderer.render(&report).unwrap()).unwrap()
    }

    #[test]
    fn order_violation_fields() {
        let v = render("### Maintainers\n\n- [Bob Jones]\n- [Alice Smith]\n");
        let section = &v["sections"][0];
        assert_eq!(section["name"], "Maintainers");
        assert_eq!(section["status"], "failed");
        let violation = &section["violations"][0];
        assert_eq!(violation["kind"], "order");
        assert_eq!(violation["expected"], serde_json::json!(["alice", "bob"]));
        assert_eq!(section["entries"][0]["sort_key"], "bob");
    }

    #[test]
    fn affiliation_violation_fields() {
        let v = render("### Emeritus Approvers\n\n- [Carol Lee], Acme Corp\n");
        let section = &v["sections"][3];
        assert_eq!(section["emeritus"], true);
        assert_eq!(section["violations"][0]["kind"], "affiliation");
        assert_eq!(section["violations"][0]["company"], "Acme Corp");
    }

    #[test]
    fn missing_section_error() {
        let v = render("");
        assert_eq!(v["failed"], 4);
        assert_eq!(v["passed"], 0);
        assert_eq!(v["sections"][1]["status"], "error");
        assert_eq!(v["sections"][1]["error"]["kind"], "section_not_found");
    }

    #[test]
    fn skipped_lines_are_listed() {
        let v = render("### Maintainers\n\n- [Alice]\n- [Broken\n");
        assert_eq!(v["sections"][0]["skipped"][0], "malformed entry: - [Broken");
        assert!(v["sections"][1].get("skipped").is_none());
    }
}
