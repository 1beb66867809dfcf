//! Human-readable report, one block per section.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;

pub struct TextRenderer {
    /// Leave out sections that passed.
    pub quiet: bool,
}

impl Renderer for TextRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        for section in &report.sections {
            match &section.status {
                SectionStatus::Passed => {
                    if !self.quiet {
                        out.push_str(&format!(
                            "ok: {} ({} entries)\n",
                            section.spec.name,
                            section.entries.len()
                        ));
                    }
                }
                SectionStatus::Error(e) => {
                    out.push_str(&format!("FAIL: {}\n  {}\n", section.spec.name, e));
                }
                SectionStatus::Failed(violations) => {
                    out.push_str(&format!("FAIL: {}\n", section.spec.name));
                    for v in violations {
                        render_violation(&mut out, &section.spec.name, v);
                    }
                }
            }
        }
        out.push_str(&format!(
            "\n{}: {} passed, {} failed\n",
            report.path,
            report.passed_count(),
            report.failed_count()
        ));
        Ok(out)
    }
}

fn render_violation(out: &mut String, section: &str, violation: &Violation) {
    match violation {
        Violation::Order {
            current,
            expected,
            corrected,
        } => {
            out.push_str(&format!(
                "  {} section is not sorted alphabetically by first name\n",
                section
            ));
            out.push_str(&format!("  current order: [{}]\n", current.join(", ")));
            out.push_str(&format!("  expected order: [{}]\n", expected.join(", ")));
            out.push_str("  correct ordering should be:\n");
            for line in corrected {
                out.push_str(&format!("    {}\n", line));
            }
        }
        Violation::Affiliation { line, company } => {
            out.push_str(&format!(
                "  company affiliation should be removed: {} (company: {})\n",
                line, company
            ));
        }
    }
}
