//! roster-lint: check the contributor roster in a project README.
//!
//! Looks for the "Maintainers", "Approvers", "Emeritus Maintainers" and
//! "Emeritus Approvers" sections and verifies that:
//!
//! - names are sorted alphabetically by first name, and
//! - emeritus entries carry no company affiliation.
//!
//! Exit status is 0 when every section passes, 1 when any section fails and
//! 2 when the document cannot be checked at all.

mod check;
mod error;
mod fix;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use error::LintError;
use model::{Document, Report, SectionSpec};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "roster-lint",
    about = "Check that README contributor lists are sorted and emeritus entries carry no affiliation"
)]
struct Cli {
    /// Roster document to check
    #[arg(default_value = "README.md")]
    file: PathBuf,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Section to check for ordering (repeatable). Replaces the default set.
    #[arg(short = 's', long = "section")]
    sections: Vec<String>,

    /// Emeritus section to check for ordering and affiliations (repeatable).
    /// Replaces the default set.
    #[arg(short = 'e', long = "emeritus")]
    emeritus: Vec<String>,

    /// Rewrite out-of-order sections in place
    #[arg(long)]
    fix: bool,

    /// Only print failing sections; no warnings
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Cli {
    fn section_specs(&self) -> Vec<SectionSpec> {
        if self.sections.is_empty() && self.emeritus.is_empty() {
            return SectionSpec::defaults();
        }
        self.sections
            .iter()
            .map(|name| SectionSpec::new(name.as_str(), false))
            .chain(
                self.emeritus
                    .iter()
                    .map(|name| SectionSpec::new(name.as_str(), true)),
            )
            .collect()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let renderer = render::create_renderer(&cli.format, cli.quiet)?;
    let specs = cli.section_specs();

    let mut doc = read_document(&cli.file)?;
    let path = cli.file.to_string_lossy().to_string();
    let mut report = check::validate(&path, &doc, &specs);

    if cli.fix {
        if let Some(fixed) = fix::apply(&doc, &report) {
            fs::write(&cli.file, &fixed)
                .with_context(|| format!("failed to write {}", cli.file.display()))?;
            if !cli.quiet {
                eprintln!("warning: reordered sections in {}", cli.file.display());
            }
            doc = Document::from_bytes(fixed);
            report = check::validate(&path, &doc, &specs);
        }
    }

    if !cli.quiet {
        warn_skipped(&report);
    }
    print!("{}", renderer.render(&report)?);

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read and normalize the roster. Only a failed open or read aborts the
/// whole run; invalid UTF-8 is replaced and checked like any other text.
fn read_document(path: &Path) -> Result<Document> {
    let raw = fs::read(path).map_err(|e| LintError::DocumentUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(Document::from_bytes(raw))
}

fn warn_skipped(report: &Report) {
    for section in &report.sections {
        for skipped in &section.skipped {
            eprintln!("warning: {}: skipping {}", section.spec.name, skipped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("roster-lint").chain(args.iter().copied()))
    }

    #[test]
    fn default_sections() {
        assert_eq!(cli(&[]).section_specs(), SectionSpec::defaults());
        assert_eq!(cli(&[]).file, PathBuf::from("README.md"));
    }

    #[test]
    fn custom_sections_replace_defaults() {
        let specs = cli(&["-e", "Alumni", "-s", "Reviewers", "ROSTER.md"]).section_specs();
        assert_eq!(
            specs,
            vec![
                SectionSpec::new("Reviewers", false),
                SectionSpec::new("Alumni", true),
            ]
        );
    }

    #[test]
    fn non_utf8_document_is_checked() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, b"Caf\xe9 intro\n\n### Maintainers\n\n- [Alice]\n- [Bob]\n").unwrap();
        let doc = read_document(&path).unwrap();
        let specs = [SectionSpec::new("Maintainers", false)];
        let report = check::validate("README.md", &doc, &specs);
        assert!(report.is_ok());
    }

    #[test]
    fn unreadable_document() {
        let err = read_document(Path::new("/nonexistent/README.md")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read /nonexistent/README.md"));
    }
}
