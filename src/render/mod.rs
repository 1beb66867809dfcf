//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod text;

use crate::model::Report;
use anyhow::{anyhow, Result};

/// Trait for rendering a check report into a specific output format.
pub trait Renderer {
    fn render(&self, report: &Report) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, quiet: bool) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer { quiet })),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert!(create_renderer("text", false).is_ok());
        assert!(create_renderer("txt", true).is_ok());
        assert!(create_renderer("json", false).is_ok());
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml", false).err().unwrap();
        assert!(err.to_string().contains("unknown format: xml"));
    }
}
