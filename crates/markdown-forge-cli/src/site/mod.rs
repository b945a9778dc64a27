//! # Site Generation
//!
//! Builds a static site from a content tree:
//!
//! 1. reset the output directory and copy static assets into it
//! 2. render every markdown file through the template into `.html`
//!
//! The engine only sees markdown text; file paths, templates and link
//! rewriting all live here.

pub mod io;
pub mod page;

use anyhow::{Context, Result};
use markdown_forge_config::Config;

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub static_files: usize,
    pub pages: usize,
}

pub fn build(config: &Config) -> Result<BuildSummary> {
    io::reset_dir(&config.output_path)
        .with_context(|| format!("Failed to reset {}", config.output_path.display()))?;

    let static_files = if config.static_path.is_dir() {
        log::info!(
            "Copying static files from {} to {}",
            config.static_path.display(),
            config.output_path.display()
        );
        io::copy_dir_recursive(&config.static_path, &config.output_path)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_path.display()
        );
        0
    };

    let template = std::fs::read_to_string(&config.template_path).with_context(|| {
        format!(
            "Failed to read template {}",
            config.template_path.display()
        )
    })?;

    let sources = io::scan_markdown_files(&config.content_path)
        .with_context(|| format!("Failed to scan {}", config.content_path.display()))?;

    for source in &sources {
        page::generate_page(
            source,
            &config.content_path,
            &template,
            &config.output_path,
            &config.base_path,
        )?;
    }

    Ok(BuildSummary {
        static_files,
        pages: sources.len(),
    })
}
