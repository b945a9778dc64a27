use anyhow::{Context, Result};
use markdown_forge_engine::{extract_title, render_document};
use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Root-relative attribute prefixes rewritten to the configured base path.
const ROOT_RELATIVE_ATTRS: [&str; 2] = ["href", "src"];

/// Renders one markdown page into the template.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String> {
    let title = extract_title(markdown)?;
    let content = render_document(markdown)?;
    let page = fill_template(template, &title, &content);
    Ok(rewrite_base_path(&page, base_path))
}

/// Substitutes every title and content placeholder.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Points root-relative `href="/` and `src="/` links at `base_path`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    ROOT_RELATIVE_ATTRS
        .iter()
        .fold(html.to_string(), |html, attr| {
            html.replace(&format!("{attr}=\"/"), &format!("{attr}=\"{base_path}"))
        })
}

/// Maps `blog/post.md` to `blog/post.html`.
pub fn output_path_for(source: &RelativePath) -> RelativePathBuf {
    source.with_extension("html")
}

/// Reads, renders and writes a single page.
pub fn generate_page(
    source: &RelativePath,
    content_root: &Path,
    template: &str,
    output_root: &Path,
    base_path: &str,
) -> Result<RelativePathBuf> {
    let source_path = source.to_path(content_root);
    let markdown = super::io::read_file(source, content_root)
        .with_context(|| format!("Failed to read {}", source_path.display()))?;
    let html = render_page(&markdown, template, base_path)
        .with_context(|| format!("Failed to render {}", source_path.display()))?;

    let dest = output_path_for(source);
    super::io::write_file(&dest, output_root, &html)
        .with_context(|| format!("Failed to write {}", dest.to_path(output_root).display()))?;
    log::info!("Generated {source} -> {dest}");
    Ok(dest)
}
