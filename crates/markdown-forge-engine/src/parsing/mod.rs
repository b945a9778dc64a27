pub mod blocks;
pub mod convert;
pub mod inline;
pub mod title;

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::html::HtmlNode;

pub use convert::{block_to_html_node, markdown_to_html_node};
pub use title::extract_title;

/// Converts a markdown document into an HTML node tree rooted at a `<div>`.
///
/// This is the entry point for page generation: call [`HtmlNode::render`]
/// on the result to get the HTML string.
pub fn convert_document(markdown: &str) -> Result<HtmlNode> {
    markdown_to_html_node(markdown)
}

/// Converts and renders a document in one step.
pub fn render_document(markdown: &str) -> Result<String> {
    convert_document(markdown)?.render()
}
