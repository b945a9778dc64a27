//! # Inline Kinds
//!
//! Each inline construct owns its syntax: delimiter strings and match patterns
//! live here, never as literals inside the parser.
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "*"`
//! - **`CodeSpan`**: the backtick `TICK`
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`, excluding images

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use image::Image;
pub use link::Link;

/// One image or link occurrence found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineTarget {
    /// Byte offset of the occurrence in the searched text.
    pub start: usize,
    /// Alt text for images, link text for links.
    pub label: String,
    pub destination: String,
    /// The exact source text of the occurrence.
    pub markup: String,
}
