//! # Inline Parsing
//!
//! Turns the raw text of one block into an ordered sequence of [`TextSpan`]s.
//!
//! ## Pipeline
//!
//! Each stage only looks at `Plain` spans; spans already claimed by an
//! earlier stage pass through untouched.
//!
//! 1. Delimiter splits: `**` (bold), then `*` (italic), then `` ` `` (code)
//! 2. Image extraction: `![alt](url)`
//! 3. Link extraction: `[text](url)` not preceded by `!`
//!
//! Bold runs before italic so the `*`s of `**` are never read as italics,
//! and images run before links so `![..](..)` is never split as a link.
//!
//! ## Modules
//!
//! - **`types`**: `SpanKind`, `TextSpan` and span to leaf-node conversion
//! - **`kinds`**: delimiter constants and the image/link patterns
//! - **`parser`**: the splitting stages and the `text_to_spans` entry point

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    extract_markdown_images, extract_markdown_links, split_spans_delimiter, split_spans_image,
    split_spans_link, text_to_children, text_to_spans,
};
pub use types::{SpanKind, TextSpan};
