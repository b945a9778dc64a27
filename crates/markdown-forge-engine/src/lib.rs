pub mod error;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{MarkdownError, Result};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use parsing::{
    blocks::BlockKind,
    convert_document, extract_title,
    inline::{SpanKind, TextSpan},
    render_document,
};
