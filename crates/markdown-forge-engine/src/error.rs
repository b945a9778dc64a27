use thiserror::Error;

/// Every way a markdown document can fail to convert.
///
/// Conversion is all-or-nothing: the first error aborts the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    /// An inline delimiter (`**`, `*`, `` ` ``) was opened but never closed.
    #[error("no closing '{delimiter}' found")]
    MalformedDelimiter { delimiter: String },

    /// A matched image or link could not be located in the text it was matched from.
    #[error("invalid markdown, {kind} section not closed: {markup}")]
    MalformedInlineTarget { kind: &'static str, markup: String },

    #[error("invalid heading level in block: {block}")]
    InvalidHeadingLevel { block: String },

    #[error("invalid code block, missing ``` fence: {block}")]
    InvalidCodeBlock { block: String },

    #[error("invalid quote block, line does not start with '>': {line}")]
    InvalidQuoteBlock { line: String },

    #[error("invalid list item, missing list marker: {line}")]
    InvalidListItem { line: String },

    #[error("invalid HTML node: {reason}")]
    InvalidStructuralNode { reason: &'static str },

    #[error("unknown block kind: {0}")]
    UnknownBlockKind(String),

    #[error("unknown span kind: {0}")]
    UnknownSpanKind(String),

    /// A link or image span was built without a destination URL.
    #[error("{kind} span requires a destination")]
    MissingDestination { kind: &'static str },

    /// A span other than a link or image was given a destination URL.
    #[error("{kind} span cannot carry a destination")]
    UnexpectedDestination { kind: &'static str },

    #[error("no title found, expected a line starting with '# '")]
    NoTitleFound,
}

pub type Result<T, E = MarkdownError> = std::result::Result<T, E>;
