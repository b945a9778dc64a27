use std::fmt;
use std::str::FromStr;

use crate::error::{MarkdownError, Result};

use super::kinds::Heading;

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other rule matches.
    Paragraph,
    /// `#` through `######`.
    Heading {
        /// 1 to 6.
        level: u8,
    },
    /// A fenced ```` ``` ```` block, rendered verbatim.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

impl BlockKind {
    /// HTML tag of the parent node this kind converts to.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading { level } => match level {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            BlockKind::Code => "pre",
            BlockKind::Quote => "blockquote",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Paragraph => f.write_str("paragraph"),
            BlockKind::Heading { level } => write!(f, "heading_{level}"),
            BlockKind::Code => f.write_str("code"),
            BlockKind::Quote => f.write_str("quote"),
            BlockKind::UnorderedList => f.write_str("unordered_list"),
            BlockKind::OrderedList => f.write_str("ordered_list"),
        }
    }
}

impl FromStr for BlockKind {
    type Err = MarkdownError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "paragraph" => Ok(BlockKind::Paragraph),
            "code" => Ok(BlockKind::Code),
            "quote" => Ok(BlockKind::Quote),
            "unordered_list" => Ok(BlockKind::UnorderedList),
            "ordered_list" => Ok(BlockKind::OrderedList),
            other => other
                .strip_prefix("heading_")
                .and_then(|level| level.parse::<u8>().ok())
                .filter(|level| (1..=Heading::MAX_LEVEL).contains(level))
                .map(|level| BlockKind::Heading { level })
                .ok_or_else(|| MarkdownError::UnknownBlockKind(other.to_string())),
        }
    }
}
