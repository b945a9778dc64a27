use crate::error::{MarkdownError, Result};

/// Unordered list, every line prefixed with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_list(lines: &[&str]) -> bool {
        !lines.is_empty() && lines.iter().all(|line| line.starts_with(Self::MARKER))
    }

    pub fn item_text(line: &str) -> Result<&str> {
        line.strip_prefix(Self::MARKER)
            .ok_or_else(|| MarkdownError::InvalidListItem {
                line: line.to_string(),
            })
    }
}

/// Ordered list numbered `1. `, `2. `, ... in sequence.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    pub fn marker(number: usize) -> String {
        format!("{number}{}", Self::SEPARATOR)
    }

    /// Whether every line carries the next number in the sequence starting at 1.
    pub fn is_list(lines: &[&str]) -> bool {
        !lines.is_empty()
            && lines
                .iter()
                .enumerate()
                .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Text after the first `. ` of the line.
    pub fn item_text(line: &str) -> Result<&str> {
        line.split_once(Self::SEPARATOR)
            .map(|(_, text)| text)
            .ok_or_else(|| MarkdownError::InvalidListItem {
                line: line.to_string(),
            })
    }
}
