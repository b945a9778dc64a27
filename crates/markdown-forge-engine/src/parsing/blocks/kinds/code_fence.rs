use crate::error::{MarkdownError, Result};

/// Fenced code block delimited by ```` ``` ```` on its first and last lines.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether the block's first and last lines both open with a fence.
    pub fn is_fenced(lines: &[&str]) -> bool {
        match (lines.first(), lines.last()) {
            (Some(first), Some(last)) if lines.len() >= 2 => {
                first.starts_with(Self::FENCE) && last.starts_with(Self::FENCE)
            }
            _ => false,
        }
    }

    /// Returns the verbatim text between the fences.
    ///
    /// The three fence characters are removed from each end and a single
    /// newline directly after the opening fence is dropped.
    pub fn content(block: &str) -> Result<&str> {
        let fence = Self::FENCE.len();
        if block.len() < fence * 2
            || !block.starts_with(Self::FENCE)
            || !block.ends_with(Self::FENCE)
        {
            return Err(MarkdownError::InvalidCodeBlock {
                block: block.to_string(),
            });
        }
        let inner = &block[fence..block.len() - fence];
        Ok(inner.strip_prefix('\n').unwrap_or(inner))
    }
}
