use crate::error::{MarkdownError, Result};

/// Blockquote, every line prefixed with `>`.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Removes the leading `>` run and surrounding whitespace from one line.
    pub fn strip_line(line: &str) -> Result<&str> {
        if !Self::is_quote_line(line) {
            return Err(MarkdownError::InvalidQuoteBlock {
                line: line.to_string(),
            });
        }
        Ok(line.trim_start_matches(Self::PREFIX).trim())
    }
}
