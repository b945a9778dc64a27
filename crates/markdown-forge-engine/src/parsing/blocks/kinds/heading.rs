use std::sync::OnceLock;

use regex::Regex;

use crate::error::{MarkdownError, Result};

/// ATX heading `# ` through `###### `.
///
/// A run of seven or more `#` is not a heading prefix at all; such a block
/// falls through to paragraph classification.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;
    pub const PATTERN: &'static str = r"^#{1,6} ";

    pub fn regex() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid heading regex"))
    }

    /// Returns the heading level if `block` opens with a valid heading prefix.
    pub fn level(block: &str) -> Option<u8> {
        Self::regex().find(block).map(|m| (m.len() - 1) as u8)
    }

    /// Whether a single line starts with one of the six heading prefixes.
    pub fn is_heading_line(line: &str) -> bool {
        Self::regex().is_match(line)
    }

    /// Splits a heading block into its level and the text after the prefix.
    ///
    /// Exactly one space after the `#` run is consumed.
    pub fn strip(block: &str) -> Result<(u8, &str)> {
        let hashes = block.chars().take_while(|c| *c == Self::MARKER).count();
        let invalid = || MarkdownError::InvalidHeadingLevel {
            block: block.to_string(),
        };
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return Err(invalid());
        }
        let text = block[hashes..].strip_prefix(' ').ok_or_else(invalid)?;
        Ok((hashes as u8, text))
    }
}
