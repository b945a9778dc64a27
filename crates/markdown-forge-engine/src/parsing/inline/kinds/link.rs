use std::sync::OnceLock;

use regex::Regex;

use super::InlineTarget;

/// Inline link `[text](url)`.
///
/// The pattern optionally takes a leading `!` so that image syntax is matched
/// as a whole and then skipped; a link is never read out of `![..](..)`.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"!?\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const IMAGE_MARKER: char = '!';

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    pub fn markup(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }

    /// Finds the first link in `text` that is not part of an image.
    pub fn find(text: &str) -> Option<InlineTarget> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if whole.as_str().starts_with(Self::IMAGE_MARKER) {
                    return None;
                }
                Some(InlineTarget {
                    start: whole.start(),
                    label: caps[1].to_string(),
                    destination: caps[2].to_string(),
                    markup: Self::markup(&caps[1], &caps[2]),
                })
            })
            .next()
    }
}
