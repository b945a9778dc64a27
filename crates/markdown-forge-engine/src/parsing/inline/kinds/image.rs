use std::sync::OnceLock;

use regex::Regex;

use super::InlineTarget;

/// Inline image `![alt](url)`.
///
/// Alt text may not contain `[` or `]` and the URL may not contain `(` or `)`;
/// there is no escaping, so `![a](x_(1).png)` is not an image.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }

    pub fn markup(alt: &str, url: &str) -> String {
        format!("![{alt}]({url})")
    }

    /// Finds the first image in `text`.
    pub fn find(text: &str) -> Option<InlineTarget> {
        let caps = Self::regex().captures(text)?;
        let whole = caps.get(0)?;
        Some(InlineTarget {
            start: whole.start(),
            label: caps[1].to_string(),
            destination: caps[2].to_string(),
            markup: Self::markup(&caps[1], &caps[2]),
        })
    }
}
