use crate::error::{MarkdownError, Result};

const TITLE_PREFIX: &str = "# ";

/// Returns the text of the first level-one heading line.
///
/// Lines starting with `##` or deeper are skipped, as are `# ` lines with
/// nothing after the prefix.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .filter_map(|line| line.trim().strip_prefix(TITLE_PREFIX))
        .map(str::trim)
        .find(|title| !title.is_empty())
        .map(str::to_string)
        .ok_or(MarkdownError::NoTitleFound)
}
