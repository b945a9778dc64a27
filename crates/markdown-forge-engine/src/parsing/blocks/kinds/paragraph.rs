/// Paragraph block (marker struct).
///
/// Paragraphs have no delimiters; they are what every other rule falls back
/// to. Their lines are joined with a single space before inline parsing.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    pub fn inline_text(block: &str) -> String {
        block
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(Self::LINE_JOIN)
    }
}
