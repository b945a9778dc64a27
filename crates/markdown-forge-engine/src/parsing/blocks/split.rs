use super::kinds::Heading;

/// Separator between blocks. Longer runs of newlines leave only whitespace
/// pieces behind, which are discarded after trimming.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks.
///
/// Blocks made only of heading lines are expanded so that each heading
/// becomes a block of its own.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let normalized = markdown.replace("\r\n", "\n");
    normalized
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .flat_map(expand_heading_run)
        .map(str::to_string)
        .collect()
}

/// Expands a block whose every line is a heading into one block per line.
///
/// Any other block is returned unchanged as a single unit.
pub fn expand_heading_run(block: &str) -> Vec<&str> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() > 1 && lines.iter().all(|line| Heading::is_heading_line(line)) {
        lines
    } else {
        vec![block]
    }
}
