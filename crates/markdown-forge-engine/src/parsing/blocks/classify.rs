use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a block by its text.
///
/// Rules are checked in order and the first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
/// A block that starts like a quote or list but breaks the pattern on a
/// later line is a paragraph.
pub fn classify_block(block: &str) -> BlockKind {
    let kind = classify_lines(block);
    log::trace!("classified block as {kind}: {block:?}");
    kind
}

fn classify_lines(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }

    let lines: Vec<&str> = block.lines().collect();
    if CodeFence::is_fenced(&lines) {
        return BlockKind::Code;
    }
    if block.starts_with(BlockQuote::PREFIX) {
        return if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
            BlockKind::Quote
        } else {
            BlockKind::Paragraph
        };
    }
    if UnorderedList::is_list(&lines) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::is_list(&lines) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
