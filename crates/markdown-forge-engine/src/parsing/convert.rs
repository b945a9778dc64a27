use crate::error::Result;
use crate::html::{HtmlNode, LeafNode, ParentNode};

use super::{
    blocks::{
        BlockKind, classify_block,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        markdown_to_blocks,
    },
    inline::text_to_children,
};

/// Tag of the container wrapping a whole document.
pub const ROOT_TAG: &str = "div";

/// Converts a whole document into a single `<div>` tree.
///
/// Fails if any block fails, and if the document has no blocks at all
/// (a parent node cannot be empty).
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);
    log::debug!("converting document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| block_to_html_node(block))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParentNode::new(ROOT_TAG, children)?.into())
}

/// Classifies one block and converts it to its parent node.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode> {
    let node = match classify_block(block) {
        BlockKind::Paragraph => paragraph_to_html_node(block)?,
        BlockKind::Heading { .. } => heading_to_html_node(block)?,
        BlockKind::Code => code_to_html_node(block)?,
        BlockKind::Quote => quote_to_html_node(block)?,
        BlockKind::UnorderedList => unordered_list_to_html_node(block)?,
        BlockKind::OrderedList => ordered_list_to_html_node(block)?,
    };
    Ok(node.into())
}

pub fn paragraph_to_html_node(block: &str) -> Result<ParentNode> {
    let text = Paragraph::inline_text(block);
    ParentNode::new(BlockKind::Paragraph.tag(), text_to_children(&text)?)
}

pub fn heading_to_html_node(block: &str) -> Result<ParentNode> {
    let (level, text) = Heading::strip(block)?;
    ParentNode::new(BlockKind::Heading { level }.tag(), text_to_children(text)?)
}

/// Code content is not inline-parsed; it is emitted verbatim in `<pre><code>`.
pub fn code_to_html_node(block: &str) -> Result<ParentNode> {
    let code = LeafNode::new(Some("code"), CodeFence::content(block)?)?;
    ParentNode::new(BlockKind::Code.tag(), vec![code.into()])
}

pub fn quote_to_html_node(block: &str) -> Result<ParentNode> {
    let lines = block
        .lines()
        .map(BlockQuote::strip_line)
        .collect::<Result<Vec<_>>>()?;
    let text = lines.join(Paragraph::LINE_JOIN);
    ParentNode::new(BlockKind::Quote.tag(), text_to_children(&text)?)
}

pub fn unordered_list_to_html_node(block: &str) -> Result<ParentNode> {
    let items = list_items(block, UnorderedList::item_text)?;
    ParentNode::new(BlockKind::UnorderedList.tag(), items)
}

pub fn ordered_list_to_html_node(block: &str) -> Result<ParentNode> {
    let items = list_items(block, OrderedList::item_text)?;
    ParentNode::new(BlockKind::OrderedList.tag(), items)
}

fn list_items(block: &str, item_text: fn(&str) -> Result<&str>) -> Result<Vec<HtmlNode>> {
    block
        .lines()
        .map(|line| -> Result<HtmlNode> {
            let children = text_to_children(item_text(line)?)?;
            Ok(ParentNode::new("li", children)?.into())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkdownError;
    use pretty_assertions::assert_eq;

    fn render(md: &str) -> String {
        markdown_to_html_node(md).unwrap().render().unwrap()
    }

    #[test]
    fn paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with *italic* text and `code` here

";
        assert_eq!(
            render(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        let md = "
```
This is text that *should* remain
the **same** even with inline stuff
```
";
        assert_eq!(
            render(md),
            "<div><pre><code>This is text that *should* remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn heading_run() {
        let md = "
# Heading with **bold** text
### Subheading with *italic*
";
        assert_eq!(
            render(md),
            "<div><h1>Heading with <b>bold</b> text</h1><h3>Subheading with <i>italic</i></h3></div>"
        );
    }

    #[test]
    fn unordered_list() {
        let md = "
- First item
- Second with *italic*
";
        assert_eq!(
            render(md),
            "<div><ul><li>First item</li><li>Second with <i>italic</i></li></ul></div>"
        );
    }

    #[test]
    fn ordered_list() {
        let md = "
1. First item
2. Second with **bold**
";
        assert_eq!(
            render(md),
            "<div><ol><li>First item</li><li>Second with <b>bold</b></li></ol></div>"
        );
    }

    #[test]
    fn blockquote() {
        let md = "
> This is a quote
> with two lines and `code`
";
        assert_eq!(
            render(md),
            "<div><blockquote>This is a quote with two lines and <code>code</code></blockquote></div>"
        );
    }

    #[test]
    fn mixed_blocks() {
        let md = "
# Title

Paragraph line one
line two

- Item A
- Item B
";
        assert_eq!(
            render(md),
            "<div><h1>Title</h1><p>Paragraph line one line two</p><ul><li>Item A</li><li>Item B</li></ul></div>"
        );
    }

    #[test]
    fn broken_ordered_sequence_is_a_paragraph() {
        assert_eq!(
            render("1. a\n2. b\n4. c"),
            "<div><p>1. a 2. b 4. c</p></div>"
        );
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        assert_eq!(
            render("####### deep"),
            "<div><p>####### deep</p></div>"
        );
    }

    #[test]
    fn images_and_links_in_list_items() {
        assert_eq!(
            render("- ![cat](/cat.png)\n- [home](/)"),
            "<div><ul><li><img src=\"/cat.png\" alt=\"cat\"></li><li><a href=\"/\">home</a></li></ul></div>"
        );
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(matches!(
            markdown_to_html_node("\n\n  \n"),
            Err(MarkdownError::InvalidStructuralNode { .. })
        ));
    }

    #[test]
    fn one_bad_block_fails_the_document() {
        let err = markdown_to_html_node("# Fine\n\nBroken **bold\n\nAlso fine").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::MalformedDelimiter {
                delimiter: "**".to_string()
            }
        );
    }

    #[test]
    fn fenced_block_without_closing_suffix_is_an_error() {
        let err = markdown_to_html_node("```\ncode\n```rust").unwrap_err();
        assert!(matches!(err, MarkdownError::InvalidCodeBlock { .. }));
    }

    #[test]
    fn direct_conversion_errors() {
        assert!(matches!(
            heading_to_html_node("####### x"),
            Err(MarkdownError::InvalidHeadingLevel { .. })
        ));
        assert!(matches!(
            code_to_html_node("not code"),
            Err(MarkdownError::InvalidCodeBlock { .. })
        ));
        assert!(matches!(
            quote_to_html_node("> quoted\nnot quoted"),
            Err(MarkdownError::InvalidQuoteBlock { .. })
        ));
        assert!(matches!(
            unordered_list_to_html_node("- a\nb"),
            Err(MarkdownError::InvalidListItem { .. })
        ));
    }

    #[test]
    fn heading_tag_matches_level() {
        for level in 1..=6u8 {
            let md = format!("{} Level", "#".repeat(level as usize));
            assert_eq!(render(&md), format!("<div><h{level}>Level</h{level}></div>"));
        }
    }
}
