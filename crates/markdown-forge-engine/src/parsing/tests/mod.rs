//! Whole-document tests for the conversion pipeline.


use pretty_assertions::assert_eq;

use crate::{
    error::MarkdownError,
    parsing::{convert_document, extract_title, render_document},
};

#[test]
fn bold_inside_paragraph() {
    assert_eq!(
        render_document("This is **bold** text").unwrap(),
        "<div><p>This is <b>bold</b> text</p></div>"
    );
}

#[test]
fn heading_then_paragraph() {
    assert_eq!(
        render_document("# Title\n\nBody text").unwrap(),
        "<div><h1>Title</h1><p>Body text</p></div>"
    );
}

#[test]
fn fenced_code() {
    assert_eq!(
        render_document("```\ncode line\n```").unwrap(),
        "<div><pre><code>code line\n</code></pre></div>"
    );
}

#[test]
fn unordered_list() {
    assert_eq!(
        render_document("- one\n- two").unwrap(),
        "<div><ul><li>one</li><li>two</li></ul></div>"
    );
}

#[test]
fn image_paragraph() {
    assert_eq!(
        render_document("![alt](x.png)").unwrap(),
        "<div><p><img src=\"x.png\" alt=\"alt\"></p></div>"
    );
}

#[test]
fn title_skips_deeper_headings() {
    assert_eq!(
        extract_title("## Not this\n# Real Title\n").unwrap(),
        "Real Title"
    );
}

#[test]
fn unterminated_delimiters_fail() {
    for (md, delimiter) in [("**a", "**"), ("*a", "*"), ("`a", "`"), ("a ** b ** c **", "**")] {
        assert_eq!(
            convert_document(md).unwrap_err(),
            MarkdownError::MalformedDelimiter {
                delimiter: delimiter.to_string()
            }
        );
    }
}

#[test]
fn every_example_tree_is_well_formed() {
    let docs = [
        "# Title\n\nBody with [a link](https://x.dev) and ![img](i.png)",
        "> quoted **bold**\n> and *italic*",
        "1. one\n2. two\n3. three\n\n- a\n- b",
        "```\nraw **not bold**\n```\n\n###### tiny",
    ];
    for md in docs {
        let node = convert_document(md).unwrap();
        invariants::check(&node);
    }
}
