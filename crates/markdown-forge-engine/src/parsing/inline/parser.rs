use crate::error::{MarkdownError, Result};
use crate::html::HtmlNode;

use super::{
    kinds::{CodeSpan, Emphasis, Image, InlineTarget, Link},
    types::{SpanKind, TextSpan},
};

/// Delimiter passes in the order they must run.
const DELIMITER_PASSES: [(&str, SpanKind); 3] = [
    (Emphasis::BOLD, SpanKind::Bold),
    (Emphasis::ITALIC, SpanKind::Italic),
    (CodeSpan::TICK, SpanKind::Code),
];

/// Parses the inline text of a block into spans.
///
/// Starts from a single plain span and runs every stage of the pipeline
/// over it: delimiters first, then images, then links.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, kind) in DELIMITER_PASSES {
        spans = split_spans_delimiter(spans, delimiter, kind)?;
    }
    spans = split_spans_image(spans)?;
    split_spans_link(spans)
}

/// Parses inline text straight to the HTML leaves that render it.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    text_to_spans(text)?
        .iter()
        .map(|span| span.to_html_node().map(HtmlNode::from))
        .collect()
}

/// Splits every plain span on `delimiter`.
///
/// Text between a pair of delimiters becomes a span of `kind`; the rest stays
/// plain. Empty pieces are dropped. An unpaired delimiter is an error.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::MalformedDelimiter {
                delimiter: delimiter.to_string(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan::new(part, part_kind));
        }
    }
    Ok(out)
}

/// Splits `![alt](url)` occurrences out of every plain span.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_spans_target(spans, SpanKind::Image, Image::find)
}

/// Splits `[text](url)` occurrences out of every plain span.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_spans_target(spans, SpanKind::Link, Link::find)
}

/// Returns `(alt, url)` for every image in `text`, in order.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Image::regex()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Returns `(text, url)` for every link in `text` that is not an image, in order.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    Link::regex()
        .captures_iter(text)
        .filter(|caps| !caps[0].starts_with(Link::IMAGE_MARKER))
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Shared image/link splitter.
///
/// Repeatedly finds the first occurrence in the unscanned remainder, emits the
/// text before it as plain, the occurrence as a `kind` span, and continues
/// after it.
fn split_spans_target(
    spans: Vec<TextSpan>,
    kind: SpanKind,
    find: fn(&str) -> Option<InlineTarget>,
) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() || find(span.content.as_str()).is_none() {
            out.push(span);
            continue;
        }

        let mut remaining = span.content.as_str();
        while let Some(target) = find(remaining) {
            let before = &remaining[..target.start];
            let after = remaining[target.start..]
                .strip_prefix(target.markup.as_str())
                .ok_or_else(|| MarkdownError::MalformedInlineTarget {
                    kind: kind.as_str(),
                    markup: target.markup.clone(),
                })?;

            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(TextSpan::with_destination(
                target.label,
                kind,
                target.destination,
            ));
            remaining = after;
        }

        if !remaining.is_empty() {
            out.push(TextSpan::plain(remaining));
        }
    }
    Ok(out)
}
