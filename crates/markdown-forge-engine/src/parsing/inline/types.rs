use std::fmt;
use std::str::FromStr;

use crate::error::{MarkdownError, Result};
use crate::html::{Attributes, LeafNode};

/// The formatting of one inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = MarkdownError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(MarkdownError::UnknownSpanKind(other.to_string())),
        }
    }
}

/// One inline unit of text. Links and images also carry a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub destination: Option<String>,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            destination: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn with_destination(
        content: impl Into<String>,
        kind: SpanKind,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            kind,
            destination: Some(destination.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Converts the span into the leaf node that renders it.
    ///
    /// | kind   | tag    | value   | attributes     |
    /// |--------|--------|---------|----------------|
    /// | Plain  | -      | content | -              |
    /// | Bold   | `b`    | content | -              |
    /// | Italic | `i`    | content | -              |
    /// | Code   | `code` | content | -              |
    /// | Link   | `a`    | content | `href`         |
    /// | Image  | `img`  | `""`    | `src`, `alt`   |
    ///
    /// Only links and images may carry a destination.
    pub fn to_html_node(&self) -> Result<LeafNode> {
        if self.destination.is_some() && !matches!(self.kind, SpanKind::Link | SpanKind::Image) {
            return Err(MarkdownError::UnexpectedDestination {
                kind: self.kind.as_str(),
            });
        }
        let node = match self.kind {
            SpanKind::Plain => LeafNode::text(self.content.as_str()),
            SpanKind::Bold => LeafNode::new(Some("b"), self.content.as_str())?,
            SpanKind::Italic => LeafNode::new(Some("i"), self.content.as_str())?,
            SpanKind::Code => LeafNode::new(Some("code"), self.content.as_str())?,
            SpanKind::Link => LeafNode::new(Some("a"), self.content.as_str())?
                .with_attributes(Attributes::new().with("href", self.destination()?)),
            SpanKind::Image => LeafNode::new(Some("img"), "")?.with_attributes(
                Attributes::new()
                    .with("src", self.destination()?)
                    .with("alt", self.content.as_str()),
            ),
        };
        Ok(node)
    }

    fn destination(&self) -> Result<&str> {
        self.destination
            .as_deref()
            .ok_or(MarkdownError::MissingDestination {
                kind: self.kind.as_str(),
            })
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextSpan({}, {}, {})",
            self.content,
            self.kind,
            self.destination.as_deref().unwrap_or("None")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn equal_when_content_and_kind_match() {
        assert_eq!(
            TextSpan::new("This is a text node", SpanKind::Bold),
            TextSpan::new("This is a text node", SpanKind::Bold)
        );
    }

    #[test]
    fn not_equal_when_kind_differs() {
        assert_ne!(
            TextSpan::plain("This is a text node"),
            TextSpan::new("This is a text node", SpanKind::Code)
        );
    }

    #[test]
    fn not_equal_when_destination_differs() {
        let a = TextSpan::with_destination("Link", SpanKind::Link, "https://example.com");
        let b = TextSpan::with_destination("Link", SpanKind::Link, "https://example.org");
        let c = TextSpan::new("Link", SpanKind::Link);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn destination_defaults_to_none() {
        assert!(TextSpan::plain("text").destination.is_none());
    }

    #[test]
    fn display_includes_all_fields() {
        let span = TextSpan::with_destination("Testing display", SpanKind::Code, "https://x.dev");
        assert_eq!(span.to_string(), "TextSpan(Testing display, code, https://x.dev)");
        assert_eq!(
            TextSpan::plain("hi").to_string(),
            "TextSpan(hi, text, None)"
        );
    }

    #[rstest]
    #[case(SpanKind::Plain, "This is a text node")]
    #[case(SpanKind::Bold, "<b>This is a text node</b>")]
    #[case(SpanKind::Italic, "<i>This is a text node</i>")]
    #[case(SpanKind::Code, "<code>This is a text node</code>")]
    fn simple_kinds_render_content(#[case] kind: SpanKind, #[case] expected: &str) {
        let node = TextSpan::new("This is a text node", kind).to_html_node().unwrap();
        assert_eq!(node.render(), expected);
        assert!(node.render().contains("This is a text node"));
    }

    #[test]
    fn link_renders_href() {
        let span = TextSpan::with_destination("docs", SpanKind::Link, "https://boot.dev");
        let node = span.to_html_node().unwrap();
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.render(), "<a href=\"https://boot.dev\">docs</a>");
    }

    #[test]
    fn image_has_no_inner_text() {
        let span = TextSpan::with_destination("a cat", SpanKind::Image, "/cat.png");
        let node = span.to_html_node().unwrap();
        assert_eq!(node.value(), "");
        assert_eq!(node.attributes().get("src"), Some("/cat.png"));
        assert_eq!(node.attributes().get("alt"), Some("a cat"));
        assert_eq!(node.render(), "<img src=\"/cat.png\" alt=\"a cat\">");
    }

    #[rstest]
    #[case(SpanKind::Link)]
    #[case(SpanKind::Image)]
    fn missing_destination_is_an_error(#[case] kind: SpanKind) {
        let err = TextSpan::new("x", kind).to_html_node().unwrap_err();
        assert_eq!(
            err,
            MarkdownError::MissingDestination {
                kind: kind.as_str()
            }
        );
    }

    #[rstest]
    #[case(SpanKind::Plain)]
    #[case(SpanKind::Bold)]
    #[case(SpanKind::Italic)]
    #[case(SpanKind::Code)]
    fn destination_on_non_link_kind_is_an_error(#[case] kind: SpanKind) {
        let err = TextSpan::with_destination("x", kind, "https://example.com")
            .to_html_node()
            .unwrap_err();
        assert_eq!(
            err,
            MarkdownError::UnexpectedDestination {
                kind: kind.as_str()
            }
        );
    }

    #[test]
    fn kind_names_parse_back() {
        for kind in [
            SpanKind::Plain,
            SpanKind::Bold,
            SpanKind::Italic,
            SpanKind::Code,
            SpanKind::Link,
            SpanKind::Image,
        ] {
            assert_eq!(kind.as_str().parse::<SpanKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        assert_eq!(
            "underline".parse::<SpanKind>(),
            Err(MarkdownError::UnknownSpanKind("underline".to_string()))
        );
    }
}
