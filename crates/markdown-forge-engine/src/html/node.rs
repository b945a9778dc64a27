use crate::error::{MarkdownError, Result};

use super::Attributes;

/// Elements that never carry content and render without a closing tag.
const VOID_ELEMENTS: [&str; 6] = ["img", "br", "hr", "input", "meta", "link"];

/// A node in the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Serializes this node and everything below it.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf(leaf) => {
                leaf.render_into(out);
                Ok(())
            }
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A childless node holding literal text.
///
/// Without a tag the value is emitted verbatim. The value may be empty
/// (image leaves carry everything in their attributes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl LeafNode {
    /// Creates a leaf. `Some("")` is rejected: use `None` for untagged text.
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Result<Self> {
        if tag.is_some_and(str::is_empty) {
            return Err(MarkdownError::InvalidStructuralNode {
                reason: "leaf tag must be absent or non-empty",
            });
        }
        Ok(Self {
            tag: tag.map(str::to_string),
            value: value.into(),
            attributes: Attributes::new(),
        })
    }

    /// Untagged text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        let Some(tag) = self.tag.as_deref() else {
            out.push_str(&self.value);
            return;
        };
        out.push('<');
        out.push_str(tag);
        out.push_str(&self.attributes.to_html());
        out.push('>');
        if self.value.is_empty() && VOID_ELEMENTS.contains(&tag) {
            return;
        }
        out.push_str(&self.value);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// A node wrapping an ordered, non-empty list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Result<Self> {
        if tag.is_empty() {
            return Err(MarkdownError::InvalidStructuralNode {
                reason: "parent node must have a tag",
            });
        }
        if children.is_empty() {
            return Err(MarkdownError::InvalidStructuralNode {
                reason: "parent node must have children",
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        })
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Moves the children out, leaving this node without any.
    ///
    /// The node is invalid afterwards and fails to render.
    pub fn take_children(&mut self) -> Vec<HtmlNode> {
        std::mem::take(&mut self.children)
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        if self.children.is_empty() {
            return Err(MarkdownError::InvalidStructuralNode {
                reason: "parent node lost its children",
            });
        }
        out.push('<');
        out.push_str(&self.tag);
        out.push_str(&self.attributes.to_html());
        out.push('>');
        for child in &self.children {
            child.render_into(out)?;
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(())
    }
}
