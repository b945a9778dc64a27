//! # HTML Node Tree
//!
//! A minimal, closed tree of HTML nodes produced by the markdown converter.
//!
//! - **`HtmlNode::Leaf`**: optional tag, a concrete (possibly empty) value, attributes
//! - **`HtmlNode::Parent`**: required tag, non-empty ordered children, attributes
//!
//! Structural rules are enforced when a node is built; rendering re-checks
//! parents so that a tree damaged after construction cannot render silently.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};
