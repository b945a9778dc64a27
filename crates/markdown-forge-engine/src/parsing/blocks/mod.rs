//! # Block Parsing
//!
//! Splits a whole document into blocks and classifies each one.
//!
//! ## Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines, each piece
//!    is trimmed, and a run of heading lines is expanded into one block per line
//! 2. **Classification** (`classify`): each block's text is mapped to a
//!    [`BlockKind`]; the first matching rule wins and `Paragraph` is the fallback
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: per-block syntax (heading prefix, code fence, quote marker, list markers)
//! - **`split`**: `markdown_to_blocks`, `expand_heading_run`
//! - **`classify`**: `classify_block`
//!
//! Classification is a pure function of the block text. The kind is not
//! stored with the block; converters re-derive it on demand.

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify_block;
pub use split::{expand_heading_run, markdown_to_blocks};
pub use types::BlockKind;
