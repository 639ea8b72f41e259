//! relay-core: chunking and hierarchy reconstruction for handwritten notes
//!
//! This crate turns the output of an OCR pass over a handwritten note into a
//! short, ordered list of [`Chunk`]s that a language model can interpret.
//!
//! Two extraction paths exist, selected once per capture by [`OcrOutput`]:
//! - **Layout-aware**: per-line indents are clustered into logical levels
//!   ([`cluster_indents`]), the lines are rebuilt into a forest of [`Node`]s
//!   ([`build_hierarchy`]) and each root subtree becomes one chunk
//!   ([`from_hierarchy`]).
//! - **Flat**: the raw text is normalized into lines ([`normalize_lines`]) and
//!   grouped at blank lines ([`from_lines`]).
//!
//! Chunks are hypotheses. Their boundaries are hints for the downstream
//! interpretation step, never guaranteed semantic units.
//!
//! # Example
//!
//! ```rust
//! use relay_core::{chunk_capture, ChunkingOptions, Line, OcrOutput};
//!
//! let capture = OcrOutput::LayoutAware(vec![
//!     Line::new("Projekt Alpha", 10, 0),
//!     Line::new("Status klären", 62, 0),
//!     Line::new("Peter anrufen", 12, 0),
//! ]);
//!
//! let chunks = chunk_capture(&capture, &ChunkingOptions::default());
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].text, "- Projekt Alpha\n  - Status klären");
//! ```

pub mod chunk;
pub mod classify;
pub mod error;
pub mod hierarchy;
pub mod indent;
pub mod normalize;
pub mod ocr;
pub mod pipeline;

// Re-exports
pub use chunk::{from_hierarchy, from_lines, render_subtree, Chunk};
pub use classify::{
    build_prompt, parse_items, Classifier, Item, ItemType, ReplayClassifier, SYSTEM_PROMPT,
};
pub use error::{RelayError, Result};
pub use hierarchy::{build_hierarchy, Node};
pub use indent::{cluster_indents, distinct_indents, LevelMap};
pub use normalize::normalize_lines;
pub use ocr::{parse_layout, Line, OcrOutput, Vertex};
pub use pipeline::{
    chunk_capture, chunk_layout, chunk_text, ChunkingOptions, DEFAULT_INDENT_THRESHOLD,
};
