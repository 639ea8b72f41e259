//! Chunk extraction
//!
//! A [`Chunk`] is one hypothesis about which pieces of a note belong together.
//! Both extractors number their chunks 1..=N in emission order.

use serde::{Deserialize, Serialize};

use crate::hierarchy::Node;

/// Indentation per nesting level in rendered subtrees
const RENDER_INDENT: &str = "  ";

/// Marker written in front of every rendered node
const RENDER_BULLET: &str = "- ";

/// A fragment of OCR text grouped for semantic interpretation.
///
/// Boundaries are advisory: downstream consumers may merge or split chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-based position in the capture's chunk sequence
    pub id: usize,
    /// Trimmed, non-empty text
    pub text: String,
}

/// Group lines into chunks, using blank lines as soft boundaries.
///
/// Non-blank lines are trimmed and joined with a single space. Leading,
/// trailing and repeated blank lines never produce empty chunks.
pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();

        // OCR line breaks are noisy; a blank line is a hint, not a hard cut
        if line.is_empty() {
            flush(&mut chunks, &mut current);
            continue;
        }

        current.push(line);
    }

    flush(&mut chunks, &mut current);
    chunks
}

fn flush(chunks: &mut Vec<Chunk>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }

    chunks.push(Chunk {
        id: chunks.len() + 1,
        text: current.join(" "),
    });
    current.clear();
}

/// Convert a forest into chunks, one per root, each holding the full subtree.
///
/// Every root yields exactly one chunk, so roots are expected to carry text:
/// a root with empty text still renders as a bare bullet (`"-"`). Build the
/// forest from non-blank lines only, as [`crate::pipeline::chunk_layout`] does.
pub fn from_hierarchy(roots: &[Node]) -> Vec<Chunk> {
    roots
        .iter()
        .enumerate()
        .map(|(idx, root)| Chunk {
            id: idx + 1,
            text: render_subtree(root),
        })
        .collect()
}

/// Render a subtree as a bulleted outline, pre-order, two spaces per depth.
///
/// Depth is relative to `root`, not the nodes' absolute levels. Uses an
/// explicit stack so deep outlines cannot exhaust the call stack.
pub fn render_subtree(root: &Node) -> String {
    let mut out = String::new();
    let mut stack: Vec<(&Node, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        for _ in 0..depth {
            out.push_str(RENDER_INDENT);
        }
        out.push_str(RENDER_BULLET);
        out.push_str(&node.text);
        out.push('\n');

        // Reverse so the first child is rendered next
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    out.trim_end().to_string()
}
