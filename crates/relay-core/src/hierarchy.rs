//! Hierarchy reconstruction from indented lines
//!
//! Lines arrive in reading order, each with a raw indent. Once the indents are
//! mapped to logical levels, a single pass with an ancestor stack rebuilds the
//! nesting: every line becomes a [`Node`] whose parent is the closest earlier
//! line with a strictly smaller level.

use crate::indent::LevelMap;
use crate::ocr::Line;

/// A line of the note with the lines nested beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub text: String,
    pub level: usize,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            level,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including the node itself
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// Build a forest from ordered lines and their resolved levels.
///
/// An indent missing from `levels` is placed at level 0.
///
/// The stack holds the open ancestor chain, each entry owning the children
/// gathered so far. A node is attached to its parent when it is popped, which
/// happens once a later line at the same or a shallower level arrives, or at
/// the end of input. Levels along the stack are strictly increasing.
pub fn build_hierarchy(lines: &[Line], levels: &LevelMap) -> Vec<Node> {
    let mut roots = Vec::new();
    let mut stack: Vec<Node> = Vec::new();

    for line in lines {
        let level = match levels.level(line.indent) {
            Some(level) => level,
            None => {
                tracing::debug!(
                    "Indent {} missing from level map, placing {:?} at level 0",
                    line.indent,
                    line.text
                );
                0
            }
        };

        while stack.last().is_some_and(|top| top.level >= level) {
            close_top(&mut stack, &mut roots);
        }

        stack.push(Node::new(line.text.clone(), level));
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

/// Pop the innermost open node and attach it to its parent (or the forest)
fn close_top(stack: &mut Vec<Node>, roots: &mut Vec<Node>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}
