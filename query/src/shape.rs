//! Removal shapes.
//!
//! A shape is an arena of nodes. Node 0 is the root. Each node lists
//! `(relation reference, child node)` edges in the order they are walked.
//! An edge may point back at its own node or an ancestor, which repeats
//! that part of the shape at every level below.

use serde::{Deserialize, Serialize};

/// Outgoing edges of one shape node.
pub type ShapeNode = Vec<(String, usize)>;

/// The node index of every shape's root.
pub const ROOT: usize = 0;

/// A (possibly recursive) description of which relations to follow.
///
/// JSON form: `{"nodes": [[["childIds", 0]]]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalShape {
    nodes: Vec<ShapeNode>,
}

impl RemovalShape {
    /// A shape that only covers the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![ShapeNode::new()],
        }
    }

    /// A shape that follows `rel` at every depth.
    pub fn recursive(rel: impl Into<String>) -> Self {
        Self::new().with_recursion(rel)
    }

    /// Builder-style: follow `rel` from the root and stop there.
    pub fn with_leaf(self, rel: impl Into<String>) -> Self {
        self.with(rel, RemovalShape::new())
    }

    /// Builder-style: follow `rel` from the root, then continue with `child`.
    ///
    /// `child`'s nodes are appended to the arena; its internal back-edges
    /// keep pointing inside `child`.
    pub fn with(mut self, rel: impl Into<String>, child: RemovalShape) -> Self {
        self.root_mut();
        let offset = self.nodes.len();
        self.nodes.extend(child.nodes.into_iter().map(|edges| {
            edges
                .into_iter()
                .map(|(rel, target)| (rel, target + offset))
                .collect::<ShapeNode>()
        }));
        self.root_mut().push((rel.into(), offset));
        self
    }

    /// Builder-style: follow `rel` from the root back into the root.
    pub fn with_recursion(mut self, rel: impl Into<String>) -> Self {
        self.root_mut().push((rel.into(), ROOT));
        self
    }

    /// A deserialized arena may be empty; the builders give it a root first.
    fn root_mut(&mut self) -> &mut ShapeNode {
        if self.nodes.is_empty() {
            self.nodes.push(ShapeNode::new());
        }
        &mut self.nodes[ROOT]
    }

    // ==================== Arena Access ====================

    /// Append an empty node, returning its index.
    pub fn push_node(&mut self) -> usize {
        self.nodes.push(ShapeNode::new());
        self.nodes.len() - 1
    }

    /// Add an edge between two existing nodes. Returns false if either index is out of range.
    pub fn push_edge(&mut self, parent: usize, rel: impl Into<String>, child: usize) -> bool {
        if child >= self.nodes.len() {
            return false;
        }
        match self.nodes.get_mut(parent) {
            Some(edges) => {
                edges.push((rel.into(), child));
                true
            }
            None => false,
        }
    }

    /// Edges leaving `node` (empty for an unknown index).
    pub fn edges(&self, node: usize) -> &[(String, usize)] {
        self.nodes.get(node).map(|edges| edges.as_slice()).unwrap_or(&[])
    }

    /// Returns true if `node` is a node of this shape.
    pub fn has_node(&self, node: usize) -> bool {
        node < self.nodes.len()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the root has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges(ROOT).is_empty()
    }
}

impl Default for RemovalShape {
    fn default() -> Self {
        Self::new()
    }
}
