//! Layered keyword adjacency graph.
//!
//! Each keyword group is one level of the graph and every term is a
//! node. All nodes of level `i` have the full node list of level `i + 1`
//! as children (fully connected layer to layer), so every root-to-leaf
//! path picks exactly one term per group. E.g.:
//!
//! ```text
//!      (A)
//!
//!    (B) (C)
//!
//!  (D) (E) (F)
//! ```
//!
//! - `(A)` is the synthetic root.
//! - `(B)` and `(C)` are from the same keyword group, and both have
//!   children `[(D), (E), (F)]`.
//! - `(D)`, `(E)`, and `(F)` are leaves, so no children: `[]`.
//!
//! Nodes are held in an arena and addressed by [`NodeId`], so identical
//! term text in different groups (including repeated skip markers) never
//! collapses two nodes into one.

use crate::error::{LitsieveError, Result};
use crate::keyword::{KeywordSet, Term};

/// Index of a node in the graph arena.
pub type NodeId = usize;

/// The synthetic root node, always at index 0.
pub const ROOT: NodeId = 0;

/// A single graph node: one term occurrence plus its child list.
#[derive(Debug, Clone)]
struct Node {
    /// The term occupying this node. `None` only for the synthetic root.
    term: Option<Term>,
    /// Children in next-group term order. Empty for leaves.
    children: Vec<NodeId>,
}

/// The layered adjacency graph built from an ordered keyword set.
#[derive(Debug, Clone)]
pub struct KeywordGraph {
    nodes: Vec<Node>,
    /// Node ids per level, in input term order. One level per group.
    levels: Vec<Vec<NodeId>>,
}

impl KeywordGraph {
    /// Build the graph for an ordered keyword set.
    ///
    /// Fails with a configuration error if the set is empty, a group is
    /// empty, or a group contains only skip markers (a dead branch that
    /// would contribute nothing at its level).
    pub fn build(keywords: &KeywordSet) -> Result<Self> {
        if keywords.is_empty() {
            return Err(LitsieveError::configuration(
                "at least one keyword group is required",
            ));
        }

        let mut nodes = vec![Node {
            term: None,
            children: Vec::new(),
        }];
        let mut levels = Vec::with_capacity(keywords.len());

        for (index, group) in keywords.groups().iter().enumerate() {
            if group.is_empty() {
                return Err(LitsieveError::configuration(format!(
                    "keyword group {} has no terms",
                    index + 1
                )));
            }
            if !group.has_real_term() {
                return Err(LitsieveError::configuration(format!(
                    "keyword group {} contains only skip markers",
                    index + 1
                )));
            }

            let level: Vec<NodeId> = group
                .terms()
                .iter()
                .map(|term| {
                    let id = nodes.len();
                    nodes.push(Node {
                        term: Some(term.clone()),
                        children: Vec::new(),
                    });
                    id
                })
                .collect();
            levels.push(level);
        }

        // Connect levels: the root feeds the first group, and every node
        // of a level feeds the full next level. The last level's nodes
        // keep their empty child lists and become the leaves.
        nodes[ROOT].children = levels[0].clone();
        for window in levels.windows(2) {
            let (level, next) = (&window[0], &window[1]);
            for &id in level {
                nodes[id].children = next.clone();
            }
        }

        Ok(KeywordGraph { nodes, levels })
    }

    /// The synthetic root node id.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Children of a node, in recorded order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// The term occupying a node. `None` for the synthetic root.
    pub fn term(&self, id: NodeId) -> Option<&Term> {
        self.nodes[id].term.as_ref()
    }

    /// Node ids per level, in input order.
    pub fn levels(&self) -> &[Vec<NodeId>] {
        &self.levels
    }

    /// The number of levels (keyword groups).
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}
