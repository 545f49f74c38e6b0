//! Depth-first generation of keyword combinations.

use crate::keyword::Term;
use crate::split::graph::{KeywordGraph, NodeId};

/// One legal combination: one term per keyword group, in group order.
///
/// A combination is a root-to-leaf path through the graph with the
/// synthetic root excluded. Each leaf emits an owned copy of the path,
/// so no mutable path state is shared across emitted combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    terms: Vec<Term>,
}

impl Combination {
    /// Create a combination from owned terms.
    pub fn new(terms: Vec<Term>) -> Self {
        Combination { terms }
    }

    /// The terms of this combination, in group order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The number of terms (one per keyword group).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the combination has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<Vec<Term>> for Combination {
    fn from(terms: Vec<Term>) -> Self {
        Combination::new(terms)
    }
}

/// Generate every root-to-leaf combination of the graph.
///
/// The traversal is an explicit-stack depth-first walk. Children are
/// visited in the order recorded in the graph (input term order within
/// each group), so the output order matches the reference recursive
/// traversal: the first group's first term varies slowest. Downstream
/// consumers rely on this ordering being deterministic.
pub fn generate_combinations(graph: &KeywordGraph) -> Vec<Combination> {
    // A graph with only the root has nothing to combine.
    if graph.level_count() == 0 {
        return Vec::new();
    }

    let expected = graph
        .levels()
        .iter()
        .map(|level| level.len())
        .product::<usize>();
    let mut combinations = Vec::with_capacity(expected);

    // Each stack entry carries the node and its depth; the shared path
    // is truncated back to that depth before the node is appended, which
    // replaces the recursive push/pop backtracking.
    let mut path: Vec<NodeId> = Vec::with_capacity(graph.level_count() + 1);
    let mut stack: Vec<(NodeId, usize)> = vec![(graph.root(), 0)];

    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(node);

        let children = graph.children(node);
        if children.is_empty() {
            // Complete combination found: the current path minus the root.
            let terms = path[1..]
                .iter()
                .filter_map(|&id| graph.term(id).cloned())
                .collect();
            combinations.push(Combination::new(terms));
        }
        // Reversed push so the first child is processed first.
        for &child in children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    combinations
}
