// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Word graph.
//!
//! Directed adjacency over the candidate pool. Node ids are pool positions,
//! so identity is positional: two entries with the same spelling are still
//! distinct nodes.

use rayon::prelude::*;

use crate::words::Word;

/// Index of a word in the candidate pool.
pub type NodeId = usize;

/// Directed graph over a candidate pool.
///
/// `a -> b` iff `a != b` and the key distance from `a`'s last letter to
/// `b`'s first letter is below the threshold. Successor lists follow pool
/// order and never contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGraph {
    successors: Vec<Vec<NodeId>>,
}

impl WordGraph {
    /// Build the graph over `pool`.
    ///
    /// Quadratic in the pool size. Rows are built in parallel; each row is
    /// scanned in pool order.
    pub fn build(pool: &[Word], threshold: u32) -> Self {
        let successors = pool
            .par_iter()
            .enumerate()
            .map(|(from, word)| {
                pool.iter()
                    .enumerate()
                    .filter(|&(to, next)| to != from && word.transition_distance(next) < threshold)
                    .map(|(to, _)| to)
                    .collect()
            })
            .collect();
        Self { successors }
    }

    /// Build a graph directly from adjacency lists.
    ///
    /// # Panics
    ///
    /// Panics on a self-edge or a successor outside the node range.
    pub fn from_adjacency(successors: Vec<Vec<NodeId>>) -> Self {
        let len = successors.len();
        for (from, list) in successors.iter().enumerate() {
            for &to in list {
                assert!(to < len, "successor {} of node {} out of range", to, from);
                assert_ne!(to, from, "self-edge on node {}", from);
            }
        }
        Self { successors }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        &self.successors[node]
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyboardLayout;
    use std::collections::HashSet;

    fn words(texts: &[&str], layout: &KeyboardLayout) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t, layout).unwrap()).collect()
    }

    #[test]
    fn test_edges_follow_threshold() {
        let layout = KeyboardLayout::from_rows(&["asdfgh"]).unwrap();
        // as: a..s, sad: s..d, fad: f..d, gash: g..h
        let pool = words(&["as", "sad", "fad", "gash"], &layout);
        let graph = WordGraph::build(&pool, 2);

        // s -> s(0) ok, s -> f(2) no, s -> g(3) no
        assert_eq!(graph.successors(0), &[1]);
        // d -> a(2) no, d -> f(1) ok, d -> g(2) no; fad also reaches sad via d -> s(1)
        assert_eq!(graph.successors(1), &[2]);
        assert_eq!(graph.successors(2), &[1]);
        // h -> a(5), h -> s(4), h -> f(2), h -> g(1)
        assert!(graph.successors(3).is_empty());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_no_self_edges_or_duplicates() {
        let layout = KeyboardLayout::qwerty();
        let pool = words(&["dad", "add", "dead", "deed", "sees", "ease", "asa"], &layout);
        let graph = WordGraph::build(&pool, 3);

        for node in 0..graph.len() {
            let list = graph.successors(node);
            assert!(!list.contains(&node), "self-edge on {}", node);
            let unique: HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len(), "duplicate edge from {}", node);
            assert!(list.windows(2).all(|p| p[0] < p[1]), "successors out of pool order");
        }
    }

    #[test]
    fn test_identical_spellings_are_distinct_nodes() {
        let layout = KeyboardLayout::qwerty();
        let pool = words(&["sas", "sas"], &layout);
        let graph = WordGraph::build(&pool, 1);
        assert_eq!(graph.successors(0), &[1]);
        assert_eq!(graph.successors(1), &[0]);
    }

    #[test]
    fn test_empty_and_single_node() {
        assert!(WordGraph::build(&[], 2).is_empty());

        let layout = KeyboardLayout::qwerty();
        let graph = WordGraph::build(&words(&["sas"], &layout), 5);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    #[should_panic(expected = "self-edge")]
    fn test_from_adjacency_rejects_self_edge() {
        WordGraph::from_adjacency(vec![vec![0]]);
    }
}
