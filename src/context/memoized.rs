// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Read-only data shared by every search task of one round.

use crate::config::SearchParams;
use crate::graph::{NodeId, WordGraph};
use crate::words::Word;

/// Immutable round data (Tier 1: MEMO).
///
/// Built once per widening round and never changed while the round's tasks
/// run, so every task reads it concurrently without synchronisation. It is
/// a bundle of borrows and costs nothing to copy into each task.
#[derive(Debug, Clone, Copy)]
pub struct MemoizedData<'a> {
    /// Candidate pool; node `n` of the graph is `pool[n]`.
    pub pool: &'a [Word],

    /// Adjacency over the pool.
    pub graph: &'a WordGraph,

    pub params: SearchParams,
}

impl<'a> MemoizedData<'a> {
    pub fn new(pool: &'a [Word], graph: &'a WordGraph, params: SearchParams) -> Self {
        debug_assert_eq!(pool.len(), graph.len(), "graph must cover the whole pool");
        Self {
            pool,
            graph,
            params,
        }
    }

    pub fn word(&self, node: NodeId) -> &'a Word {
        &self.pool[node]
    }
}
