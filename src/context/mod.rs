// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the round's candidate pool, graph and parameters, borrowed
//! - Tier 2 (DYNAMIC): the path under construction, tracked on the trail
//!
//! Every search task gets its own context over the same MEMO data, which is
//! what makes the per-start-word fan-out safe: the only thing tasks share
//! mutably is the [`ResultAggregator`], and it does its own locking.

pub mod dynamic;
pub mod memoized;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;

use dynamic::PATH_LEN_SLOT;

use crate::config::MAX_WORDS_COUNT;
use crate::graph::NodeId;
use crate::results::ResultAggregator;
use crate::state::Statistics;
use crate::trail::Trail;
use crate::words::Word;

/// Search context for one task.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,        // Tier 1: Immutable, shared
///     results: &ResultAggregator // Shared, internally locked
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // Owned, merged after the round
/// }
/// ```
///
/// # Example
///
/// ```
/// use typewalk::config::SearchParams;
/// use typewalk::context::{MemoizedData, SearchContext};
/// use typewalk::graph::WordGraph;
/// use typewalk::results::ResultAggregator;
///
/// let graph = WordGraph::default();
/// let params = SearchParams::default();
/// let results = ResultAggregator::new(&params);
/// let mut ctx = SearchContext::new(MemoizedData::new(&[], &graph, params), &results);
///
/// let checkpoint = ctx.trail.len();
/// ctx.push_word(3);
/// assert_eq!(ctx.path(), &[3]);
/// ctx.rewind_to(checkpoint);
/// assert!(ctx.path().is_empty());
/// ```
#[derive(Debug)]
pub struct SearchContext<'a> {
    /// Immutable round data (Tier 1)
    pub memo: MemoizedData<'a>,
    /// Where complete paths are reported
    pub results: &'a ResultAggregator,
    /// Trail for O(1) backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    pub statistics: Statistics,
}

impl<'a> SearchContext<'a> {
    pub fn new(memo: MemoizedData<'a>, results: &'a ResultAggregator) -> Self {
        Self {
            memo,
            results,
            trail: Trail::new(),
            state: DynamicState::new(),
            statistics: Statistics::new(),
        }
    }

    // Safe trail wrapper methods
    // These record every change to self.state before making it

    /// Append a node to the path (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if the path is already at capacity.
    pub fn push_word(&mut self, node: NodeId) {
        let len = self.state.len;
        assert!(len < MAX_WORDS_COUNT, "Path overflow: {} words", len);

        self.set_slot(len, node);
        self.set_slot(PATH_LEN_SLOT, len + 1);
    }

    fn set_slot(&mut self, slot: usize, value: usize) {
        self.trail.record_change(slot, self.state.slot(slot));
        self.state.restore(slot, value);
    }

    /// Undo every change recorded after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        for entry in self.trail.unwind_to(checkpoint) {
            self.state.restore(entry.slot, entry.old_value);
        }
    }

    /// Nodes on the path, first to last.
    pub fn path(&self) -> &[NodeId] {
        &self.state.path[..self.state.len]
    }

    pub fn path_len(&self) -> usize {
        self.state.len
    }

    /// Last node on the path, if any.
    pub fn last_node(&self) -> Option<NodeId> {
        self.path().last().copied()
    }

    /// Whether `node` is already on the path. Identity is by node id.
    pub fn on_path(&self, node: NodeId) -> bool {
        self.path().contains(&node)
    }

    /// Words on the path, first to last.
    pub fn path_words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let memo = self.memo;
        self.path().iter().map(move |&node| memo.word(node))
    }
}
