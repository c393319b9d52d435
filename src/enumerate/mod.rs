// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel path enumeration.
//!
//! One search task per start node. Each task builds its own context and
//! engine over the shared round data, runs the path program to exhaustion,
//! and returns its counters. Tasks share nothing mutable except the
//! [`ResultAggregator`], so the fan-out is a plain rayon `par_iter`.
//!
//! Every simple path of `words_count` nodes is submitted exactly once,
//! whatever the scheduling: the task for node `s` covers exactly the paths
//! starting at `s`.

use rayon::prelude::*;
use tracing::trace;

use crate::context::{MemoizedData, SearchContext};
use crate::engine::{EngineBuilder, SearchEngine};
use crate::graph::NodeId;
use crate::predicates::{
    ExtendPathPredicate, FailPredicate, StartWordPredicate, SubmitPasswordPredicate,
};
use crate::results::ResultAggregator;
use crate::state::{Counters, Statistics};

/// The program run by the task for `start`.
///
/// StartWord, then ExtendPath until the path is full, count it, submit it,
/// and fail so the engine backtracks into the next path.
pub fn path_program(start: NodeId) -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(StartWordPredicate::new(start)))
        .add(Box::new(ExtendPathPredicate))
        .add(Statistics::counting_predicate(Counters::PathsCompleted))
        .add(Box::new(SubmitPasswordPredicate))
        .terminal(Box::new(FailPredicate))
        .build()
}

/// Enumerate every path starting at `start`.
pub fn enumerate_from(
    start: NodeId,
    memo: MemoizedData<'_>,
    results: &ResultAggregator,
) -> Statistics {
    let mut ctx = SearchContext::new(memo, results);
    let mut engine = path_program(start);
    engine.search(&mut ctx);

    let (tries, retries) = engine.statistics();
    trace!(start, tries, retries, "search task finished");
    ctx.statistics
}

/// Enumerate every path of the round's graph, one task per node.
///
/// Returns once every task has finished. The returned counters are the sum
/// of every task's counters.
pub fn enumerate_paths(memo: MemoizedData<'_>, results: &ResultAggregator) -> Statistics {
    (0..memo.graph.len())
        .into_par_iter()
        .map(|start| enumerate_from(start, memo, results))
        .reduce(Statistics::new, Statistics::merged)
}
