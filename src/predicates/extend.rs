// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ExtendPathPredicate - Grows the path one word at a time.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Appends successors of the last word until the path is full.
///
/// Runs once per word after the first. Each round offers one choice per
/// successor of the last node in graph order; a successor already on the
/// path fails its choice, so no node appears twice in a path. When the path
/// holds `words_count` nodes the predicate succeeds and the program moves on.
///
/// A node without successors fails its round, which prunes every path that
/// would have gone through it.
#[derive(Debug)]
pub struct ExtendPathPredicate;

impl Predicate for ExtendPathPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        if ctx.path_len() >= ctx.memo.params.words_count {
            return PredicateResult::Success;
        }
        let Some(last) = ctx.last_node() else {
            panic!("ExtendPathPredicate needs a start word on the path");
        };
        match ctx.memo.graph.successors(last).len() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<'_>,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let last = ctx.last_node().expect("path is not empty in choice mode");
        let next = ctx.memo.graph.successors(last)[choice];
        if ctx.on_path(next) {
            ctx.statistics.increment_counter(Counters::RepeatedWords);
            return PredicateResult::Failure;
        }
        ctx.push_word(next);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ExtendPath"
    }
}
