// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StartWordPredicate - Places the first word of every path.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::graph::NodeId;

/// Puts a fixed start node on the path.
///
/// Deterministic and runs exactly once (round=0 only). Each search task
/// runs a program beginning with one of these, so the task enumerates
/// exactly the paths starting at its node.
#[derive(Debug)]
pub struct StartWordPredicate {
    start: NodeId,
}

impl StartWordPredicate {
    pub fn new(start: NodeId) -> Self {
        Self { start }
    }
}

impl Predicate for StartWordPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, round: usize) -> PredicateResult {
        assert_eq!(
            round, 0,
            "StartWordPredicate must be called exactly once with round=0"
        );
        debug_assert!(ctx.path().is_empty(), "start word must be first on the path");

        ctx.push_word(self.start);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "StartWord"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchParams;
    use crate::graph::WordGraph;
    use crate::testing::Fixture;

    #[test]
    fn test_start_word_round_0() {
        let graph = WordGraph::from_adjacency(vec![vec![1], vec![0]]);
        let fixture = Fixture::with_graph(&["as", "sa"], graph, SearchParams::default());
        let mut ctx = fixture.context();
        let mut pred = StartWordPredicate::new(1);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.path(), &[1]);
    }

    #[test]
    #[should_panic(expected = "must be called exactly once with round=0")]
    fn test_start_word_round_1_panics() {
        let fixture = Fixture::empty();
        let mut ctx = fixture.context();
        let mut pred = StartWordPredicate::new(0);

        // Should panic on round != 0
        pred.try_pred(&mut ctx, 1);
    }

    #[test]
    #[should_panic(expected = "retry_pred should never be called")]
    fn test_start_word_retry_panics() {
        let fixture = Fixture::empty();
        let mut ctx = fixture.context();
        let mut pred = StartWordPredicate::new(0);

        // Should panic - StartWordPredicate never creates choices
        pred.retry_pred(&mut ctx, 0, 0);
    }
}
