// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SubmitPasswordPredicate - Reports a complete path.

use crate::config::MAX_WORDS_COUNT;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;
use crate::words::Word;

/// Hands the current path to the shared result aggregator.
///
/// Deterministic. Always succeeds; whether the aggregator accepted the path
/// only shows up in the counters.
#[derive(Debug)]
pub struct SubmitPasswordPredicate;

impl Predicate for SubmitPasswordPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        let memo = ctx.memo;
        let Some(&first) = ctx.path().first() else {
            panic!("SubmitPasswordPredicate called with an empty path");
        };

        let mut words: [&Word; MAX_WORDS_COUNT] = [memo.word(first); MAX_WORDS_COUNT];
        for (slot, &node) in words.iter_mut().zip(ctx.path()) {
            *slot = memo.word(node);
        }
        let len = ctx.path_len();

        let counter = if ctx.results.submit(&words[..len]).is_valid() {
            Counters::PasswordsAccepted
        } else {
            Counters::PasswordsRejected
        };
        ctx.statistics.increment_counter(counter);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "SubmitPassword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchParams;
    use crate::graph::WordGraph;
    use crate::testing::Fixture;

    fn fixture(min_length: usize, max_length: usize) -> Fixture {
        let params = SearchParams {
            min_length,
            max_length,
            words_count: 2,
            ..SearchParams::default()
        };
        let graph = WordGraph::from_adjacency(vec![vec![1], vec![0]]);
        Fixture::with_graph(&["sad", "fad"], graph, params)
    }

    #[test]
    fn test_valid_path_is_recorded() {
        let fixture = fixture(6, 8);
        let mut ctx = fixture.context();
        ctx.push_word(0);
        ctx.push_word(1);

        assert_eq!(
            SubmitPasswordPredicate.try_pred(&mut ctx, 0),
            PredicateResult::Success
        );
        assert_eq!(ctx.statistics.get(Counters::PasswordsAccepted), 1);
        // sad: 1 + 2, d -> f: 1, fad: 3 + 2
        assert_eq!(fixture.results.min_distance(), Some(9));
    }

    #[test]
    fn test_short_path_is_only_counted() {
        let fixture = fixture(7, 8);
        let mut ctx = fixture.context();
        ctx.push_word(1);
        ctx.push_word(0);

        assert_eq!(
            SubmitPasswordPredicate.try_pred(&mut ctx, 0),
            PredicateResult::Success
        );
        assert_eq!(ctx.statistics.get(Counters::PasswordsRejected), 1);
        assert_eq!(fixture.results.min_distance(), None);
    }
}
