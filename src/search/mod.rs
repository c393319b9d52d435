// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The widening driver.
//!
//! Sorts the dictionary by cost density, then repeats rounds of
//! widen, build graph, enumerate until a round produces a valid password.
//! Each round's enumeration is a barrier: every task has finished before
//! the driver looks at the aggregator.
//!
//! # Example
//!
//! ```
//! use typewalk::config::SearchParams;
//! use typewalk::keyboard::KeyboardLayout;
//! use typewalk::search;
//! use typewalk::words::Word;
//!
//! let layout = KeyboardLayout::from_rows(&["asdfgh"]).unwrap();
//! let words = ["as", "sad", "fad", "gash"]
//!     .iter()
//!     .map(|t| Word::new(t, &layout))
//!     .collect::<typewalk::Result<Vec<_>>>()
//!     .unwrap();
//! let params = SearchParams {
//!     distance_between_words: 2,
//!     min_length: 6,
//!     max_length: 8,
//!     words_count: 2,
//! };
//!
//! let outcome = search::run(words, params).unwrap();
//! assert_eq!(outcome.min_distance, 9);
//! assert_eq!(outcome.best.len(), 2);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::SearchParams;
use crate::context::MemoizedData;
use crate::enumerate::enumerate_paths;
use crate::error::{Error, Result};
use crate::graph::WordGraph;
use crate::results::{Password, ResultAggregator};
use crate::selection::CandidateSelector;
use crate::state::{Counters, Statistics};
use crate::words::{sort_by_cost_density, Word};

/// What one searched round saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based widening step, counting steps that admitted nothing.
    pub round: usize,
    pub pool_size: usize,
    /// Admission threshold after this round's widening.
    pub threshold: i64,
    /// Edges in this round's graph.
    pub edges: usize,
    pub statistics: Statistics,
}

/// A successful search.
///
/// Only built when at least one valid password exists, so `best` and `all`
/// are never empty.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub min_distance: u32,
    /// Every valid password whose distance is `min_distance`.
    pub best: Vec<Password>,
    /// Every valid password found by the final round.
    pub all: Vec<Password>,
    /// Rounds that built a graph and enumerated it, in order.
    pub rounds: Vec<RoundReport>,
}

impl SearchOutcome {
    /// A minimal-distance password picked uniformly at random.
    pub fn choose_best<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Password> {
        self.best.choose(rng)
    }

    /// A valid password picked uniformly at random.
    pub fn choose_any<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Password> {
        self.all.choose(rng)
    }
}

/// Search `words` for the cheapest passwords matching `params`.
///
/// Words may come in any order; they are sorted here. Fails on invalid
/// parameters, on an empty word list, and with [`Error::NoSolution`] when
/// the whole dictionary has been admitted without a single valid password.
pub fn run(mut words: Vec<Word>, params: SearchParams) -> Result<SearchOutcome> {
    params.validate()?;
    if words.is_empty() {
        return Err(Error::EmptyDictionary);
    }

    sort_by_cost_density(&mut words);
    let mut selector = CandidateSelector::new(&words);
    let results = ResultAggregator::new(&params);
    let mut rounds = Vec::new();
    let mut round = 0;

    let min_distance = loop {
        round += 1;
        let widening = selector.widen();
        if widening.added == 0 && !selector.is_exhausted() {
            // same pool, same graph, same (empty) result
            debug!(round, threshold = widening.threshold, "no words admitted, skipping");
            continue;
        }

        let pool = &words[..widening.pool_size];
        let graph = WordGraph::build(pool, params.distance_between_words);
        debug!(round, nodes = graph.len(), edges = graph.edge_count(), "graph built");

        let memo = MemoizedData::new(pool, &graph, params);
        let statistics = enumerate_paths(memo, &results);
        info!(
            round,
            pool_size = widening.pool_size,
            threshold = widening.threshold,
            edges = graph.edge_count(),
            paths = statistics.get(Counters::PathsCompleted),
            passwords = statistics.get(Counters::PasswordsAccepted),
            "round complete"
        );
        rounds.push(RoundReport {
            round,
            pool_size: widening.pool_size,
            threshold: widening.threshold,
            edges: graph.edge_count(),
            statistics,
        });

        if let Some(min_distance) = results.min_distance() {
            break min_distance;
        }
        if selector.is_exhausted() {
            warn!(
                dictionary_size = selector.dictionary_size(),
                rounds = round,
                "dictionary exhausted without a valid password"
            );
            return Err(Error::NoSolution {
                dictionary_size: selector.dictionary_size(),
                rounds: round,
            });
        }
    };

    let tally = results.into_results();
    Ok(SearchOutcome {
        min_distance,
        best: tally.best,
        all: tally.all,
        rounds,
    })
}
