// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared fixtures for unit tests.

use crate::config::SearchParams;
use crate::context::{MemoizedData, SearchContext};
use crate::graph::WordGraph;
use crate::keyboard::KeyboardLayout;
use crate::results::ResultAggregator;
use crate::words::Word;

/// Owns everything a [`SearchContext`] borrows.
pub(crate) struct Fixture {
    pub pool: Vec<Word>,
    pub graph: WordGraph,
    pub params: SearchParams,
    pub results: ResultAggregator,
}

impl Fixture {
    /// No words, no graph, default parameters.
    pub fn empty() -> Self {
        Self::with_graph(&[], WordGraph::default(), SearchParams::default())
    }

    /// QWERTY words with the graph built from `params`.
    pub fn new(texts: &[&str], params: SearchParams) -> Self {
        let pool = words(texts);
        let graph = WordGraph::build(&pool, params.distance_between_words);
        Self::assemble(pool, graph, params)
    }

    /// QWERTY words with a hand-made graph.
    pub fn with_graph(texts: &[&str], graph: WordGraph, params: SearchParams) -> Self {
        Self::assemble(words(texts), graph, params)
    }

    fn assemble(pool: Vec<Word>, graph: WordGraph, params: SearchParams) -> Self {
        let results = ResultAggregator::new(&params);
        Self {
            pool,
            graph,
            params,
            results,
        }
    }

    pub fn memo(&self) -> MemoizedData<'_> {
        MemoizedData::new(&self.pool, &self.graph, self.params)
    }

    pub fn context(&self) -> SearchContext<'_> {
        SearchContext::new(self.memo(), &self.results)
    }
}

fn words(texts: &[&str]) -> Vec<Word> {
    let layout = KeyboardLayout::qwerty();
    texts
        .iter()
        .map(|t| Word::new(t, &layout).expect("fixture words are on the layout"))
        .collect()
}
