// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the nearest entry with choices left
//!
//! Programs end with a [`TerminalPredicate`] that fails, so a run explores
//! the whole search space; solutions are reported as side effects by the
//! predicates along the way.
//!
//! # Example
//!
//! ```
//! use typewalk::config::SearchParams;
//! use typewalk::context::{MemoizedData, SearchContext};
//! use typewalk::engine::{EngineBuilder, Predicate, PredicateResult};
//! use typewalk::graph::WordGraph;
//! use typewalk::predicates::FailPredicate;
//! use typewalk::results::ResultAggregator;
//!
//! #[derive(Debug)]
//! struct ThreeWays;
//!
//! impl Predicate for ThreeWays {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(3)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize, _choice: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//! }
//!
//! let graph = WordGraph::default();
//! let params = SearchParams::default();
//! let results = ResultAggregator::new(&params);
//! let mut ctx = SearchContext::new(MemoizedData::new(&[], &graph, params), &results);
//!
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(ThreeWays))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//! engine.search(&mut ctx);
//!
//! // one try of each predicate per choice, plus the first try
//! assert_eq!(engine.statistics(), (4, 3));
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Expected maximum depth of the predicate stack; only a capacity hint.
const INITIAL_STACK_SIZE: usize = 32;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether try_pred has already run for this entry.
    tried: bool,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            tried: false,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the program until the search space is exhausted.
    ///
    /// Results are reported through side effects on `ctx`. On return the
    /// trail has been rewound to where it was on entry.
    ///
    /// # Panics
    ///
    /// Panics if a predicate other than the terminal one is the last to
    /// succeed (the program ran off its end), or if retry_pred returns
    /// Choices.
    pub fn search(&mut self, ctx: &mut SearchContext<'_>) {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return;
        }

        let start = ctx.trail.len();
        self.stack.push(StackEntry::new(0, 0, start));

        while let Some(entry) = self.stack.last_mut() {
            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            let result = if !entry.in_choice_mode {
                if entry.tried {
                    // Deterministic predicates have nothing left to offer
                    self.stack.pop();
                    continue;
                }
                entry.tried = true;
                self.try_count += 1;
                self.predicates[entry.predicate_index].try_pred(ctx, entry.round)
            } else {
                if entry.current_choice >= entry.num_choices {
                    // All choices exhausted
                    self.stack.pop();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[entry.predicate_index].retry_pred(ctx, entry.round, choice);
                if let PredicateResult::Choices(_) = result {
                    panic!("retry_pred returned invalid result: {:?}", result);
                }
                result
            };

            match result {
                PredicateResult::Success => self.push_next_predicate(ctx),
                PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                PredicateResult::Failure => {
                    // Backtracking happens at the top of the loop: a
                    // deterministic entry is popped, a choice entry moves on.
                }
                PredicateResult::Choices(n) => {
                    let entry = self
                        .stack
                        .last_mut()
                        .expect("choice entry is on top of the stack");
                    entry.in_choice_mode = true;
                    entry.current_choice = 0;
                    entry.num_choices = n;
                    entry.trail_checkpoint = ctx.trail.len();
                }
            }
        }

        ctx.rewind_to(start);
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with a failing terminal).
    fn push_next_predicate(&mut self, ctx: &SearchContext<'_>) {
        let current = self.stack.last().expect("stack is not empty");
        let next_index = current.predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without failing. \
                 All programs must terminate with a failing terminal predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext<'_>) {
        let current = self.stack.last().expect("stack is not empty");
        let entry = StackEntry::new(current.predicate_index, current.round + 1, ctx.trail.len());
        self.stack.push(entry);
    }

    /// Get statistics about the last search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for predicate programs.
///
/// Programs are built from ordinary predicates followed by exactly one
/// terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, completing the program.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A program that ends in a terminal predicate and is ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
