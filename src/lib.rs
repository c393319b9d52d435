// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for multi-word passwords that are cheap to type.
//!
//! A password is a sequence of distinct dictionary words whose total
//! length lies in a target range, where each word ends on a key close to
//! the key the next word starts on. Among all such passwords the search
//! finds the ones with the smallest total typing distance: the distance
//! walked inside every word plus the hops between words.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Built once per widening round and shared by every search task:
//! - The candidate pool, a prefix of the dictionary sorted by cost density
//! - The word graph over the pool
//! - The search parameters
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Owned by one search task, tracked on the trail:
//! - Trail - records state changes for O(1) backtracking
//! - Path - the word sequence under construction
//!
//! # Search Algorithm
//!
//! The driver in [`search`] widens the candidate pool round by round:
//!
//! 1. **Widen**: admit the next band of cheap-per-letter words ([`selection`])
//! 2. **Build**: connect words whose boundary keys are close ([`graph`])
//! 3. **Enumerate**: walk every simple path of the target word count ([`enumerate`])
//!
//! and stops after the first round that produces a valid password.
//!
//! # Parallelization
//!
//! Enumeration runs one backtracking task per graph node on the rayon pool.
//! Tasks read the round data without locking and report complete paths to
//! a single [`ResultAggregator`](results::ResultAggregator).

pub mod config;
pub mod context;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod keyboard;
pub mod predicates;
pub mod results;
pub mod search;
pub mod selection;
pub mod state;
pub mod trail;
pub mod words;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::SearchParams;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{Error, Result};
pub use results::{Password, ResultAggregator};
pub use search::{RoundReport, SearchOutcome};
pub use trail::Trail;
pub use words::Word;
