// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the path enumeration.
//! Each predicate represents a step of the program run by one search task.
//!
//! # Organization
//!
//! - `start`: StartWordPredicate places the task's first word
//! - `extend`: ExtendPathPredicate chooses every following word
//! - `submit`: SubmitPasswordPredicate reports complete paths
//! - Built-in predicates: `FailPredicate`

pub mod extend;
pub mod start;
pub mod submit;

// Re-export main predicates for convenience
pub use extend::ExtendPathPredicate;
pub use start::StartWordPredicate;
pub use submit::SubmitPasswordPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it makes the engine explore every alternative, which is how a search task
/// enumerates all of its paths.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext<'_>,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}
