// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods. Each search task owns its own counters; a round's
//! totals are the merge of every task's counters.

use std::fmt;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Paths reaching the full word count.
    PathsCompleted,
    /// Complete paths within the length bounds.
    PasswordsAccepted,
    /// Complete paths outside the length bounds.
    PasswordsRejected,
    /// Successors skipped because they were already on the path.
    RepeatedWords,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that increments the given counter each time it is reached.
    pub fn counting_predicate(counter: Counters) -> Box<dyn Predicate> {
        Box::new(CountingPredicate { counter })
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Sum of two sets of counters.
    pub fn merged(mut self, other: Statistics) -> Statistics {
        for (total, value) in self.stats.iter_mut().zip(other.stats) {
            *total += value;
        }
        self
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use strum::IntoEnumIterator;

        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct CountingPredicate {
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        ctx.statistics.increment_counter(self.counter);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
