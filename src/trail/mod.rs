// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every change to trailed search state is recorded here together with the
//! value it overwrote. Backtracking rewinds the trail to a checkpoint (a
//! trail length) and writes the old values back, newest first, so the
//! state is exactly what it was when the checkpoint was taken.
//!
//! Entries refer to state slots by index rather than by pointer; the owner
//! of the state (see [`crate::context::SearchContext`]) decides what a slot
//! number means and applies the undo.

/// A single recorded change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEntry {
    /// Slot of the state that changed.
    pub slot: usize,
    /// Value the slot held before the change.
    pub old_value: usize,
}

/// Undo log for O(1) backtracking.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Expected upper bound on entries for one search; only a capacity hint.
    const INITIAL_CAPACITY: usize = 32;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Record that `slot` is about to change from `old_value`.
    pub fn record_change(&mut self, slot: usize, old_value: usize) {
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Remove every entry recorded after `checkpoint`, newest first.
    ///
    /// The caller must restore each yielded entry in the order given.
    ///
    /// # Panics
    ///
    /// Panics if `checkpoint` is beyond the current trail length.
    pub fn unwind_to(&mut self, checkpoint: usize) -> impl Iterator<Item = TrailEntry> + '_ {
        assert!(
            checkpoint <= self.entries.len(),
            "Checkpoint {} is ahead of trail length {}",
            checkpoint,
            self.entries.len()
        );
        self.entries.drain(checkpoint..).rev()
    }

    /// Current number of entries, usable as a checkpoint.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
