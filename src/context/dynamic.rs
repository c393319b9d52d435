// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use crate::config::MAX_WORDS_COUNT;
use crate::graph::NodeId;

/// Trail slot holding the path length. Slots below it are path positions.
pub(crate) const PATH_LEN_SLOT: usize = MAX_WORDS_COUNT;

/// Mutable search state (Tier 2: DYNAMIC).
///
/// The path under construction: a fixed-capacity sequence of node ids.
/// Only `path[..len]` is meaningful. Every change goes through
/// [`super::SearchContext::push_word`] so it is recorded on the trail.
#[derive(Debug, Clone)]
pub struct DynamicState {
    pub(crate) path: [NodeId; MAX_WORDS_COUNT],
    pub(crate) len: usize,
}

impl DynamicState {
    pub fn new() -> Self {
        Self {
            path: [0; MAX_WORDS_COUNT],
            len: 0,
        }
    }

    /// Current value of a trail slot.
    pub(crate) fn slot(&self, slot: usize) -> usize {
        if slot == PATH_LEN_SLOT {
            self.len
        } else {
            self.path[slot]
        }
    }

    /// Overwrite a trail slot, used when undoing.
    pub(crate) fn restore(&mut self, slot: usize, value: usize) {
        if slot == PATH_LEN_SLOT {
            self.len = value;
        } else {
            self.path[slot] = value;
        }
    }
}

impl Default for DynamicState {
    fn default() -> Self {
        Self::new()
    }
}
