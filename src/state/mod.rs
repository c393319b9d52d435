// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-task search bookkeeping.
//!
//! - `statistics`: counters incremented by predicates during enumeration

pub mod statistics;

pub use statistics::{Counters, Statistics};
