// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Keyboard distance model.
//!
//! Each letter sits at a (row, column) coordinate on a logical keyboard.
//! The typing cost between two letters is the Manhattan distance between
//! their coordinates:
//!
//! ```text
//! q w e r t y u i o p      row 0
//! a s d f g h j k l        row 1
//! z x c v b n m            row 2
//! ```
//!
//! The columns are not staggered, so `a` and `q` are distance 1 apart and
//! `a` and `w` are distance 2 apart.

pub mod layout;
pub mod position;

pub use layout::KeyboardLayout;
pub use position::KeyPosition;
