// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Key coordinates.

/// Coordinate of one key on the logical keyboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPosition {
    row: u8,
    column: u8,
}

impl KeyPosition {
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Manhattan distance between two keys.
    #[inline]
    pub fn distance(self, other: KeyPosition) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.column.abs_diff(other.column))
    }
}
