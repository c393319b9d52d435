// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Letter to key lookup table.

use super::KeyPosition;
use crate::error::{Error, Result};

/// Number of slots in the lookup table, one per lowercase ASCII letter.
const NLETTERS: usize = 26;

/// Rows of the standard layout, top to bottom.
const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Fixed-size lookup table from lowercase letter to key position.
///
/// Letters missing from the layout have no slot value and every lookup of
/// them fails with [`Error::UnmappedCharacter`] instead of silently
/// landing on some default key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    keys: [Option<KeyPosition>; NLETTERS],
}

impl KeyboardLayout {
    /// The standard three-row QWERTY layout.
    pub fn qwerty() -> Self {
        // The rows are static and contain only lowercase letters.
        let mut keys = [None; NLETTERS];
        for (row, letters) in QWERTY_ROWS.iter().enumerate() {
            for (column, ch) in letters.bytes().enumerate() {
                keys[(ch - b'a') as usize] = Some(KeyPosition::new(row as u8, column as u8));
            }
        }
        Self { keys }
    }

    /// Build a layout from rows of letters.
    ///
    /// A letter's row is the index of its string and its column is its
    /// position within that string. If a letter appears twice the later
    /// occurrence wins.
    ///
    /// ```
    /// use typewalk::keyboard::KeyboardLayout;
    ///
    /// let layout = KeyboardLayout::from_rows(&["asdfgh"]).unwrap();
    /// assert_eq!(layout.distance('a', 'f').unwrap(), 3);
    /// assert!(layout.distance('a', 'q').is_err());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let mut keys = [None; NLETTERS];
        for (row, letters) in rows.iter().enumerate() {
            for (column, ch) in letters.chars().enumerate() {
                let slot = Self::slot(ch)?;
                keys[slot] = Some(KeyPosition::new(row as u8, column as u8));
            }
        }
        Ok(Self { keys })
    }

    fn slot(ch: char) -> Result<usize> {
        if ch.is_ascii_lowercase() {
            Ok((ch as u8 - b'a') as usize)
        } else {
            Err(Error::UnmappedCharacter { ch })
        }
    }

    /// Position of a letter's key.
    pub fn position(&self, ch: char) -> Result<KeyPosition> {
        self.keys[Self::slot(ch)?].ok_or(Error::UnmappedCharacter { ch })
    }

    /// Typing distance between two characters.
    pub fn distance(&self, a: char, b: char) -> Result<u32> {
        Ok(self.position(a)?.distance(self.position(b)?))
    }

    /// All letters present on the layout, in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, key)| key.is_some())
            .map(|(slot, _)| (b'a' + slot as u8) as char)
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}
