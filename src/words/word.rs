// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Word records.

use std::fmt;

use crate::error::{Error, Result};
use crate::keyboard::{KeyPosition, KeyboardLayout};

/// A dictionary word with its typing metadata.
///
/// Immutable once built. The internal distance is the sum of the key
/// distances between adjacent letters, computed once here so the search
/// never walks the letters again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    start: char,
    end: char,
    start_key: KeyPosition,
    end_key: KeyPosition,
    internal_distance: u32,
}

impl Word {
    /// Build a word record, resolving every letter on `layout`.
    ///
    /// Fails on an empty string or on any letter missing from the layout.
    ///
    /// ```
    /// use typewalk::keyboard::KeyboardLayout;
    /// use typewalk::words::Word;
    ///
    /// let word = Word::new("asdf", &KeyboardLayout::qwerty()).unwrap();
    /// assert_eq!(word.internal_distance(), 3);
    /// assert_eq!(word.cost_density(), -1);
    /// ```
    pub fn new(text: &str, layout: &KeyboardLayout) -> Result<Self> {
        let mut chars = text.chars();
        let start = chars.next().ok_or(Error::EmptyWord)?;
        let start_key = layout.position(start)?;

        let mut end = start;
        let mut end_key = start_key;
        let mut internal_distance = 0;
        for ch in chars {
            let key = layout.position(ch)?;
            internal_distance += end_key.distance(key);
            end = ch;
            end_key = key;
        }

        Ok(Self {
            text: text.to_string(),
            start,
            end,
            start_key,
            end_key,
            internal_distance,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; word records are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    /// Sum of key distances between adjacent letters.
    pub fn internal_distance(&self) -> u32 {
        self.internal_distance
    }

    /// Internal distance minus length. Lower is cheaper per letter.
    pub fn cost_density(&self) -> i64 {
        i64::from(self.internal_distance) - self.len() as i64
    }

    /// Key distance from this word's last letter to `next`'s first letter.
    #[inline]
    pub fn transition_distance(&self, next: &Word) -> u32 {
        self.end_key.distance(next.start_key)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_distance_is_sum_of_adjacent_pairs() {
        let layout = KeyboardLayout::qwerty();
        let word = Word::new("asdf", &layout).unwrap();
        let expected = layout.distance('a', 's').unwrap()
            + layout.distance('s', 'd').unwrap()
            + layout.distance('d', 'f').unwrap();
        assert_eq!(word.internal_distance(), expected);
        assert_eq!(word.start(), 'a');
        assert_eq!(word.end(), 'f');
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn test_crafted_word_distances() {
        let layout = KeyboardLayout::qwerty();
        // q(0,0) -> m(2,6) -> q(0,0)
        assert_eq!(Word::new("qmq", &layout).unwrap().internal_distance(), 16);
        assert_eq!(Word::new("aaa", &layout).unwrap().internal_distance(), 0);
    }

    #[test]
    fn test_single_letter_word() {
        let layout = KeyboardLayout::qwerty();
        let word = Word::new("a", &layout).unwrap();
        assert_eq!(word.internal_distance(), 0);
        assert_eq!(word.start(), word.end());
        assert_eq!(word.cost_density(), -1);
    }

    #[test]
    fn test_transition_distance() {
        let layout = KeyboardLayout::qwerty();
        let sad = Word::new("sad", &layout).unwrap();
        let fad = Word::new("fad", &layout).unwrap();
        // d -> f
        assert_eq!(sad.transition_distance(&fad), 1);
        // d -> s
        assert_eq!(fad.transition_distance(&sad), 1);
    }

    #[test]
    fn test_rejects_empty_and_unmapped() {
        let layout = KeyboardLayout::qwerty();
        assert!(matches!(Word::new("", &layout), Err(Error::EmptyWord)));
        assert!(matches!(
            Word::new("don't", &layout),
            Err(Error::UnmappedCharacter { ch: '\'' })
        ));
    }
}
