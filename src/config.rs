// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search parameters and their defaults.
//!
//! The defaults reproduce the classic setting: four words, 20 to 24 letters
//! in total, and consecutive words joined by keys less than 2 apart.

use crate::error::{Error, Result};

/// Capacity of a path. `words_count` may not exceed this.
pub const MAX_WORDS_COUNT: usize = 8;

/// Default bound on the key distance between one word's last letter and
/// the next word's first letter (exclusive).
pub const DEFAULT_DISTANCE_BETWEEN_WORDS: u32 = 2;

pub const DEFAULT_MIN_LENGTH: usize = 20;

pub const DEFAULT_MAX_LENGTH: usize = 24;

pub const DEFAULT_WORDS_COUNT: usize = 4;

/// Default word list location used by the binary.
pub const DEFAULT_DICTIONARY: &str = "./data/linux_words";

/// Parameters of one password search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Edge `A -> B` exists iff `distance(A.end, B.start) < distance_between_words`.
    pub distance_between_words: u32,
    /// Smallest accepted total letter count (inclusive).
    pub min_length: usize,
    /// Largest accepted total letter count (inclusive).
    pub max_length: usize,
    /// Number of words in every password.
    pub words_count: usize,
}

impl SearchParams {
    /// Check the parameters describe a search that can be run.
    pub fn validate(&self) -> Result<()> {
        if self.words_count < 2 || self.words_count > MAX_WORDS_COUNT {
            return Err(Error::InvalidParams(format!(
                "words_count must be in 2..={}, got {}",
                MAX_WORDS_COUNT, self.words_count
            )));
        }
        if self.min_length > self.max_length {
            return Err(Error::InvalidParams(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }
        if self.distance_between_words == 0 {
            return Err(Error::InvalidParams(
                "distance_between_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a total letter count is within the accepted range.
    pub fn accepts_length(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            distance_between_words: DEFAULT_DISTANCE_BETWEEN_WORDS,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            words_count: DEFAULT_WORDS_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = SearchParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.words_count, 4);
        assert!(params.accepts_length(20));
        assert!(params.accepts_length(24));
        assert!(!params.accepts_length(19));
        assert!(!params.accepts_length(25));
    }

    #[test]
    fn test_rejects_bad_words_count() {
        let mut params = SearchParams::default();
        params.words_count = 1;
        assert!(matches!(params.validate(), Err(Error::InvalidParams(_))));

        params.words_count = MAX_WORDS_COUNT + 1;
        assert!(matches!(params.validate(), Err(Error::InvalidParams(_))));
    }

    #[test]
    fn test_rejects_inverted_length_range() {
        let params = SearchParams {
            min_length: 10,
            max_length: 9,
            ..SearchParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_distance() {
        let params = SearchParams {
            distance_between_words: 0,
            ..SearchParams::default()
        };
        assert!(params.validate().is_err());
    }
}
