// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate selection for the widening loop.
//!
//! Building a graph over the whole dictionary is quadratic and usually
//! pointless: words that are cheap per letter are the ones that form cheap
//! passwords. The selector walks a dictionary sorted by
//! [`Word::cost_density`] and admits it in slices, one slice per round,
//! until the search finds something.
//!
//! Because the dictionary is sorted and slices are taken in order, the
//! active pool is always a prefix of the dictionary. A word's position in
//! the pool is therefore stable across rounds and doubles as its node id
//! in the word graph.

use crate::words::Word;

/// Outcome of one widening step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widening {
    /// Words admitted by this step.
    pub added: usize,
    /// Pool size after this step.
    pub pool_size: usize,
    /// Admission threshold after this step.
    pub threshold: i64,
}

/// Incrementally admits words into the candidate pool.
///
/// A word is admitted while `cost_density - 1 < threshold`. The first word
/// failing the test ends the round and bumps the threshold by one, so the
/// threshold strictly increases whenever a round stops early and the pool
/// never shrinks.
#[derive(Debug, Clone)]
pub struct CandidateSelector {
    densities: Vec<i64>,
    admitted: usize,
    threshold: i64,
}

impl CandidateSelector {
    /// Create a selector over a dictionary already sorted by cost density.
    pub fn new(sorted: &[Word]) -> Self {
        debug_assert!(
            sorted
                .windows(2)
                .all(|pair| pair[0].cost_density() <= pair[1].cost_density()),
            "dictionary must be sorted by cost density"
        );
        let densities: Vec<i64> = sorted.iter().map(Word::cost_density).collect();
        let threshold = densities.first().map_or(0, |first| first + 1);
        Self {
            densities,
            admitted: 0,
            threshold,
        }
    }

    /// Admit the next slice of words.
    ///
    /// Scans forward from the first unadmitted word. If the scan reaches the
    /// end of the dictionary the whole remaining tail is admitted and the
    /// threshold is left unchanged.
    pub fn widen(&mut self) -> Widening {
        let start = self.admitted;
        let mut end = self.densities.len();
        for (index, &density) in self.densities.iter().enumerate().skip(start) {
            if density - 1 >= self.threshold {
                end = index;
                self.threshold += 1;
                break;
            }
        }
        self.admitted = end;

        Widening {
            added: end - start,
            pool_size: self.admitted,
            threshold: self.threshold,
        }
    }

    /// Number of words admitted so far. The pool is `sorted[..pool_size()]`.
    pub fn pool_size(&self) -> usize {
        self.admitted
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Whether every word has been admitted.
    pub fn is_exhausted(&self) -> bool {
        self.admitted == self.densities.len()
    }

    pub fn dictionary_size(&self) -> usize {
        self.densities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyboardLayout;
    use crate::words::sort_by_cost_density;

    fn sorted_words(texts: &[&str]) -> Vec<Word> {
        let layout = KeyboardLayout::qwerty();
        let mut words: Vec<Word> = texts.iter().map(|t| Word::new(t, &layout).unwrap()).collect();
        sort_by_cost_density(&mut words);
        words
    }

    #[test]
    fn test_first_round_admits_cheapest_band() {
        // densities: aaaa -4, aaa -3, as -1, qm 6
        let words = sorted_words(&["qm", "as", "aaa", "aaaa"]);
        let mut selector = CandidateSelector::new(&words);
        assert_eq!(selector.threshold(), -3);

        // -4 - 1 < -3 and -3 - 1 < -3 admitted; -1 - 1 >= -3 stops
        let step = selector.widen();
        assert_eq!(step, Widening { added: 2, pool_size: 2, threshold: -2 });
    }

    #[test]
    fn test_pool_only_grows_and_threshold_increases() {
        let words = sorted_words(&["qm", "as", "aaa", "aaaa"]);
        let mut selector = CandidateSelector::new(&words);

        let mut previous_pool = 0;
        let mut previous_threshold = selector.threshold();
        while !selector.is_exhausted() {
            let step = selector.widen();
            assert!(step.pool_size >= previous_pool);
            if !selector.is_exhausted() {
                assert!(step.threshold > previous_threshold);
            }
            previous_pool = step.pool_size;
            previous_threshold = step.threshold;
        }
        assert_eq!(selector.pool_size(), 4);
    }

    #[test]
    fn test_gap_in_densities_yields_empty_rounds() {
        // densities: as -1, qm 6
        let words = sorted_words(&["qm", "as"]);
        let mut selector = CandidateSelector::new(&words);

        assert_eq!(selector.widen().added, 1);
        // threshold now 1; qm needs threshold 6 (6 - 1 < t)
        let mut empty_rounds = 0;
        loop {
            let step = selector.widen();
            if step.added > 0 {
                break;
            }
            empty_rounds += 1;
        }
        assert_eq!(empty_rounds, 5);
        assert!(selector.is_exhausted());
    }

    #[test]
    fn test_tail_admitted_when_scan_reaches_end() {
        let words = sorted_words(&["as", "sa", "ds"]);
        let mut selector = CandidateSelector::new(&words);
        let step = selector.widen();
        assert_eq!(step.added, 3);
        assert!(selector.is_exhausted());
        // exhausted selector admits nothing more
        assert_eq!(selector.widen().added, 0);
    }

    #[test]
    fn test_empty_dictionary() {
        let mut selector = CandidateSelector::new(&[]);
        assert!(selector.is_exhausted());
        assert_eq!(selector.widen().added, 0);
    }
}
