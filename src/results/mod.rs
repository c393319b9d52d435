// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Result aggregation.
//!
//! Every search task reports complete paths to one shared
//! [`ResultAggregator`]. It keeps the smallest total distance seen among
//! valid passwords, every password achieving it, and every valid password.

use std::fmt;
use std::ops::RangeInclusive;

use parking_lot::Mutex;

use crate::config::SearchParams;
use crate::words::Word;

/// A valid password: its words and derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Password {
    words: Vec<String>,
    total_length: usize,
    total_distance: u32,
}

impl Password {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Sum of word lengths.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Internal distances of every word plus the transitions between them.
    pub fn total_distance(&self) -> u32 {
        self.total_distance
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

/// Total length and total typing distance of a word sequence.
///
/// ```
/// use typewalk::keyboard::KeyboardLayout;
/// use typewalk::results::score;
/// use typewalk::words::Word;
///
/// let layout = KeyboardLayout::qwerty();
/// let sad = Word::new("sad", &layout).unwrap();
/// let fad = Word::new("fad", &layout).unwrap();
/// // sad: 1 + 2, fad: 3 + 2, d -> f: 1
/// assert_eq!(score(&[&sad, &fad]), (6, 9));
/// ```
pub fn score(words: &[&Word]) -> (usize, u32) {
    let length = words.iter().map(|w| w.len()).sum();
    let internal: u32 = words.iter().map(|w| w.internal_distance()).sum();
    let transitions: u32 = words
        .windows(2)
        .map(|pair| pair[0].transition_distance(pair[1]))
        .sum();
    (length, internal + transitions)
}

/// What happened to a submitted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Total length outside the accepted range; nothing recorded.
    Rejected,
    /// Valid, but worse than the current minimum.
    Accepted,
    /// Valid and equal to the current minimum.
    Tied,
    /// Valid and strictly better than anything before.
    Improved,
}

impl Submission {
    pub fn is_valid(self) -> bool {
        self != Submission::Rejected
    }
}

#[derive(Debug, Default)]
struct Tally {
    min_distance: Option<u32>,
    best: Vec<Password>,
    all: Vec<Password>,
}

/// Aggregated results once the search is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Results {
    /// `None` until a valid password has been seen.
    pub min_distance: Option<u32>,
    /// Valid passwords whose distance equals `min_distance`.
    pub best: Vec<Password>,
    /// Every valid password, in submission order.
    pub all: Vec<Password>,
}

/// Thread-safe accumulator shared by all search tasks.
///
/// A single lock covers the whole record-compare-replace sequence of one
/// submission. `best` is therefore always exactly the passwords in `all`
/// whose distance equals `min_distance`, however submissions interleave.
#[derive(Debug)]
pub struct ResultAggregator {
    lengths: RangeInclusive<usize>,
    tally: Mutex<Tally>,
}

impl ResultAggregator {
    pub fn new(params: &SearchParams) -> Self {
        Self {
            lengths: params.min_length..=params.max_length,
            tally: Mutex::new(Tally::default()),
        }
    }

    /// Report a complete path.
    ///
    /// Scoring happens outside the lock; only valid passwords take it.
    pub fn submit(&self, words: &[&Word]) -> Submission {
        let (total_length, total_distance) = score(words);
        if !self.lengths.contains(&total_length) {
            return Submission::Rejected;
        }

        let password = Password {
            words: words.iter().map(|w| w.as_str().to_string()).collect(),
            total_length,
            total_distance,
        };

        let mut tally = self.tally.lock();
        let outcome = match tally.min_distance {
            Some(min) if total_distance > min => Submission::Accepted,
            Some(min) if total_distance == min => {
                tally.best.push(password.clone());
                Submission::Tied
            }
            _ => {
                tally.min_distance = Some(total_distance);
                tally.best.clear();
                tally.best.push(password.clone());
                Submission::Improved
            }
        };
        tally.all.push(password);
        outcome
    }

    /// Smallest distance seen so far among valid passwords.
    pub fn min_distance(&self) -> Option<u32> {
        self.tally.lock().min_distance
    }

    /// Number of valid passwords so far.
    pub fn total(&self) -> usize {
        self.tally.lock().all.len()
    }

    /// Consume the aggregator once every task has finished.
    pub fn into_results(self) -> Results {
        let tally = self.tally.into_inner();
        Results {
            min_distance: tally.min_distance,
            best: tally.best,
            all: tally.all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyboardLayout;

    fn params(min_length: usize, max_length: usize) -> SearchParams {
        SearchParams {
            min_length,
            max_length,
            words_count: 2,
            ..SearchParams::default()
        }
    }

    fn word(text: &str) -> Word {
        Word::new(text, &KeyboardLayout::qwerty()).unwrap()
    }

    #[test]
    fn test_score_includes_transitions() {
        let layout = KeyboardLayout::qwerty();
        let words: Vec<Word> = ["asdf", "gh", "jk"]
            .iter()
            .map(|t| Word::new(t, &layout).unwrap())
            .collect();
        let refs: Vec<&Word> = words.iter().collect();
        // internal 3 + 1 + 1, transitions f->g 1, h->j 1
        assert_eq!(score(&refs), (8, 7));
    }

    #[test]
    fn test_rejects_out_of_range_length() {
        let aggregator = ResultAggregator::new(&params(6, 8));
        let (as_, sad) = (word("as"), word("sad"));
        assert_eq!(aggregator.submit(&[&as_, &sad]), Submission::Rejected);
        assert_eq!(aggregator.min_distance(), None);
        assert_eq!(aggregator.total(), 0);
    }

    #[test]
    fn test_improvement_replaces_best() {
        let aggregator = ResultAggregator::new(&params(1, 100));
        let (qm, mq, as_, sa) = (word("qm"), word("mq"), word("as"), word("sa"));

        // qm(8) + m->m(0) + mq(8) = 16
        assert_eq!(aggregator.submit(&[&qm, &mq]), Submission::Improved);
        // as(1) + s->s(0) + sa(1) = 2
        assert_eq!(aggregator.submit(&[&as_, &sa]), Submission::Improved);
        // sa(1) + a->a(0) + as(1) = 2
        assert_eq!(aggregator.submit(&[&sa, &as_]), Submission::Tied);
        assert_eq!(aggregator.submit(&[&qm, &mq]), Submission::Accepted);

        let results = aggregator.into_results();
        assert_eq!(results.min_distance, Some(2));
        assert_eq!(results.best.len(), 2);
        assert_eq!(results.all.len(), 4);
        assert_eq!(results.best[0].to_string(), "as sa");
        assert_eq!(results.best[1].to_string(), "sa as");
        assert!(results.best.iter().all(|p| p.total_distance() == 2));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let aggregator = ResultAggregator::new(&params(4, 5));
        let (as_, sa, sad) = (word("as"), word("sa"), word("sad"));
        assert!(aggregator.submit(&[&as_, &sa]).is_valid());
        assert!(aggregator.submit(&[&as_, &sad]).is_valid());
        assert!(!aggregator.submit(&[&sad, &sad]).is_valid());
    }
}
