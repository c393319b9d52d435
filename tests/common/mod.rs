// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use typewalk::config::SearchParams;
use typewalk::keyboard::KeyboardLayout;
use typewalk::words::Word;

/// One-row layout covering a, s, d, f, g, h.
pub fn home_row_layout() -> KeyboardLayout {
    KeyboardLayout::from_rows(&["asdfgh"]).expect("lowercase row")
}

/// Build word records, panicking on letters missing from `layout`.
pub fn words(layout: &KeyboardLayout, texts: &[&str]) -> Vec<Word> {
    texts
        .iter()
        .map(|t| Word::new(t, layout).expect("test word is on the layout"))
        .collect()
}

/// Two words per password, 6 to 8 letters, joins closer than 2 keys.
pub fn two_word_params() -> SearchParams {
    SearchParams {
        distance_between_words: 2,
        min_length: 6,
        max_length: 8,
        words_count: 2,
    }
}

/// Parameters that accept any length, for counting paths.
pub fn any_length(words_count: usize) -> SearchParams {
    SearchParams {
        distance_between_words: 2,
        min_length: 0,
        max_length: usize::MAX,
        words_count,
    }
}
