// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Word list loading.
//!
//! The word list is plain text with one word per line. Only lines made of
//! lowercase ASCII letters become words; everything else (capitalised
//! names, possessives, numbers, lines that are not UTF-8) is skipped.
//!
//! This is looser than the classic word list filter, which also dropped
//! single letters and words ending in `s`. Searches over the same list
//! therefore see more words and can find different passwords.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::Word;
use crate::error::{Error, Result};
use crate::keyboard::KeyboardLayout;

/// Whether a line holds a usable word: non-empty and lowercase ASCII
/// letters only, ignoring surrounding whitespace.
pub fn is_valid_word(line: &str) -> bool {
    let word = line.trim();
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Read words from `reader`, one per line, in file order.
///
/// Lines that are not UTF-8, fail [`is_valid_word`] or use letters missing
/// from `layout` are skipped. Read errors are returned unchanged.
pub fn load_words<R: BufRead>(reader: R, layout: &KeyboardLayout) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for bytes in reader.split(b'\n') {
        let bytes = bytes?;
        let Ok(line) = std::str::from_utf8(&bytes) else {
            skipped += 1;
            continue;
        };
        if !is_valid_word(line) {
            skipped += 1;
            continue;
        }
        match Word::new(line.trim(), layout) {
            Ok(word) => words.push(word),
            Err(Error::UnmappedCharacter { .. }) => skipped += 1,
            Err(other) => return Err(other),
        }
    }

    debug!(loaded = words.len(), skipped, "word list read");
    Ok(words)
}

/// Open a word list file and load it with [`load_words`].
pub fn load_dictionary(path: impl AsRef<Path>, layout: &KeyboardLayout) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::DictionaryRead {
        path: path.to_path_buf(),
        source,
    })?;
    load_words(BufReader::new(file), layout)
}

/// Stable ascending sort by [`Word::cost_density`].
pub fn sort_by_cost_density(words: &mut [Word]) {
    words.sort_by_key(Word::cost_density);
}
