// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the password search.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the library.
///
/// Only dictionary loading can fail on well-formed input. The remaining
/// variants describe input the search refuses to work with, or a search
/// that ran out of words without producing a single valid password.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Character has no key on the keyboard layout.
    #[error("character {ch:?} is not on the keyboard layout")]
    UnmappedCharacter { ch: char },

    /// A word record needs at least one character.
    #[error("cannot build a word record from an empty string")]
    EmptyWord,

    #[error("failed to read word list {path}: {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("dictionary contains no usable words")]
    EmptyDictionary,

    #[error("invalid search parameters: {0}")]
    InvalidParams(String),

    /// Every dictionary word was admitted and no valid password exists.
    #[error("no valid password after admitting all {dictionary_size} words in {rounds} rounds")]
    NoSolution { dictionary_size: usize, rounds: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
