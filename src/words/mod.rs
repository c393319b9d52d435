// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dictionary words and their typing metadata.

pub mod dictionary;
pub mod word;

pub use dictionary::{is_valid_word, load_dictionary, load_words, sort_by_cost_density};
pub use word::Word;
