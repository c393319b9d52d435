// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line front end: load a word list, search, print a sample.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use typewalk::config::{
    SearchParams, DEFAULT_DICTIONARY, DEFAULT_DISTANCE_BETWEEN_WORDS, DEFAULT_MAX_LENGTH,
    DEFAULT_MIN_LENGTH, DEFAULT_WORDS_COUNT,
};
use typewalk::keyboard::KeyboardLayout;
use typewalk::search::{self, SearchOutcome};
use typewalk::words::load_dictionary;

/// Find multi-word passwords that are cheap to type on a QWERTY keyboard.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Word list, one word per line
    #[arg(default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Consecutive words must join on keys closer than this
    #[arg(long, default_value_t = DEFAULT_DISTANCE_BETWEEN_WORDS)]
    distance_between_words: u32,

    /// Shortest accepted password, in letters
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Longest accepted password, in letters
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Words per password
    #[arg(long, default_value_t = DEFAULT_WORDS_COUNT)]
    words_count: usize,

    /// Seed for picking the printed passwords
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

impl Args {
    fn params(&self) -> SearchParams {
        SearchParams {
            distance_between_words: self.distance_between_words,
            min_length: self.min_length,
            max_length: self.max_length,
            words_count: self.words_count,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the worker pool")?;
    }

    let layout = KeyboardLayout::qwerty();
    let words = load_dictionary(&args.dictionary, &layout)
        .with_context(|| format!("loading {}", args.dictionary.display()))?;
    println!("Words loaded: {}", words.len());

    let outcome = search::run(words, args.params()).context("password search failed")?;

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(thread_rng()),
    };
    report(&outcome, &mut rng);
    Ok(())
}

fn report(outcome: &SearchOutcome, rng: &mut dyn RngCore) {
    println!("Minimum distance: {}", outcome.min_distance);
    println!("Passwords with minimum distance: {}", outcome.best.len());
    if let Some(password) = outcome.choose_best(rng) {
        println!("Random minimal password: {}", password);
    }
    println!("Total passwords: {}", outcome.all.len());
    if let Some(password) = outcome.choose_any(rng) {
        println!("Random password: {}", password);
    }
}
