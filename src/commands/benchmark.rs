//! Benchmark command
//!
//! Plays a random sample of dictionary words in parallel, one independent
//! session per word, all sharing the same trees.

use super::solve::{SolveResult, play_word};
use crate::core::Word;
use crate::solver::{GameError, HangmanSolver};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub seed: u64,
    pub total_words: usize,
    pub solved: usize,
    pub average_wrong: f64,
    pub max_wrong: u8,
    /// Wrong-guess count -> number of games, over every game played
    pub distribution: BTreeMap<u8, usize>,
    /// Games that fell back to live filtering
    pub fallbacks: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }
}

/// Pick up to `count` distinct dictionary words with a seeded generator
#[must_use]
pub fn sample_words(dictionary: &Dictionary, count: usize, seed: u64) -> Vec<Word> {
    let pool: Vec<&Word> = dictionary.iter().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    pool.choose_multiple(&mut rng, count)
        .map(|word| (*word).clone())
        .collect()
}

/// Run benchmark on a set of target words
///
/// # Errors
///
/// Returns the first protocol error any session reports.
pub fn run_benchmark(
    solver: &HangmanSolver,
    target_words: &[Word],
    seed: u64,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let results: Vec<SolveResult> = target_words
        .par_iter()
        .map(|word| play_word(solver, word))
        .collect::<Result<_, _>>()?;

    let duration = start.elapsed();
    let total_words = results.len();

    let mut distribution: BTreeMap<u8, usize> = BTreeMap::new();
    for result in &results {
        *distribution.entry(result.wrong_guesses).or_insert(0) += 1;
    }
    let total_wrong: usize = results.iter().map(|r| usize::from(r.wrong_guesses)).sum();

    Ok(BenchmarkResult {
        seed,
        total_words,
        solved: results.iter().filter(|r| r.success).count(),
        average_wrong: if total_words == 0 {
            0.0
        } else {
            total_wrong as f64 / total_words as f64
        },
        max_wrong: results.iter().map(|r| r.wrong_guesses).max().unwrap_or(0),
        distribution,
        fallbacks: results.iter().filter(|r| r.left_tree).count(),
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    })
}
