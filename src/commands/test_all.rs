//! Test all words - comprehensive solver evaluation
//!
//! Runs the solver against every dictionary word and generates statistics.

use super::solve::play_word;
use crate::core::{MAX_WRONG_GUESSES, Word};
use crate::solver::{GameError, HangmanSolver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: usize,
    pub wrong: u8,
    pub success: bool,
    pub left_tree: bool,
}

/// Win counts for one word length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthSummary {
    pub tested: usize,
    pub solved: usize,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Wrong-guess count -> number of solved words
    pub wrong_distribution: BTreeMap<u8, usize>,
    pub total_time: Duration,
    pub average_wrong: f64,
    pub average_guesses: f64,
    /// Solved words that needed the most wrong guesses, hardest first
    pub hardest_words: Vec<(String, u8)>,
    pub failed_words: Vec<String>,
    pub per_length: BTreeMap<usize, LengthSummary>,
    pub fallbacks: usize,
}

/// Run the solver on `words`, optionally limited to one length or a prefix
///
/// # Errors
///
/// Returns the first protocol error a session reports.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_test_all(
    solver: &HangmanSolver,
    words: &[Word],
    limit: Option<usize>,
    length: Option<usize>,
) -> Result<TestAllStatistics, GameError> {
    let test_words: Vec<&Word> = words
        .iter()
        .filter(|w| length.is_none_or(|len| w.len() == len))
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(test_words.len());
    let mut failures = 0usize;

    for (idx, &word) in test_words.iter().enumerate() {
        let result = play_word(solver, word)?;
        if !result.success {
            failures += 1;
        }
        results.push(WordTestResult {
            word: word.text().to_string(),
            guesses: result.turns.len(),
            wrong: result.wrong_guesses,
            success: result.success,
            left_tree: result.left_tree,
        });

        if idx % 25 == 0 {
            pb.set_message(format!("Failed: {failures}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success).collect();

    let mut wrong_distribution: BTreeMap<u8, usize> = BTreeMap::new();
    for result in &solved {
        *wrong_distribution.entry(result.wrong).or_insert(0) += 1;
    }

    let mut per_length: BTreeMap<usize, LengthSummary> = BTreeMap::new();
    for result in results {
        let summary = per_length.entry(result.word.len()).or_default();
        summary.tested += 1;
        summary.solved += usize::from(result.success);
    }

    let average = |f: fn(&WordTestResult) -> usize| {
        if solved.is_empty() {
            0.0
        } else {
            solved.iter().map(|r| f(r)).sum::<usize>() as f64 / solved.len() as f64
        }
    };

    let mut hardest_words: Vec<(String, u8)> = solved
        .iter()
        .filter(|r| r.wrong >= MAX_WRONG_GUESSES - 2)
        .map(|r| (r.word.clone(), r.wrong))
        .collect();
    hardest_words.sort_by_key(|(_, wrong)| std::cmp::Reverse(*wrong));
    hardest_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        wrong_distribution,
        total_time,
        average_wrong: average(|r| usize::from(r.wrong)),
        average_guesses: average(|r| r.guesses),
        hardest_words,
        failed_words: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.word.clone())
            .collect(),
        per_length,
        fallbacks: results.iter().filter(|r| r.left_tree).count(),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let percent = |n: usize| {
        if stats.total_words == 0 {
            0.0
        } else {
            n as f64 / stats.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", percent(stats.solved)).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", percent(stats.failed)).red()
        );
    }
    println!(
        "  Average wrong:       {}",
        format!("{:.3}", stats.average_wrong).bright_yellow().bold()
    );
    println!("  Average guesses:     {:.2}", stats.average_guesses);
    println!("  Live fallbacks:      {}", stats.fallbacks);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Wrong Guess Distribution".bright_cyan().bold());
    let max_count = stats.wrong_distribution.values().copied().max().unwrap_or(1);
    for wrong in 0..MAX_WRONG_GUESSES {
        let count = stats.wrong_distribution.get(&wrong).copied().unwrap_or(0);
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {wrong} wrong: {bar} {count:5}");
    }

    println!("\n📏 {}", "By Word Length".bright_cyan().bold());
    for (length, summary) in &stats.per_length {
        let rate = summary.solved as f64 / summary.tested.max(1) as f64 * 100.0;
        let rate = format!("{rate:5.1}%");
        let rate = if summary.solved == summary.tested {
            rate.green()
        } else {
            rate.yellow()
        };
        println!(
            "  {length:2} letters: {:5}/{:<5} {rate}",
            summary.solved, summary.tested
        );
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, wrong) in stats.hardest_words.iter().take(5) {
            println!("  {} ({wrong} wrong)", word.to_uppercase().yellow());
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Failed Words".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failed_words.len() > 10 {
            println!("  ... and {} more", stats.failed_words.len() - 10);
        }
    }
}
