//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_mask, wrong_meter};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::MAX_WRONG_GUESSES;
use crate::solver::TreeStats;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    if !result.in_dictionary {
        println!("{}", "(not in the dictionary)".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    let mut wrong = 0u8;
    for (i, turn) in result.turns.iter().enumerate() {
        let letter = (turn.letter as char).to_ascii_uppercase().to_string();
        let letter = if turn.hit {
            letter.green().bold()
        } else {
            wrong += 1;
            letter.red().bold()
        };
        println!(
            "Turn {:2}: {letter}  {}  {}",
            i + 1,
            spaced_mask(&turn.mask),
            wrong_meter(wrong)
        );
    }

    if result.left_tree {
        println!("{}", "  (left the decision tree; filtered live)".bright_black());
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with {} wrong",
                result.turns.len(),
                result.wrong_guesses
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} wrong guesses", result.wrong_guesses)
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Win rate:         {}",
        format!("{:.2}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average wrong:    {:.2}", result.average_wrong);
    println!(
        "   Worst case:       {}",
        format!("{} wrong", result.max_wrong).yellow()
    );
    println!("   Live fallbacks:   {}", result.fallbacks);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    for wrong in 0..=MAX_WRONG_GUESSES {
        if let Some(&count) = result.distribution.get(&wrong) {
            let bar = create_progress_bar(count as f64, result.total_words as f64, 40);
            let pct = count as f64 / result.total_words as f64 * 100.0;
            let bar = if wrong >= MAX_WRONG_GUESSES {
                bar.red()
            } else {
                bar.green()
            };
            println!("   {wrong}: {bar} {count:5} ({pct:5.1}%)");
        }
    }
}

/// Print the shape of each decision tree
pub fn print_tree_stats(stats: &[TreeStats]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DECISION TREES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if stats.is_empty() {
        println!("\nNo trees for the requested length.");
        return;
    }

    println!(
        "\n{:>6} {:>8} {:>9} {:>8} {:>6} {:>6}",
        "length".bold(),
        "words".bold(),
        "nodes".bold(),
        "leaves".bold(),
        "depth".bold(),
        "wrong".bold()
    );
    for s in stats {
        println!(
            "{:>6} {:>8} {:>9} {:>8} {:>6} {:>6}",
            s.length, s.words, s.nodes, s.leaves, s.max_depth, s.max_wrong_depth
        );
    }

    let nodes: usize = stats.iter().map(|s| s.nodes).sum();
    let words: usize = stats.iter().map(|s| s.words).sum();
    println!(
        "\n{} trees, {} words, {} nodes",
        stats.len(),
        words,
        nodes.to_string().bright_yellow()
    );
}
