//! Hangman Solver - CLI
//!
//! Builds one decision tree per word length at startup, then solves words,
//! benchmarks the trees, or plays interactively.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        print_test_all_statistics, run_benchmark, run_play, run_test_all, sample_words,
        solve_word, tree_stats,
    },
    core::Word,
    output::{print_benchmark_result, print_solve_result, print_tree_stats},
    solver::{HangmanSolver, SolverConfig},
    wordlists::{Dictionary, loader},
};
use indicatif::ProgressBar;
use std::io;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman player backed by precomputed per-length decision trees",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Build the trees on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: the solver guesses your word (default)
    Play,

    /// Solve a specific secret word
    Solve {
        /// The secret word
        word: String,
    },

    /// Play a random sample of dictionary words in parallel
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,

        /// Seed for the word sample (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Test solver on every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only test words of this length
        #[arg(long)]
        length: Option<usize>,
    },

    /// Show the shape of each decision tree
    Tree {
        /// Only show the tree for this length
        #[arg(long)]
        length: Option<usize>,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Build every tree behind a spinner
fn build_solver(dictionary: &Dictionary, sequential: bool) -> HangmanSolver {
    let config = if sequential {
        SolverConfig::sequential()
    } else {
        SolverConfig::default()
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Building decision trees for {} words...",
        dictionary.len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let solver = HangmanSolver::initialize(dictionary, &config);
    spinner.finish_with_message(format!(
        "Built {} trees in {:.2?}",
        solver.trees().count(),
        start.elapsed()
    ));
    solver
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let dictionary = loader::resolve(&cli.wordlist)
        .with_context(|| format!("Failed to load wordlist {:?}", cli.wordlist))?;
    if dictionary.is_empty() {
        anyhow::bail!("Wordlist {:?} contains no usable words", cli.wordlist);
    }

    let mut solver = build_solver(&dictionary, cli.sequential);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&mut solver, io::stdin().lock(), io::stdout()),
        Commands::Solve { word } => {
            let result = solve_word(&solver, &word)?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("Running benchmark on {count} random words (seed {seed})...");
            let words = sample_words(&dictionary, count, seed);
            let result = run_benchmark(&solver, &words, seed)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit, length } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Hangman Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} dictionary words", dictionary.len());
            if let Some(length) = length {
                println!("Word length: {length}");
            }
            println!();

            let words: Vec<Word> = dictionary.iter().cloned().collect();
            let stats = run_test_all(&solver, &words, limit, length)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
        Commands::Tree { length } => {
            print_tree_stats(&tree_stats(&solver, length));
            Ok(())
        }
    }
}
