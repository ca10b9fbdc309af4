//! Command implementations

pub mod benchmark;
pub mod inspect;
pub mod play;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_words};
pub use inspect::tree_stats;
pub use play::run_play;
pub use solve::{SolveResult, play_word, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
