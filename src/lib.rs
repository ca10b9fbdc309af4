//! Hangman Solver
//!
//! Precomputes one decision tree per word length from a dictionary, then plays
//! hangman by walking the tree: each node names the letter to guess, and the
//! revealed pattern (or a miss) selects the next node. Words the tree never
//! saw are handled by filtering candidates live.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::solver::{HangmanSolver, SolverConfig};
//! use hangman_solver::wordlists::Dictionary;
//!
//! let dict = Dictionary::from_strs(["cat", "car", "can", "bat"]);
//! let mut solver = HangmanSolver::initialize(&dict, &SolverConfig::default());
//!
//! // Secret word "bat"
//! assert_eq!(solver.guess("___", true).unwrap(), 'a');
//! solver.feedback(true, "_a_").unwrap();
//! assert_eq!(solver.guess("_a_", false).unwrap(), 'c');
//! solver.feedback(false, "_a_").unwrap();
//! assert_eq!(solver.guess("_a_", false).unwrap(), 'b');
//! ```

// Core domain types
pub mod core;

// Candidate sets, tree building and game sessions
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
