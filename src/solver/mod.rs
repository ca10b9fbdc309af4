//! Hangman solving algorithms
//!
//! Candidate filtering, offline decision tree construction, and the runtime
//! sessions that walk the finished trees.

mod builder;
mod candidates;
mod config;
mod engine;
mod error;
mod session;
pub mod tree;

pub use builder::TreeBuilder;
pub use candidates::{CandidateError, CandidateSet};
pub use config::SolverConfig;
pub use engine::HangmanSolver;
pub use error::GameError;
pub use session::{GameSession, Outcome, Turn, play};
pub use tree::{DecisionTree, Node, NodeId, TreeStats};
