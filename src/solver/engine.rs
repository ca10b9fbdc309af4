//! Main hangman solver interface
//!
//! Owns one frozen tree per word length and the session of the game currently
//! being played. The `guess`/`feedback` pair is the surface a game loop drives.

use super::builder::TreeBuilder;
use super::config::SolverConfig;
use super::error::GameError;
use super::session::GameSession;
use super::tree::DecisionTree;
use crate::core::Mask;
use crate::wordlists::Dictionary;
use log::{debug, info};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Hangman solver
///
/// Trees are built once by [`HangmanSolver::initialize`] and never change.
/// They are shared through `Arc`, so sessions handed out by
/// [`HangmanSolver::new_session`] can be played on any thread.
#[derive(Debug, Default)]
pub struct HangmanSolver {
    trees: BTreeMap<usize, Arc<DecisionTree>>,
    session: Option<GameSession>,
}

impl HangmanSolver {
    /// Build one decision tree per word length in `dictionary`
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::{HangmanSolver, SolverConfig};
    /// use hangman_solver::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(["cat", "car", "can", "bat"]);
    /// let mut solver = HangmanSolver::initialize(&dict, &SolverConfig::default());
    ///
    /// assert_eq!(solver.guess("___", true).unwrap(), 'a');
    /// solver.feedback(true, "_a_").unwrap();
    /// assert_eq!(solver.guess("_a_", false).unwrap(), 'c');
    /// ```
    #[must_use]
    pub fn initialize(dictionary: &Dictionary, config: &SolverConfig) -> Self {
        let start = Instant::now();
        let lengths: Vec<usize> = dictionary.lengths().collect();
        let budget = config.budget();

        let build = |length: usize| {
            let set = dictionary.candidate_set(length);
            let tree = TreeBuilder::with_budget(budget).build(set);
            (length, Arc::new(tree))
        };

        let trees: BTreeMap<_, _> = if config.parallel {
            lengths.into_par_iter().map(build).collect()
        } else {
            lengths.into_iter().map(build).collect()
        };

        info!(
            "initialised {} trees from {} words in {:.2?}",
            trees.len(),
            dictionary.len(),
            start.elapsed()
        );

        Self {
            trees,
            session: None,
        }
    }

    /// A fresh session for a word of `length`
    ///
    /// Lengths with no dictionary words get a session that guesses in the
    /// fallback letter order.
    #[must_use]
    pub fn new_session(&self, length: usize) -> GameSession {
        match self.trees.get(&length) {
            Some(tree) => GameSession::start(Arc::clone(tree)),
            None => {
                debug!("no tree for length {length}");
                GameSession::untracked(length)
            }
        }
    }

    /// Next letter for the active game
    ///
    /// With `is_new_word` the previous game is discarded and a new one starts
    /// for `pattern.len()` letters. Otherwise `pattern` must match the active
    /// game's length.
    ///
    /// # Errors
    /// - `InvalidPattern` if `pattern` cannot be parsed
    /// - `NoActiveGame` if no game was started
    /// - `LengthMismatch` if `pattern` has the wrong length
    /// - any error from [`GameSession::guess`]
    pub fn guess(&mut self, pattern: &str, is_new_word: bool) -> Result<char, GameError> {
        let mask = Mask::parse(pattern)?;

        if is_new_word {
            self.session = Some(self.new_session(mask.len()));
        }
        let session = self.session.as_mut().ok_or(GameError::NoActiveGame)?;

        if mask.len() != session.length() {
            return Err(GameError::LengthMismatch {
                expected: session.length(),
                found: mask.len(),
            });
        }

        session.guess().map(char::from)
    }

    /// Report the outcome of the last guess
    ///
    /// # Errors
    /// - `NoActiveGame` if no game was started
    /// - any error from [`GameSession::feedback`]
    pub fn feedback(&mut self, is_correct: bool, pattern: &str) -> Result<(), GameError> {
        self.session
            .as_mut()
            .ok_or(GameError::NoActiveGame)?
            .feedback(is_correct, pattern)
    }

    /// Tree for one word length
    #[must_use]
    pub fn tree(&self, length: usize) -> Option<&Arc<DecisionTree>> {
        self.trees.get(&length)
    }

    /// All trees, by ascending word length
    pub fn trees(&self) -> impl Iterator<Item = (usize, &Arc<DecisionTree>)> {
        self.trees.iter().map(|(len, tree)| (*len, tree))
    }

    /// The active game, if any
    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }
}
