//! Word solving command
//!
//! Plays one secret word against the solver and records every turn.

use crate::core::{HangmanGame, Word};
use crate::solver::{GameError, HangmanSolver, Turn, play};
use anyhow::{Context, Result};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub turns: Vec<Turn>,
    pub success: bool,
    pub wrong_guesses: u8,
    /// Whether the target is in the dictionary the trees were built from
    pub in_dictionary: bool,
    /// Whether the session fell back to live filtering
    pub left_tree: bool,
}

/// Play `target` with a fresh session from `solver`
///
/// # Errors
///
/// Returns an error if the session rejects the referee's feedback, which
/// indicates a bug rather than a hard word.
pub fn play_word(solver: &HangmanSolver, target: &Word) -> Result<SolveResult, GameError> {
    let mut session = solver.new_session(target.len());
    let mut game = HangmanGame::new(target.clone());
    let turns = play(&mut session, &mut game)?;

    Ok(SolveResult {
        target: target.clone(),
        turns,
        success: game.is_won(),
        wrong_guesses: game.wrong_guesses(),
        in_dictionary: solver
            .tree(target.len())
            .is_some_and(|tree| tree.words().binary_search(target).is_ok()),
        left_tree: session.left_tree(),
    })
}

/// Solve a specific word given as text
///
/// # Errors
///
/// Returns an error if:
/// - The target word is empty or contains non-letters
/// - The session rejects the game's feedback
pub fn solve_word(solver: &HangmanSolver, target: &str) -> Result<SolveResult> {
    let word = Word::new(target).with_context(|| format!("Invalid target word {target:?}"))?;
    let result = play_word(solver, &word)?;
    Ok(result)
}
