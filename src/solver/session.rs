//! Runtime game sessions
//!
//! A session walks a frozen tree one node per guess. When the live word leaves
//! the tree (a reveal or a miss the builder never saw) it switches to filtering
//! a residual candidate set directly, and when even that runs dry it guesses
//! letters in a fixed order. Neither case is reported as an error.

use super::candidates::CandidateSet;
use super::error::GameError;
use super::tree::{DecisionTree, NodeId};
use crate::core::letters::fallback_letter;
use crate::core::{HangmanGame, LetterSet, MAX_WRONG_GUESSES, Mask};
use log::{debug, warn};
use std::sync::Arc;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone)]
enum Cursor {
    /// Following the precomputed tree
    Tree(NodeId),
    /// Filtering candidates live after leaving the tree
    Live(CandidateSet),
    Finished(Outcome),
}

/// One guess and its result, as recorded by [`play`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub letter: u8,
    pub hit: bool,
    pub mask: Mask,
}

/// Cursor over a shared decision tree for one secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    tree: Arc<DecisionTree>,
    cursor: Cursor,
    mask: Mask,
    guessed: LetterSet,
    wrong: u8,
    pending: Option<u8>,
    left_tree: bool,
}

impl GameSession {
    /// Start a game at the root of `tree`
    #[must_use]
    pub fn start(tree: Arc<DecisionTree>) -> Self {
        let length = tree.length();
        let cursor = match tree.root() {
            Some(root) => Cursor::Tree(root),
            None => Cursor::Live(CandidateSet::new(length)),
        };
        Self {
            tree,
            cursor,
            mask: Mask::blank(length),
            guessed: LetterSet::EMPTY,
            wrong: 0,
            pending: None,
            left_tree: false,
        }
    }

    /// Start a game for a length no dictionary word has
    ///
    /// Every guess comes from the fallback letter order.
    #[must_use]
    pub fn untracked(length: usize) -> Self {
        Self::start(Arc::new(DecisionTree::new(
            length,
            Vec::new(),
            None,
            Box::new([]),
        )))
    }

    /// Next letter to guess
    ///
    /// # Errors
    /// - `FeedbackPending` if the previous guess has not received feedback
    /// - `GameOver` once the game is won or lost
    /// - `AlphabetExhausted` if every letter was already guessed
    pub fn guess(&mut self) -> Result<u8, GameError> {
        if self.pending.is_some() {
            return Err(GameError::FeedbackPending);
        }

        let letter = match &self.cursor {
            Cursor::Finished(_) => return Err(GameError::GameOver),
            Cursor::Tree(id) => self.tree.node(*id).guess(),
            Cursor::Live(set) => match set.best_guess(self.guessed) {
                Some(letter) => letter,
                None => {
                    debug!("no candidates left at {}; using letter order", self.mask);
                    fallback_letter(self.guessed).ok_or(GameError::AlphabetExhausted)?
                }
            },
        };

        self.guessed.insert(letter);
        self.pending = Some(letter);
        Ok(letter)
    }

    /// Report whether the last guess was correct and the resulting pattern
    ///
    /// # Errors
    /// - `BudgetExceeded` for a wrong guess after the game was already lost
    /// - `GameOver` for any other feedback after the game ended
    /// - `InvalidPattern` or `LengthMismatch` for a malformed pattern
    /// - `NoPendingGuess` if `guess` was not called first
    /// - `InconsistentFeedback` if a correct guess is missing from the pattern
    pub fn feedback(&mut self, correct: bool, pattern: &str) -> Result<(), GameError> {
        if let Cursor::Finished(outcome) = &self.cursor {
            return Err(if !correct && *outcome == Outcome::Lost {
                GameError::BudgetExceeded
            } else {
                GameError::GameOver
            });
        }

        let mask = Mask::parse(pattern)?;
        if mask.len() != self.length() {
            return Err(GameError::LengthMismatch {
                expected: self.length(),
                found: mask.len(),
            });
        }

        let letter = self.pending.ok_or(GameError::NoPendingGuess)?;
        if correct && !mask.reveals(letter) {
            return Err(GameError::InconsistentFeedback {
                letter: letter as char,
                pattern: mask.to_string(),
            });
        }
        self.pending = None;

        if correct {
            self.advance_hit(letter, mask);
        } else {
            self.advance_miss(letter);
        }
        Ok(())
    }

    fn advance_hit(&mut self, letter: u8, mask: Mask) {
        self.mask = mask;
        if self.mask.is_solved() {
            self.cursor = Cursor::Finished(Outcome::Won);
            return;
        }

        let left_tree = match &mut self.cursor {
            Cursor::Tree(id) => match self.tree.node(*id).child_for(&self.mask) {
                Some(child) => {
                    *id = child;
                    false
                }
                None => true,
            },
            Cursor::Live(set) => {
                set.eliminate_by_pattern(letter, &self.mask);
                false
            }
            Cursor::Finished(_) => false,
        };

        if left_tree {
            warn!(
                "reveal {} after '{}' was never explored; filtering live",
                self.mask, letter as char
            );
            self.go_live();
        }
    }

    fn advance_miss(&mut self, letter: u8) {
        self.wrong += 1;
        if self.wrong >= MAX_WRONG_GUESSES {
            self.cursor = Cursor::Finished(Outcome::Lost);
            return;
        }

        let left_tree = match &mut self.cursor {
            Cursor::Tree(id) => match self.tree.node(*id).wrong_child() {
                Some(child) => {
                    *id = child;
                    false
                }
                None => true,
            },
            Cursor::Live(set) => {
                set.eliminate_by_bad_letter(letter);
                false
            }
            Cursor::Finished(_) => false,
        };

        if left_tree {
            warn!(
                "miss on '{}' at {} was never explored; filtering live",
                letter as char, self.mask
            );
            self.go_live();
        }
    }

    /// Switch to live filtering over the words still consistent with the game
    fn go_live(&mut self) {
        let residual = CandidateSet::from_words(
            self.length(),
            self.tree
                .words()
                .iter()
                .filter(|word| self.mask.admits(word, self.guessed))
                .cloned(),
        );
        debug!("{} residual candidates for {}", residual.len(), self.mask);
        self.cursor = Cursor::Live(residual);
        self.left_tree = true;
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.mask.len()
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.wrong
    }

    /// Result of the game, once it has ended
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.cursor {
            Cursor::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// True once the session has left the tree
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.cursor, Cursor::Live(_))
    }

    /// True if the game ever fell back from the tree to live filtering
    #[must_use]
    pub const fn left_tree(&self) -> bool {
        self.left_tree
    }

    /// Candidates still tracked in live mode
    #[must_use]
    pub fn live_candidates(&self) -> Option<usize> {
        match &self.cursor {
            Cursor::Live(set) => Some(set.len()),
            _ => None,
        }
    }
}

/// Play a session against a referee until the game ends
///
/// # Errors
/// Propagates any protocol error from the session.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use hangman_solver::core::{HangmanGame, Word};
/// use hangman_solver::solver::{CandidateSet, GameSession, Outcome, TreeBuilder, play};
///
/// let words = ["cat", "car", "can", "bat"].map(|w| Word::new(w).unwrap());
/// let tree = Arc::new(TreeBuilder::new().build(CandidateSet::from_words(3, words)));
///
/// let mut session = GameSession::start(tree);
/// let mut game = HangmanGame::new(Word::new("bat").unwrap());
/// let turns = play(&mut session, &mut game).unwrap();
///
/// assert_eq!(session.outcome(), Some(Outcome::Won));
/// assert_eq!(turns.first().map(|t| t.letter), Some(b'a'));
/// ```
pub fn play(session: &mut GameSession, game: &mut HangmanGame) -> Result<Vec<Turn>, GameError> {
    let mut turns = Vec::new();
    while !game.is_over() {
        let letter = session.guess()?;
        game.guess(letter);
        let hit = game.secret().has_letter(letter);
        session.feedback(hit, &game.mask().to_string())?;
        turns.push(Turn {
            letter,
            hit,
            mask: game.mask().clone(),
        });
    }
    Ok(turns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::TreeBuilder;

    fn tree_for(list: &[&str], budget: u8) -> Arc<DecisionTree> {
        let words = list.iter().map(|w| Word::new(*w).unwrap());
        let set = CandidateSet::from_words(list[0].len(), words);
        Arc::new(TreeBuilder::with_budget(budget).build(set))
    }

    fn game(secret: &str) -> HangmanGame {
        HangmanGame::new(Word::new(secret).unwrap())
    }

    #[test]
    fn dictionary_words_stay_on_the_tree() {
        let list = ["cat", "car", "can", "bat"];
        let tree = tree_for(&list, MAX_WRONG_GUESSES);
        for secret in list {
            let mut session = GameSession::start(Arc::clone(&tree));
            let mut game = game(secret);
            play(&mut session, &mut game).unwrap();
            assert!(game.is_won(), "{secret}");
            assert_eq!(session.outcome(), Some(Outcome::Won));
            assert!(!session.left_tree());
        }
    }

    #[test]
    fn scenario_sequence_for_cat() {
        let tree = tree_for(&["cat", "car", "can", "bat"], MAX_WRONG_GUESSES);
        let mut session = GameSession::start(tree);

        assert_eq!(session.guess(), Ok(b'a'));
        session.feedback(true, "_a_").unwrap();
        assert_eq!(session.guess(), Ok(b'c'));
        session.feedback(true, "ca_").unwrap();
        assert_eq!(session.guess(), Ok(b'n'));
        session.feedback(false, "ca_").unwrap();
        assert_eq!(session.wrong_guesses(), 1);
        assert_eq!(session.guess(), Ok(b'r'));
        session.feedback(false, "ca_").unwrap();
        assert_eq!(session.guess(), Ok(b't'));
        session.feedback(true, "cat").unwrap();

        assert_eq!(session.outcome(), Some(Outcome::Won));
        assert_eq!(session.wrong_guesses(), 2);
    }

    #[test]
    fn unknown_reveal_switches_to_live() {
        let tree = tree_for(&["cat", "car"], MAX_WRONG_GUESSES);
        let mut session = GameSession::start(tree);

        assert_eq!(session.guess(), Ok(b'a'));
        // no dictionary word reveals two a's
        session.feedback(true, "aa_").unwrap();
        assert!(session.is_live());
        assert_eq!(session.live_candidates(), Some(0));

        // empty residual: fallback order skips the already guessed 'a'
        assert_eq!(session.guess(), Ok(b'e'));
    }

    #[test]
    fn unexplored_miss_switches_to_live() {
        // budget 1 leaves the root without a wrong branch
        let tree = tree_for(&["cat", "dog"], 1);
        let mut session = GameSession::start(tree);
        let mut game = game("dog");

        play(&mut session, &mut game).unwrap();
        assert!(game.is_won());
        assert_eq!(session.outcome(), Some(Outcome::Won));
        assert!(session.left_tree());
        assert_eq!(session.wrong_guesses(), 1);
    }

    #[test]
    fn live_mode_filters_residual() {
        let tree = tree_for(&["cat", "dog", "dig"], 1);
        let mut session = GameSession::start(tree);

        // 'd' and 'g' both score 2; ties go to the earlier letter
        let first = session.guess().unwrap();
        assert_eq!(first, b'd');
        session.feedback(false, "___").unwrap();
        assert!(session.is_live());
        assert_eq!(session.live_candidates(), Some(1));
        assert_eq!(session.guess(), Ok(b'a'));
    }

    #[test]
    fn secret_outside_dictionary_counts_each_miss_once() {
        let tree = tree_for(&["cat", "car", "can", "bat"], MAX_WRONG_GUESSES);
        let mut session = GameSession::start(tree);

        assert_eq!(session.guess(), Ok(b'a'));
        session.feedback(false, "___").unwrap();
        assert_eq!(session.wrong_guesses(), 1);
        assert!(session.is_live());

        let next = session.guess().unwrap();
        assert_eq!(next, b'e');
        session.feedback(false, "___").unwrap();
        assert_eq!(session.wrong_guesses(), 2);
    }

    #[test]
    fn untracked_length_uses_letter_order() {
        let mut session = GameSession::untracked(4);
        let mut game = game("zzzz");
        let turns = play(&mut session, &mut game).unwrap();

        let letters: Vec<u8> = turns.iter().map(|t| t.letter).collect();
        assert_eq!(letters, b"etaoin");
        assert_eq!(session.outcome(), Some(Outcome::Lost));
        assert!(game.is_lost());
    }

    #[test]
    fn feedback_after_loss_is_budget_exceeded() {
        let mut session = GameSession::untracked(3);
        for _ in 0..MAX_WRONG_GUESSES {
            session.guess().unwrap();
            session.feedback(false, "___").unwrap();
        }
        assert_eq!(session.outcome(), Some(Outcome::Lost));
        assert_eq!(session.guess(), Err(GameError::GameOver));
        assert_eq!(
            session.feedback(false, "___"),
            Err(GameError::BudgetExceeded)
        );
    }

    #[test]
    fn feedback_after_win_is_game_over() {
        let tree = tree_for(&["ab"], MAX_WRONG_GUESSES);
        let mut session = GameSession::start(tree);
        assert_eq!(session.guess(), Ok(b'a'));
        session.feedback(true, "a_").unwrap();
        assert_eq!(session.guess(), Ok(b'b'));
        session.feedback(true, "ab").unwrap();

        assert_eq!(session.guess(), Err(GameError::GameOver));
        assert_eq!(session.feedback(true, "ab"), Err(GameError::GameOver));
    }

    #[test]
    fn protocol_violations() {
        let tree = tree_for(&["cat", "car"], MAX_WRONG_GUESSES);
        let mut session = GameSession::start(tree);

        assert_eq!(
            session.feedback(true, "_a_"),
            Err(GameError::NoPendingGuess)
        );

        assert_eq!(session.guess(), Ok(b'a'));
        assert_eq!(session.guess(), Err(GameError::FeedbackPending));
        assert_eq!(
            session.feedback(true, "_a__"),
            Err(GameError::LengthMismatch {
                expected: 3,
                found: 4
            })
        );
        assert!(matches!(
            session.feedback(true, "_a?"),
            Err(GameError::InvalidPattern(_))
        ));
        assert_eq!(
            session.feedback(true, "___"),
            Err(GameError::InconsistentFeedback {
                letter: 'a',
                pattern: "___".to_string()
            })
        );

        // the guess is still pending after rejected feedback
        session.feedback(true, " a ").unwrap();
        assert_eq!(session.mask().to_string(), "_a_");
    }

    #[test]
    fn sessions_share_one_tree() {
        let tree = tree_for(&["cat", "car", "can", "bat"], MAX_WRONG_GUESSES);
        let handles: Vec<_> = ["cat", "car", "can", "bat"]
            .into_iter()
            .map(|secret| {
                let tree = Arc::clone(&tree);
                std::thread::spawn(move || {
                    let mut session = GameSession::start(tree);
                    let mut game = game(secret);
                    play(&mut session, &mut game).unwrap();
                    game.is_won()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
