//! Protocol errors surfaced to the game loop
//!
//! Only caller mistakes are reported. Gaps in dictionary coverage are absorbed
//! by the session's live fallback and never show up here.

use crate::core::MaskError;
use std::fmt;

/// Error type for invalid `guess`/`feedback` sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The revealed pattern could not be parsed
    InvalidPattern(MaskError),
    /// The revealed pattern has a different length than the active word
    LengthMismatch { expected: usize, found: usize },
    /// `guess` without `is_new_word` or `feedback` before any game started
    NoActiveGame,
    /// `feedback` without a preceding `guess`
    NoPendingGuess,
    /// `guess` called twice without `feedback` in between
    FeedbackPending,
    /// Correct-guess feedback whose pattern does not show the guessed letter
    InconsistentFeedback { letter: char, pattern: String },
    /// Wrong-guess feedback after the wrong-guess budget was already spent
    BudgetExceeded,
    /// The word is already solved
    GameOver,
    /// Every letter has been guessed
    AlphabetExhausted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(e) => write!(f, "Invalid pattern: {e}"),
            Self::LengthMismatch { expected, found } => write!(
                f,
                "Pattern has {found} positions but the active word has {expected}"
            ),
            Self::NoActiveGame => write!(f, "No game in progress; start one with a new word"),
            Self::NoPendingGuess => write!(f, "Feedback given without a preceding guess"),
            Self::FeedbackPending => write!(f, "Previous guess is still awaiting feedback"),
            Self::InconsistentFeedback { letter, pattern } => write!(
                f,
                "Guess '{letter}' reported correct but pattern {pattern:?} does not show it"
            ),
            Self::BudgetExceeded => write!(f, "Wrong-guess budget already exhausted"),
            Self::GameOver => write!(f, "The word is already solved"),
            Self::AlphabetExhausted => write!(f, "Every letter has already been guessed"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MaskError> for GameError {
    fn from(e: MaskError) -> Self {
        Self::InvalidPattern(e)
    }
}
