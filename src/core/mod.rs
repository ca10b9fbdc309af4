//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no solver logic.
//! Letters, words, reveal masks and the game referee live here.

mod game;
pub mod letters;
mod mask;
mod word;

pub use game::{GuessOutcome, HangmanGame, MAX_WRONG_GUESSES};
pub use letters::{ALPHABET_SIZE, BLANK, LetterSet};
pub use mask::{Mask, MaskError};
pub use word::{Word, WordError};
