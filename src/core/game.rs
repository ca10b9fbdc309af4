//! Hangman game referee
//!
//! Knows the secret word and answers letter guesses with the updated mask.

use super::letters::LetterSet;
use super::{Mask, Word};

/// Wrong guesses allowed before a game is lost
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Result of guessing one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word; the mask now shows it
    Hit,
    /// The letter is not in the word; one wrong guess used
    Miss,
    /// The letter was already guessed; nothing changes
    Repeated,
}

/// A single hangman game against a known secret
#[derive(Debug, Clone)]
pub struct HangmanGame {
    secret: Word,
    mask: Mask,
    guessed: LetterSet,
    wrong: u8,
}

impl HangmanGame {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let mask = Mask::blank(secret.len());
        Self {
            secret,
            mask,
            guessed: LetterSet::EMPTY,
            wrong: 0,
        }
    }

    /// Guess a letter
    ///
    /// Guesses after the game is over are treated as repeats.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{GuessOutcome, HangmanGame, Word};
    ///
    /// let mut game = HangmanGame::new(Word::new("cat").unwrap());
    /// assert_eq!(game.guess(b'a'), GuessOutcome::Hit);
    /// assert_eq!(game.mask().to_string(), "_a_");
    /// assert_eq!(game.guess(b'z'), GuessOutcome::Miss);
    /// assert_eq!(game.wrong_guesses(), 1);
    /// ```
    pub fn guess(&mut self, letter: u8) -> GuessOutcome {
        if self.is_over() || !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        if self.secret.has_letter(letter) {
            self.mask = self.mask.reveal(letter, &self.secret);
            GuessOutcome::Hit
        } else {
            self.wrong += 1;
            GuessOutcome::Miss
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.wrong
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.mask.is_solved()
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.wrong >= MAX_WRONG_GUESSES
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(secret: &str) -> HangmanGame {
        HangmanGame::new(Word::new(secret).unwrap())
    }

    #[test]
    fn hits_reveal_every_position() {
        let mut game = game("banana");
        assert_eq!(game.guess(b'a'), GuessOutcome::Hit);
        assert_eq!(game.mask().to_string(), "_a_a_a");
        assert_eq!(game.guess(b'n'), GuessOutcome::Hit);
        assert_eq!(game.guess(b'b'), GuessOutcome::Hit);
        assert!(game.is_won());
        assert_eq!(game.wrong_guesses(), 0);
    }

    #[test]
    fn repeated_guesses_are_free() {
        let mut game = game("cat");
        assert_eq!(game.guess(b'z'), GuessOutcome::Miss);
        assert_eq!(game.guess(b'z'), GuessOutcome::Repeated);
        assert_eq!(game.guess(b'a'), GuessOutcome::Hit);
        assert_eq!(game.guess(b'a'), GuessOutcome::Repeated);
        assert_eq!(game.wrong_guesses(), 1);
    }

    #[test]
    fn sixth_miss_loses() {
        let mut game = game("cat");
        for letter in *b"bdefg" {
            assert_eq!(game.guess(letter), GuessOutcome::Miss);
        }
        assert!(!game.is_over());
        assert_eq!(game.guess(b'h'), GuessOutcome::Miss);
        assert!(game.is_lost());
        assert!(!game.is_won());
        // no further guesses count once lost
        assert_eq!(game.guess(b'c'), GuessOutcome::Repeated);
        assert_eq!(game.mask().to_string(), "___");
    }
}
