//! Reveal masks
//!
//! A mask is the partially revealed secret word: confirmed positions show their
//! letter and all other positions show [`BLANK`]. Masks key the correct-guess
//! branches of a decision tree, so they order and hash by their bytes.

use super::Word;
use super::letters::{BLANK, LetterSet, is_letter};
use std::fmt;
use std::str::FromStr;

/// A reveal mask such as `_a_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mask(Box<[u8]>);

/// Error type for unparseable masks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must cover at least one position"),
            Self::InvalidCharacter(c) => {
                write!(f, "Pattern contains invalid character {c:?}")
            }
        }
    }
}

impl std::error::Error for MaskError {}

impl Mask {
    /// A fully unrevealed mask of `len` positions
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(vec![BLANK; len].into_boxed_slice())
    }

    /// Parse a mask from a string
    ///
    /// Accepts `_` or a space for unrevealed positions and letters (any case)
    /// for revealed ones. Spaces are normalised to `_`.
    ///
    /// # Errors
    /// Returns `MaskError` for an empty string or any other character.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Mask;
    ///
    /// let mask = Mask::parse(" A_").unwrap();
    /// assert_eq!(mask.to_string(), "_a_");
    /// assert!(!mask.is_solved());
    /// assert!(Mask::parse("a-b").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MaskError> {
        if s.is_empty() {
            return Err(MaskError::Empty);
        }

        s.chars()
            .map(|c| match c {
                '_' | ' ' => Ok(BLANK),
                c if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase() as u8),
                c => Err(MaskError::InvalidCharacter(c)),
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(|bytes| Self(bytes.into_boxed_slice()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when no position is still blank
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.contains(&BLANK)
    }

    /// Number of unrevealed positions
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.0.iter().filter(|&&b| b == BLANK).count()
    }

    /// Check whether `letter` is shown anywhere in the mask
    #[must_use]
    pub fn reveals(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Letters shown in the mask
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        LetterSet::from_bytes(&self.0)
    }

    /// Overlay every position where `word` has `letter` onto this mask
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Mask, Word};
    ///
    /// let word = Word::new("banana").unwrap();
    /// let mask = Mask::blank(6).reveal(b'a', &word);
    /// assert_eq!(mask.to_string(), "_a_a_a");
    /// ```
    #[must_use]
    pub fn reveal(&self, letter: u8, word: &Word) -> Self {
        debug_assert_eq!(self.len(), word.len());
        let bytes = self
            .0
            .iter()
            .zip(word.bytes())
            .map(|(&shown, &actual)| if actual == letter { letter } else { shown })
            .collect();
        Self(bytes)
    }

    /// Check that `word` has `letter` exactly where this mask shows it
    ///
    /// Only `letter` is inspected; other revealed letters are ignored.
    #[must_use]
    pub fn matches_letter(&self, letter: u8, word: &Word) -> bool {
        self.len() == word.len()
            && self
                .0
                .iter()
                .zip(word.bytes())
                .all(|(&shown, &actual)| (shown == letter) == (actual == letter))
    }

    /// Full consistency check of `word` against this mask and the guesses so far
    ///
    /// Revealed positions must match, and no blank position may hold a letter
    /// that was already guessed (it would have been revealed, or it was a miss).
    #[must_use]
    pub fn admits(&self, word: &Word, guessed: LetterSet) -> bool {
        self.len() == word.len()
            && self.0.iter().zip(word.bytes()).all(|(&shown, &actual)| {
                if shown == BLANK {
                    !guessed.contains(actual)
                } else {
                    shown == actual
                }
            })
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            let shown = if is_letter(b) { b as char } else { '_' };
            write!(f, "{shown}")?;
        }
        Ok(())
    }
}
