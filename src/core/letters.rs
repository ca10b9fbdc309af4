//! Letter alphabet and compact letter sets
//!
//! Letters are lowercase ASCII bytes. A `LetterSet` packs membership of all 26
//! letters into one `u32`, so it is `Copy` and cheap to thread through recursion.

use std::fmt;

/// Number of letters in the playing alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Placeholder for unrevealed positions in a reveal mask
pub const BLANK: u8 = b'_';

/// Letter order used when no candidate word is left to rank letters with
///
/// Ordered by overall English letter frequency.
pub const FALLBACK_ORDER: &[u8; ALPHABET_SIZE] = b"etaoinshrdlcumwfgypbvkjxqz";

/// Check whether a byte is a playable letter
#[inline]
#[must_use]
pub const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// Alphabet index (0-25) of a letter
///
/// # Panics
/// Panics in debug mode if `letter` is not `b'a'..=b'z'`
#[inline]
#[must_use]
pub const fn index(letter: u8) -> usize {
    debug_assert!(is_letter(letter), "letter must be lowercase ASCII");
    (letter - b'a') as usize
}

/// Letter at an alphabet index (0-25)
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_SIZE);
    b'a' + index as u8
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build the set of distinct letters in a byte string
    ///
    /// Bytes that are not letters are ignored.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .filter(|&&b| is_letter(b))
            .fold(Self::EMPTY, |set, &b| set.with(b))
    }

    /// Return a copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | (1 << index(letter)))
    }

    /// Add a letter, returning `false` if it was already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let before = self.0;
        *self = self.with(letter);
        before != self.0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        is_letter(letter) && self.0 & (1 << index(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in both sets
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` but not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(letter_at)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// First letter of [`FALLBACK_ORDER`] not in `excluded`
///
/// Returns `None` only when every letter has been excluded.
#[must_use]
pub fn fallback_letter(excluded: LetterSet) -> Option<u8> {
    FALLBACK_ORDER
        .iter()
        .copied()
        .find(|&letter| !excluded.contains(letter))
}
