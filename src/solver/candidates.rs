//! Candidate word pools
//!
//! A `CandidateSet` holds the words of one length that are still consistent with
//! the game so far, together with a per-position letter frequency table. The
//! table is kept in lockstep with the words: every insertion adds a word's
//! contribution and every elimination subtracts it.

use crate::core::letters::{self, ALPHABET_SIZE};
use crate::core::{LetterSet, Mask, Word};
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for words that do not fit a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "Expected a {expected}-letter word, got {found} letters")
            }
        }
    }
}

impl std::error::Error for CandidateError {}

/// Pool of same-length words with aggregate letter statistics
#[derive(Debug, Clone)]
pub struct CandidateSet {
    length: usize,
    words: FxHashSet<Word>,
    /// `frequency[p][c]` = words with letter `c` at position `p`
    frequency: Vec<[u32; ALPHABET_SIZE]>,
}

impl CandidateSet {
    /// Create an empty set for words of `length` letters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            words: FxHashSet::default(),
            frequency: vec![[0; ALPHABET_SIZE]; length],
        }
    }

    /// Bulk-load a set, skipping words of the wrong length and duplicates
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::solver::CandidateSet;
    ///
    /// let words = ["cat", "car", "cat", "bird"].map(|w| Word::new(w).unwrap());
    /// let set = CandidateSet::from_words(3, words);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.frequency(0, b'c'), 2);
    /// ```
    pub fn from_words(length: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let mut set = Self::new(length);
        for word in words {
            // Wrong lengths are skipped
            let _ = set.insert(word);
        }
        set
    }

    /// Add a word, returning `Ok(false)` if it was already present
    ///
    /// # Errors
    /// Returns `CandidateError::LengthMismatch` if the word has the wrong length.
    pub fn insert(&mut self, word: Word) -> Result<bool, CandidateError> {
        if word.len() != self.length {
            return Err(CandidateError::LengthMismatch {
                expected: self.length,
                found: word.len(),
            });
        }

        if self.words.contains(&word) {
            return Ok(false);
        }

        for (counts, &letter) in self.frequency.iter_mut().zip(word.bytes()) {
            counts[letters::index(letter)] += 1;
        }
        self.words.insert(word);
        Ok(true)
    }

    /// Word length of every member
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Iterate the remaining words (unspecified order)
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Remaining words in alphabetical order
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }

    /// Number of remaining words with `letter` at `position`
    ///
    /// # Panics
    /// Panics if `position >= length()`
    #[must_use]
    pub fn frequency(&self, position: usize, letter: u8) -> u32 {
        self.frequency[position][letters::index(letter)]
    }

    /// Occurrences of `letter` summed over every position
    #[must_use]
    pub fn letter_score(&self, letter: u8) -> u32 {
        let i = letters::index(letter);
        self.frequency.iter().map(|counts| counts[i]).sum()
    }

    /// Remove every word containing `letter` anywhere
    ///
    /// Returns the number of words removed.
    pub fn eliminate_by_bad_letter(&mut self, letter: u8) -> usize {
        let before = self.words.len();
        let frequency = &mut self.frequency;
        self.words.retain(|word| {
            if word.has_letter(letter) {
                subtract(frequency, word);
                false
            } else {
                true
            }
        });
        before - self.words.len()
    }

    /// Remove every word that disagrees with `mask` about `letter`
    ///
    /// A kept word has `letter` at exactly the positions where the mask shows
    /// it. Other revealed letters are not rechecked: earlier eliminations
    /// already enforced them. Returns the number of words removed.
    pub fn eliminate_by_pattern(&mut self, letter: u8, mask: &Mask) -> usize {
        debug_assert_eq!(mask.len(), self.length);
        let before = self.words.len();
        let frequency = &mut self.frequency;
        self.words.retain(|word| {
            if mask.matches_letter(letter, word) {
                true
            } else {
                subtract(frequency, word);
                false
            }
        });
        before - self.words.len()
    }

    /// Pick the most frequent letter not in `excluded`
    ///
    /// Scores sum the frequency table over all positions. Revealed positions
    /// only ever hold excluded letters, so this equals the score over the
    /// unrevealed positions. Ties go to the alphabetically first letter.
    /// Returns `None` when no remaining word has a non-excluded letter,
    /// which includes the empty set.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{LetterSet, Word};
    /// use hangman_solver::solver::CandidateSet;
    ///
    /// let words = ["cat", "car", "can", "bat"].map(|w| Word::new(w).unwrap());
    /// let set = CandidateSet::from_words(3, words);
    /// assert_eq!(set.best_guess(LetterSet::EMPTY), Some(b'a'));
    /// assert_eq!(set.best_guess(LetterSet::EMPTY.with(b'a')), Some(b'c'));
    /// ```
    #[must_use]
    pub fn best_guess(&self, excluded: LetterSet) -> Option<u8> {
        let mut totals = [0u32; ALPHABET_SIZE];
        for counts in &self.frequency {
            for (total, &count) in totals.iter_mut().zip(counts) {
                *total += count;
            }
        }

        let mut best: Option<(u8, u32)> = None;
        for (i, &score) in totals.iter().enumerate() {
            let letter = letters::letter_at(i);
            if score == 0 || excluded.contains(letter) {
                continue;
            }
            // Strict comparison keeps the earliest letter on ties
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((letter, score));
            }
        }

        best.map(|(letter, _)| letter)
    }
}

/// Remove one word's contribution from a frequency table
fn subtract(frequency: &mut [[u32; ALPHABET_SIZE]], word: &Word) {
    for (counts, &letter) in frequency.iter_mut().zip(word.bytes()) {
        counts[letters::index(letter)] -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn set(list: &[&str]) -> CandidateSet {
        let length = list.first().map_or(0, |w| w.len());
        CandidateSet::from_words(length, words(list))
    }

    fn scenario() -> CandidateSet {
        set(&["cat", "car", "can", "bat"])
    }

    /// Recount the frequency table from scratch and compare
    fn assert_consistent(set: &CandidateSet) {
        let mut expected = vec![[0u32; ALPHABET_SIZE]; set.length()];
        for word in set.words() {
            for (p, &letter) in word.bytes().iter().enumerate() {
                expected[p][letters::index(letter)] += 1;
            }
        }
        assert_eq!(set.frequency, expected);
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.sorted_words().into_iter().map(Word::text).collect()
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut set = CandidateSet::new(3);
        assert_eq!(set.insert(Word::new("cat").unwrap()), Ok(true));
        assert_eq!(set.insert(Word::new("cat").unwrap()), Ok(false));
        assert_eq!(set.len(), 1);
        assert_eq!(set.frequency(0, b'c'), 1);
        assert_consistent(&set);
    }

    #[test]
    fn insert_rejects_wrong_length() {
        let mut set = CandidateSet::new(3);
        assert_eq!(
            set.insert(Word::new("cats").unwrap()),
            Err(CandidateError::LengthMismatch {
                expected: 3,
                found: 4
            })
        );
        assert!(set.is_empty());
    }

    #[test]
    fn initial_best_guess_is_most_frequent_letter() {
        let set = scenario();
        assert_eq!(set.letter_score(b'a'), 4);
        assert_eq!(set.letter_score(b'c'), 3);
        assert_eq!(set.letter_score(b't'), 2);
        assert_eq!(set.best_guess(LetterSet::EMPTY), Some(b'a'));
    }

    #[test]
    fn best_guess_after_correct_a() {
        let mut set = scenario();
        let mask = Mask::parse("_a_").unwrap();
        assert_eq!(set.eliminate_by_pattern(b'a', &mask), 0);

        let excluded = LetterSet::EMPTY.with(b'a');
        assert_eq!(set.best_guess(excluded), Some(b'c'));
        for letter in *b"bnr" {
            assert_eq!(set.letter_score(letter), 1);
        }
        assert_eq!(set.letter_score(b't'), 2);
    }

    #[test]
    fn pattern_split_on_c() {
        let mut hit = scenario();
        let mask = Mask::parse("ca_").unwrap();
        assert_eq!(hit.eliminate_by_pattern(b'c', &mask), 1);
        assert_eq!(texts(&hit), vec!["can", "car", "cat"]);
        assert_consistent(&hit);

        let mut miss = scenario();
        assert_eq!(miss.eliminate_by_bad_letter(b'c'), 3);
        assert_eq!(texts(&miss), vec!["bat"]);
        assert_consistent(&miss);
    }

    #[test]
    fn bad_letter_absent_everywhere_is_noop() {
        let mut set = scenario();
        let before = set.frequency.clone();
        assert_eq!(set.eliminate_by_bad_letter(b'z'), 0);
        assert_eq!(set.len(), 4);
        assert_eq!(set.frequency, before);
    }

    #[test]
    fn bad_letter_leaves_no_word_containing_it() {
        let mut set = set(&["tree", "tent", "lime", "bark", "moon"]);
        set.eliminate_by_bad_letter(b'e');
        assert!(set.words().all(|w| !w.has_letter(b'e')));
        assert_eq!(texts(&set), vec!["bark", "moon"]);
        assert_eq!(set.letter_score(b'e'), 0);
        assert_consistent(&set);
    }

    #[test]
    fn pattern_removes_extra_occurrences() {
        let mut set = set(&["tree", "teem", "tent", "mute", "shed"]);
        let mask = Mask::parse("__e_").unwrap();
        assert_eq!(set.eliminate_by_pattern(b'e', &mask), 4);
        // "tree" also has an 'e' at a blank position
        assert_eq!(texts(&set), vec!["shed"]);
        assert_consistent(&set);
    }

    #[test]
    fn pattern_elimination_is_idempotent() {
        let mut once = set(&["tree", "teem", "tent", "mute", "lens", "herb"]);
        let mask = Mask::parse("_e__").unwrap();
        once.eliminate_by_pattern(b'e', &mask);

        let mut twice = once.clone();
        assert_eq!(twice.eliminate_by_pattern(b'e', &mask), 0);
        assert_eq!(texts(&once), texts(&twice));
        assert_eq!(once.frequency, twice.frequency);
        assert_eq!(texts(&once), vec!["herb", "lens", "tent"]);
    }

    #[test]
    fn clone_is_independent() {
        let original = scenario();
        let snapshot = original.frequency.clone();

        let mut copy = original.clone();
        copy.eliminate_by_bad_letter(b'c');
        copy.eliminate_by_pattern(b'a', &Mask::parse("_a_").unwrap());

        assert_eq!(original.len(), 4);
        assert_eq!(original.frequency, snapshot);
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn frequency_tracks_mixed_operations() {
        let mut set = set(&[
            "apple", "ample", "angle", "ankle", "eagle", "eagre", "table", "cable",
        ]);
        assert_consistent(&set);
        set.eliminate_by_bad_letter(b'n');
        assert_consistent(&set);
        set.eliminate_by_pattern(b'l', &Mask::parse("___l_").unwrap());
        assert_consistent(&set);
        set.insert(Word::new("fable").unwrap()).unwrap();
        assert_consistent(&set);
        set.eliminate_by_pattern(b'a', &Mask::parse("_a_l_").unwrap());
        assert_consistent(&set);
        assert_eq!(texts(&set), vec!["cable", "eagle", "fable", "table"]);
    }

    #[test]
    fn best_guess_tie_breaks_alphabetically() {
        let set = set(&["ab", "cd"]);
        assert_eq!(set.best_guess(LetterSet::EMPTY), Some(b'a'));
        assert_eq!(set.best_guess(LetterSet::from_bytes(b"a")), Some(b'b'));
        assert_eq!(set.best_guess(LetterSet::from_bytes(b"ab")), Some(b'c'));
    }

    #[test]
    fn best_guess_empty_set_is_none() {
        let set = CandidateSet::new(5);
        assert_eq!(set.best_guess(LetterSet::EMPTY), None);
    }

    #[test]
    fn best_guess_none_when_all_letters_excluded() {
        let set = set(&["cat"]);
        assert_eq!(set.best_guess(LetterSet::from_bytes(b"cat")), None);
    }
}
