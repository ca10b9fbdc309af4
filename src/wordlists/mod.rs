//! Dictionaries grouped by word length
//!
//! The solver builds one tree per length, so words are normalised and split by
//! length once, before any tree is built.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::solver::CandidateSet;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Deduplicated words grouped by length, each group sorted alphabetically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    by_length: BTreeMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Normalise raw entries into a dictionary
    ///
    /// Entries are trimmed and lowercased. Blank lines, `#` comments and
    /// entries with non-letter characters are skipped, and duplicates are
    /// dropped.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(["Cat", "cat ", "", "dog", "it's", "ox"]);
    /// assert_eq!(dict.len(), 3);
    /// assert_eq!(dict.lengths().collect::<Vec<_>>(), [2, 3]);
    /// ```
    pub fn from_strs<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let words = entries.into_iter().filter_map(|entry| {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let word = Word::new(trimmed).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        });
        let dictionary = Self::from_words(words);

        if skipped > 0 {
            debug!("skipped {skipped} invalid dictionary entries");
        }
        dictionary
    }

    /// Group already-validated words, dropping duplicates
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut groups: BTreeMap<usize, BTreeSet<Word>> = BTreeMap::new();
        for word in words {
            groups.entry(word.len()).or_default().insert(word);
        }

        Self {
            by_length: groups
                .into_iter()
                .map(|(len, set)| (len, set.into_iter().collect()))
                .collect(),
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(WORDS)
    }

    /// Word lengths present, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length.keys().copied()
    }

    /// Words of one length; empty if the length is absent
    #[must_use]
    pub fn words(&self, length: usize) -> &[Word] {
        self.by_length
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every word, shortest lengths first
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.by_length.values().flatten()
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words(word.len()).binary_search(word).is_ok()
    }

    /// Fresh candidate set holding every word of `length`
    #[must_use]
    pub fn candidate_set(&self, length: usize) -> CandidateSet {
        CandidateSet::from_words(length, self.words(length).iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
        let dict = Dictionary::embedded();
        assert_eq!(dict.len(), WORDS_COUNT, "embedded list has duplicates");
    }

    #[test]
    fn groups_are_sorted_and_deduplicated() {
        let dict = Dictionary::from_strs(["bat", "Cat", "cat", "ant", "be"]);
        let texts: Vec<&str> = dict.words(3).iter().map(Word::text).collect();
        assert_eq!(texts, ["ant", "bat", "cat"]);
        assert_eq!(dict.words(2).len(), 1);
        assert!(dict.words(9).is_empty());
    }

    #[test]
    fn skips_comments_and_invalid_entries() {
        let dict = Dictionary::from_strs(["# header", "  ", "well-known", "café", "ok"]);
        assert_eq!(dict.len(), 1);
        assert!(dict.contains(&Word::new("ok").unwrap()));
    }

    #[test]
    fn candidate_set_matches_group() {
        let dict = Dictionary::from_strs(["cat", "car", "can", "bat", "apple"]);
        let set = dict.candidate_set(3);
        assert_eq!(set.length(), 3);
        assert_eq!(set.len(), 4);
        assert_eq!(dict.candidate_set(4).len(), 0);
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::from_strs(Vec::<String>::new());
        assert!(dict.is_empty());
        assert_eq!(dict.lengths().count(), 0);
        assert_eq!(dict.iter().count(), 0);
    }
}
