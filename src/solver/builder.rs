//! Offline decision tree construction
//!
//! Starting from the full candidate set of one word length, each node guesses
//! the best remaining letter. Words containing the letter are split by the
//! exact mask they would reveal, one branch per distinct mask; words without
//! it form a single wrong-guess branch that costs one unit of the budget.
//!
//! Every branch works on its own clone of the candidate set. The wrong-guess
//! branch takes the parent set by value, so a parent's words are released as
//! soon as its last child has been spawned.

use super::candidates::CandidateSet;
use super::tree::{DecisionTree, Node, NodeId};
use crate::core::{LetterSet, MAX_WRONG_GUESSES, Mask};
use log::{debug, info};
use std::collections::BTreeSet;
use std::time::Instant;

/// Builds one `DecisionTree` per call to [`TreeBuilder::build`]
pub struct TreeBuilder {
    budget: u8,
    nodes: Vec<Node>,
    solved_branches: usize,
}

impl TreeBuilder {
    /// Builder using the full wrong-guess budget
    #[must_use]
    pub const fn new() -> Self {
        Self::with_budget(MAX_WRONG_GUESSES)
    }

    /// Builder that stops exploring after `budget` wrong guesses
    ///
    /// Budgets above [`MAX_WRONG_GUESSES`] are clamped.
    #[must_use]
    pub const fn with_budget(budget: u8) -> Self {
        let budget = if budget > MAX_WRONG_GUESSES {
            MAX_WRONG_GUESSES
        } else {
            budget
        };
        Self {
            budget,
            nodes: Vec::new(),
            solved_branches: 0,
        }
    }

    /// Compile a candidate set into a frozen tree
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::solver::{CandidateSet, TreeBuilder};
    ///
    /// let words = ["cat", "car", "can", "bat"].map(|w| Word::new(w).unwrap());
    /// let tree = TreeBuilder::new().build(CandidateSet::from_words(3, words));
    ///
    /// let root = tree.node(tree.root().unwrap());
    /// assert_eq!(root.guess(), b'a');
    /// ```
    #[must_use]
    pub fn build(mut self, set: CandidateSet) -> DecisionTree {
        let start = Instant::now();
        let length = set.length();
        let words: Box<[_]> = set.sorted_words().into_iter().cloned().collect();

        let root = self.grow(set, &Mask::blank(length), LetterSet::EMPTY, 0);

        info!(
            "built {length}-letter tree: {} words, {} nodes, {} solved branches in {:.2?}",
            words.len(),
            self.nodes.len(),
            self.solved_branches,
            start.elapsed()
        );
        DecisionTree::new(length, self.nodes, root, words)
    }

    fn grow(
        &mut self,
        set: CandidateSet,
        mask: &Mask,
        excluded: LetterSet,
        wrong: u8,
    ) -> Option<NodeId> {
        if set.is_empty() || wrong >= self.budget {
            return None;
        }
        let letter = set.best_guess(excluded)?;
        let excluded = excluded.with(letter);

        // Reserve the slot first so parents precede their children
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            guess: letter,
            correct: Box::new([]),
            wrong: None,
        });

        let outcomes: BTreeSet<Mask> = set
            .words()
            .filter(|word| word.has_letter(letter))
            .map(|word| mask.reveal(letter, word))
            .collect();

        let mut correct = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            if outcome.is_solved() {
                self.solved_branches += 1;
                continue;
            }
            let mut branch = set.clone();
            branch.eliminate_by_pattern(letter, &outcome);
            if let Some(child) = self.grow(branch, &outcome, excluded, wrong) {
                correct.push((outcome, child));
            }
        }

        let wrong_child = if wrong + 1 < self.budget {
            let mut rest = set;
            rest.eliminate_by_bad_letter(letter);
            self.grow(rest, mask, excluded, wrong + 1)
        } else {
            debug!("budget exhausted below '{}' at {mask}", letter as char);
            None
        };

        let node = &mut self.nodes[id.index()];
        node.correct = correct.into_boxed_slice();
        node.wrong = wrong_child;
        Some(id)
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
