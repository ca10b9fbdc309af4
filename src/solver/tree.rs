//! Frozen decision trees
//!
//! Nodes live in one arena and refer to each other by index. A node names the
//! letter to guess, maps every reveal mask a correct guess can produce to the
//! next node, and has at most one child for an incorrect guess. The tree is
//! never mutated after the builder hands it over.

use crate::core::{Mask, Word};

/// Index of a node inside its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("decision tree exceeds u32::MAX nodes"))
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One guessing decision
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) guess: u8,
    /// Sorted by mask for binary search
    pub(crate) correct: Box<[(Mask, NodeId)]>,
    pub(crate) wrong: Option<NodeId>,
}

impl Node {
    /// Letter to guess at this node
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> u8 {
        self.guess
    }

    /// Child reached when the guess is correct and reveals `mask`
    #[must_use]
    pub fn child_for(&self, mask: &Mask) -> Option<NodeId> {
        self.correct
            .binary_search_by(|(key, _)| key.cmp(mask))
            .ok()
            .map(|i| self.correct[i].1)
    }

    /// Child reached when the guess is wrong
    #[inline]
    #[must_use]
    pub const fn wrong_child(&self) -> Option<NodeId> {
        self.wrong
    }

    /// Correct-guess branches in mask order
    pub fn correct_children(&self) -> impl Iterator<Item = (&Mask, NodeId)> {
        self.correct.iter().map(|(mask, id)| (mask, *id))
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.correct.is_empty() && self.wrong.is_none()
    }
}

/// Shape summary of a built tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub length: usize,
    pub words: usize,
    pub nodes: usize,
    pub leaves: usize,
    /// Longest chain of guesses from the root
    pub max_depth: usize,
    /// Most wrong-guess edges on any root path
    pub max_wrong_depth: usize,
}

/// Immutable decision tree for one word length
#[derive(Debug, Clone)]
pub struct DecisionTree {
    length: usize,
    nodes: Box<[Node]>,
    root: Option<NodeId>,
    /// The length's dictionary, kept for live fallback in sessions
    words: Box<[Word]>,
}

impl DecisionTree {
    pub(crate) fn new(
        length: usize,
        nodes: Vec<Node>,
        root: Option<NodeId>,
        words: Box<[Word]>,
    ) -> Self {
        Self {
            length,
            nodes: nodes.into_boxed_slice(),
            root,
            words,
        }
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Root node, absent when the dictionary had no words of this length
    #[inline]
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node
    ///
    /// # Panics
    /// Panics if `id` did not come from this tree
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dictionary words of this length, alphabetically
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Walk every node and summarise the tree's shape
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            length: self.length,
            words: self.words.len(),
            nodes: self.nodes.len(),
            ..TreeStats::default()
        };

        // (node, depth, wrong edges taken)
        let mut stack: Vec<(NodeId, usize, usize)> =
            self.root.map(|r| (r, 1, 0)).into_iter().collect();
        while let Some((id, depth, wrong)) = stack.pop() {
            let node = self.node(id);
            stats.max_depth = stats.max_depth.max(depth);
            stats.max_wrong_depth = stats.max_wrong_depth.max(wrong);
            if node.is_leaf() {
                stats.leaves += 1;
            }
            stack.extend(
                node.correct_children()
                    .map(|(_, child)| (child, depth + 1, wrong)),
            );
            if let Some(child) = node.wrong_child() {
                stack.push((child, depth + 1, wrong + 1));
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(s: &str) -> Mask {
        Mask::parse(s).unwrap()
    }

    /// root 'a' ── "_a_" → 'c', wrong → 'e'
    fn small_tree() -> DecisionTree {
        let nodes = vec![
            Node {
                guess: b'a',
                correct: vec![(mask("_a_"), NodeId::new(1))].into_boxed_slice(),
                wrong: Some(NodeId::new(2)),
            },
            Node {
                guess: b'c',
                correct: Box::new([]),
                wrong: None,
            },
            Node {
                guess: b'e',
                correct: Box::new([]),
                wrong: None,
            },
        ];
        DecisionTree::new(3, nodes, Some(NodeId::new(0)), Box::new([]))
    }

    #[test]
    fn child_lookup_by_mask() {
        let tree = small_tree();
        let root = tree.node(tree.root().unwrap());
        assert_eq!(root.guess(), b'a');
        assert_eq!(root.child_for(&mask("_a_")), Some(NodeId::new(1)));
        assert_eq!(root.child_for(&mask("a__")), None);
        assert_eq!(root.wrong_child(), Some(NodeId::new(2)));
        assert!(!root.is_leaf());
        assert!(tree.node(NodeId::new(1)).is_leaf());
    }

    #[test]
    fn stats_count_depths() {
        let stats = small_tree().stats();
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.leaves, 2);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.max_wrong_depth, 1);
    }

    #[test]
    fn empty_tree_has_no_root() {
        let tree = DecisionTree::new(9, Vec::new(), None, Box::new([]));
        assert!(tree.is_empty());
        assert_eq!(
            tree.stats(),
            TreeStats {
                length: 9,
                ..TreeStats::default()
            }
        );
    }
}
