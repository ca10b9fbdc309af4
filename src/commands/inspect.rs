//! Tree inspection command

use crate::solver::{HangmanSolver, TreeStats};

/// Shape of every tree, or of the tree for one length
#[must_use]
pub fn tree_stats(solver: &HangmanSolver, length: Option<usize>) -> Vec<TreeStats> {
    solver
        .trees()
        .filter(|(len, _)| length.is_none_or(|wanted| *len == wanted))
        .map(|(_, tree)| tree.stats())
        .collect()
}
