//! Solver configuration

use crate::core::MAX_WRONG_GUESSES;

/// Options for building decision trees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Build one tree per length on the rayon pool
    pub parallel: bool,
    /// Wrong guesses the builder explores; clamped to [`MAX_WRONG_GUESSES`]
    pub wrong_guess_budget: u8,
}

impl SolverConfig {
    /// Configuration that builds every length on the calling thread
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            wrong_guess_budget: MAX_WRONG_GUESSES,
        }
    }

    /// Effective budget after clamping
    #[must_use]
    pub const fn budget(&self) -> u8 {
        if self.wrong_guess_budget > MAX_WRONG_GUESSES {
            MAX_WRONG_GUESSES
        } else {
            self.wrong_guess_budget
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            wrong_guess_budget: MAX_WRONG_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_clamped() {
        let config = SolverConfig {
            wrong_guess_budget: 40,
            ..SolverConfig::default()
        };
        assert_eq!(config.budget(), MAX_WRONG_GUESSES);
        assert_eq!(SolverConfig::sequential().budget(), MAX_WRONG_GUESSES);
        assert!(!SolverConfig::sequential().parallel);
    }
}
