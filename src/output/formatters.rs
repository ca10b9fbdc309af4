//! Formatting utilities for terminal output

use crate::core::{MAX_WRONG_GUESSES, Mask};

/// Format a mask with spaced, uppercase letters: `_ A _`
#[must_use]
pub fn spaced_mask(mask: &Mask) -> String {
    mask.as_bytes()
        .iter()
        .map(|&b| (b as char).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrong guesses as filled and empty markers, one per allowed miss
#[must_use]
pub fn wrong_meter(wrong: u8) -> String {
    let filled = usize::from(wrong.min(MAX_WRONG_GUESSES));
    let width = usize::from(MAX_WRONG_GUESSES);
    format!("{}{}", "●".repeat(filled), "○".repeat(width - filled))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_mask_uppercases() {
        let mask = Mask::parse("_a_e").unwrap();
        assert_eq!(spaced_mask(&mask), "_ A _ E");
    }

    #[test]
    fn wrong_meter_fills_from_left() {
        assert_eq!(wrong_meter(0), "○○○○○○");
        assert_eq!(wrong_meter(2), "●●○○○○");
        assert_eq!(wrong_meter(9), "●●●●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
