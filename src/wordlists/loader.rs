//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or the embedded list.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Invalid lines are skipped, as in [`Dictionary::from_strs`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_strs(content.lines()))
}

/// Resolve a `--wordlist` argument: `embedded` or a file path
///
/// # Errors
///
/// Returns an I/O error if a path is given and cannot be read.
pub fn resolve(source: &str) -> io::Result<Dictionary> {
    if source.eq_ignore_ascii_case("embedded") {
        Ok(Dictionary::embedded())
    } else {
        load_from_file(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_file_and_skips_noise() {
        let path = std::env::temp_dir().join(format!(
            "hangman_solver_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "# list\nCat\n\ndog\ncat\nno way\n").unwrap();

        let dict = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.lengths().collect::<Vec<_>>(), [3]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn resolve_embedded() {
        let dict = resolve("embedded").unwrap();
        assert_eq!(dict.len(), crate::wordlists::WORDS_COUNT);
    }
}
