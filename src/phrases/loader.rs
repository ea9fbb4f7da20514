//! Phrase loading utilities
//!
//! Provides functions to load phrase pools from files or from embedded constants.

use crate::core::Phrase;
use std::fs;
use std::io;
use std::path::Path;

/// Load phrases from a file
///
/// One phrase per line. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use ruleta_panel::phrases::loader::load_from_file;
///
/// let phrases = load_from_file("data/phrases.txt").unwrap();
/// println!("Loaded {} phrases", phrases.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Phrase>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Parse phrase-per-line text, skipping blanks and comments
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Phrase> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| Phrase::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Phrase vector
///
/// # Examples
/// ```
/// use ruleta_panel::phrases::loader::phrases_from_slice;
/// use ruleta_panel::phrases::PHRASES;
///
/// let phrases = phrases_from_slice(PHRASES);
/// assert_eq!(phrases.len(), PHRASES.len());
/// ```
#[must_use]
pub fn phrases_from_slice(slice: &[&str]) -> Vec<Phrase> {
    slice.iter().filter_map(|&s| Phrase::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrases_from_slice_normalizes() {
        let phrases = phrases_from_slice(&["hola mundo", "  adiós "]);

        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0].as_str(), "HOLA MUNDO");
        assert_eq!(phrases[1].as_str(), "ADIÓS");
    }

    #[test]
    fn phrases_from_slice_skips_blank() {
        let phrases = phrases_from_slice(&["uno", "   ", "", "dos"]);
        assert_eq!(phrases.len(), 2);
    }

    #[test]
    fn parse_lines_skips_comments() {
        let phrases = parse_lines("# cabecera\nuno\n\n  # otra\ndos tres\n");

        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[1].as_str(), "DOS TRES");
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("/nonexistent/phrases.txt").is_err());
    }
}
