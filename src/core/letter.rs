//! Accent-insensitive letter comparison
//!
//! Letters are compared by their base form: the character is lowercased,
//! decomposed (NFD) and stripped of combining marks, so `É`, `é` and `e` are
//! the same letter. `ñ` is a letter of its own in Spanish and is never folded
//! to `n`.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Spanish eñe, kept distinct from `n` when folding.
const ENYE: char = 'ñ';

/// Fold a character to its comparison key
///
/// # Examples
/// ```
/// use ruleta_panel::core::fold;
///
/// assert_eq!(fold('Á'), 'a');
/// assert_eq!(fold('ü'), 'u');
/// assert_eq!(fold('Ñ'), 'ñ');
/// ```
#[must_use]
pub fn fold(letter: char) -> char {
    // Lowercasing a single char may expand (e.g. 'İ'); the first char is the base
    let lower = letter.to_lowercase().next().unwrap_or(letter);
    if lower == ENYE {
        return ENYE;
    }

    std::iter::once(lower)
        .nfd()
        .find(|c| !is_combining_mark(*c))
        .unwrap_or(lower)
}

/// Check whether two letters match, ignoring case and accents
///
/// # Examples
/// ```
/// use ruleta_panel::core::matches;
///
/// assert!(matches('É', 'E'));
/// assert!(!matches('Ñ', 'N'));
/// ```
#[inline]
#[must_use]
pub fn matches(a: char, b: char) -> bool {
    fold(a) == fold(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_vowels_match_plain() {
        assert!(matches('É', 'E'));
        assert!(matches('á', 'A'));
        assert!(matches('Í', 'i'));
        assert!(matches('Ó', 'o'));
        assert!(matches('Ú', 'U'));
        assert!(matches('Ü', 'u'));
    }

    #[test]
    fn case_insensitive() {
        assert!(matches('a', 'A'));
        assert!(matches('Z', 'z'));
        assert!(!matches('a', 'B'));
    }

    #[test]
    fn enye_is_its_own_letter() {
        assert!(!matches('Ñ', 'N'));
        assert!(!matches('n', 'ñ'));
        assert!(matches('ñ', 'Ñ'));
        assert!(matches('Ñ', 'Ñ'));
    }

    #[test]
    fn digits_compare_exactly() {
        assert!(matches('7', '7'));
        assert!(!matches('7', '1'));
    }

    #[test]
    fn fold_strips_marks() {
        assert_eq!(fold('É'), 'e');
        assert_eq!(fold('Ç'), 'c');
        assert_eq!(fold('x'), 'x');
        assert_eq!(fold('Ñ'), 'ñ');
    }
}
