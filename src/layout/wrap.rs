//! Greedy word wrap with character-level fallback
//!
//! # Algorithm
//! 1. Words are placed left to right; a row's length counts spaces too
//! 2. A word that fits is appended, followed by a space unless it is the last word
//! 3. A word that does not fit closes the current row and is retried on a fresh one
//! 4. A word wider than an empty row is split character by character; a row is
//!    closed once full, except after the word's final character
//!
//! The separating space always stays with the preceding word, so a row can end
//! one column past `max_columns` on an invisible space.

use tracing::trace;

/// Wrap `text` into rows of characters
///
/// `max_columns` below 1 is treated as 1. Whitespace-only text yields no rows.
///
/// # Examples
/// ```
/// use ruleta_panel::layout::wrap_words;
///
/// let rows = wrap_words("HOLA MUNDO", 8);
/// assert_eq!(rows, vec![vec!['H', 'O', 'L', 'A', ' '], vec!['M', 'U', 'N', 'D', 'O']]);
/// ```
#[must_use]
pub fn wrap_words(text: &str, max_columns: usize) -> Vec<Vec<char>> {
    let max_columns = max_columns.max(1);
    let words: Vec<Vec<char>> = text
        .split_whitespace()
        .map(|word| word.chars().collect())
        .collect();

    let mut rows: Vec<Vec<char>> = Vec::new();
    let mut current: Vec<char> = Vec::new();

    let mut i = 0;
    while i < words.len() {
        let word = &words[i];
        let is_last = i + 1 == words.len();

        if current.len() + word.len() > max_columns {
            if !current.is_empty() {
                // Retry this word on a fresh row
                rows.push(std::mem::take(&mut current));
                continue;
            }

            trace!(len = word.len(), max_columns, "force-wrapping long word");
            for (k, &ch) in word.iter().enumerate() {
                current.push(ch);
                if current.len() >= max_columns && k + 1 < word.len() {
                    rows.push(std::mem::take(&mut current));
                }
            }
        } else {
            current.extend_from_slice(word);
        }

        if !is_last {
            current.push(' ');
        }
        i += 1;
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn as_strings(rows: &[Vec<char>]) -> Vec<String> {
        rows.iter().map(|r| r.iter().collect()).collect()
    }

    #[test]
    fn single_row_when_fits() {
        let rows = wrap_words("HOLA MUNDO", 12);
        assert_eq!(as_strings(&rows), vec!["HOLA MUNDO"]);
    }

    #[test]
    fn breaks_at_word_boundary() {
        let rows = wrap_words("EL QUE MUCHO ABARCA POCO APRIETA", 12);
        assert_eq!(
            as_strings(&rows),
            vec!["EL QUE MUCHO ", "ABARCA POCO ", "APRIETA"]
        );
    }

    #[test]
    fn space_may_overflow_by_one() {
        // "ABCD" fills the row, its space rides along as a fifth tile
        let rows = wrap_words("ABCD EF", 4);
        assert_eq!(as_strings(&rows), vec!["ABCD ", "EF"]);
    }

    #[test]
    fn long_word_force_wrapped() {
        let rows = wrap_words("ELECTROENCEFALOGRAFISTA", 8);
        assert_eq!(as_strings(&rows), vec!["ELECTROE", "NCEFALOG", "RAFISTA"]);
    }

    #[test]
    fn long_word_exact_multiple_has_no_empty_row() {
        let rows = wrap_words("ABCDEFGH IJ", 4);
        assert_eq!(as_strings(&rows), vec!["ABCD", "EFGH ", "IJ"]);
    }

    #[test]
    fn long_word_repeated_letters_still_wrap() {
        let rows = wrap_words("AAAAAAAAA", 4);
        assert_eq!(as_strings(&rows), vec!["AAAA", "AAAA", "A"]);
    }

    #[test]
    fn long_word_after_content_starts_new_row() {
        let rows = wrap_words("YO ABCDEFGHIJ", 4);
        assert_eq!(as_strings(&rows), vec!["YO ", "ABCD", "EFGH", "IJ"]);
    }

    #[test]
    fn empty_text_yields_no_rows() {
        assert!(wrap_words("", 8).is_empty());
        assert!(wrap_words("   ", 8).is_empty());
    }

    #[test]
    fn zero_width_treated_as_one() {
        let rows = wrap_words("AB C", 0);
        assert_eq!(as_strings(&rows), vec!["A", "B ", "C"]);
    }

    fn phrase_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec("[A-ZÁÉÍÓÚÑ¿?!,]{1,15}", 1..8).prop_map(|words| words.join(" "))
    }

    proptest! {
        #[test]
        fn wrap_is_deterministic(text in phrase_strategy(), width in 1usize..16) {
            prop_assert_eq!(wrap_words(&text, width), wrap_words(&text, width));
        }

        #[test]
        fn wrap_is_lossless(text in phrase_strategy(), width in 1usize..16) {
            let joined: String = wrap_words(&text, width).into_iter().flatten().collect();
            prop_assert_eq!(joined, text);
        }

        #[test]
        fn rows_respect_width(text in phrase_strategy(), width in 1usize..16) {
            for row in wrap_words(&text, width) {
                prop_assert!(!row.is_empty());
                let visible = row.iter().rev().skip_while(|c| **c == ' ').count();
                prop_assert!(visible <= width);
                prop_assert!(row.len() <= width + 1);
                prop_assert_ne!(row[0], ' ');
            }
        }
    }
}
