//! Secret phrase representation
//!
//! A Phrase is the normalized ground truth of a round: composed (NFC),
//! uppercased, trimmed, with every whitespace run collapsed to one space.

use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Error type for rejected phrases
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseError {
    #[error("Phrase is empty")]
    Empty,
}

/// An immutable, normalized panel phrase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    text: String,
}

impl Phrase {
    /// Normalize raw input into a Phrase
    ///
    /// # Errors
    /// Returns `PhraseError::Empty` if the input holds nothing but whitespace.
    ///
    /// # Examples
    /// ```
    /// use ruleta_panel::core::Phrase;
    ///
    /// let phrase = Phrase::new("  hola   mundo\n").unwrap();
    /// assert_eq!(phrase.as_str(), "HOLA MUNDO");
    ///
    /// assert!(Phrase::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, PhraseError> {
        let composed: String = raw.nfc().collect();
        let text = composed
            .split_whitespace()
            .map(str::to_uppercase)
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() {
            return Err(PhraseError::Empty);
        }

        Ok(Self { text })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Words in reading order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }

    /// Number of characters (not bytes), spaces included
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_uppercased_and_trimmed() {
        let phrase = Phrase::new("  buenos días ").unwrap();
        assert_eq!(phrase.as_str(), "BUENOS DÍAS");
    }

    #[test]
    fn phrase_collapses_whitespace() {
        let phrase = Phrase::new("a\t\tb \n c").unwrap();
        assert_eq!(phrase.as_str(), "A B C");
        assert_eq!(phrase.words().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn phrase_composes_decomposed_accents() {
        // "n" + combining tilde, "e" + combining acute
        let phrase = Phrase::new("n\u{303}e\u{301}").unwrap();
        assert_eq!(phrase.as_str(), "ÑÉ");
        assert_eq!(phrase.char_count(), 2);
    }

    #[test]
    fn phrase_empty_rejected() {
        assert_eq!(Phrase::new(""), Err(PhraseError::Empty));
        assert_eq!(Phrase::new(" \t\n"), Err(PhraseError::Empty));
    }

    #[test]
    fn phrase_keeps_punctuation() {
        let phrase = Phrase::new("¿qué tal?").unwrap();
        assert_eq!(phrase.to_string(), "¿QUÉ TAL?");
    }
}
