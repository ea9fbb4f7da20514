//! Phrase pools for random rounds
//!
//! An embedded list of sayings compiled into the binary, plus loading from a
//! user file. The game itself never validates phrase content.

mod embedded;
pub mod loader;

pub use embedded::{PHRASES, PHRASES_COUNT};

use crate::core::Phrase;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Phrases a random round can draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePool {
    phrases: Vec<Phrase>,
}

impl PhrasePool {
    #[must_use]
    pub const fn new(phrases: Vec<Phrase>) -> Self {
        Self { phrases }
    }

    /// Pool over the embedded phrase list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::phrases_from_slice(PHRASES))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Pick a phrase at random, `None` for an empty pool
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Phrase> {
        self.phrases.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn phrases_count_matches_const() {
        assert_eq!(PHRASES.len(), PHRASES_COUNT);
    }

    #[test]
    fn embedded_phrases_are_valid() {
        for &phrase in PHRASES {
            assert!(Phrase::new(phrase).is_ok(), "Phrase '{phrase}' is blank");
            assert!(!phrase.starts_with('#'), "Comment leaked into '{phrase}'");
        }
        assert_eq!(PhrasePool::embedded().len(), PHRASES_COUNT);
    }

    #[test]
    fn choose_from_pool() {
        let pool = PhrasePool::embedded();
        let mut rng = StdRng::seed_from_u64(7);

        let phrase = pool.choose(&mut rng).unwrap();
        assert!(PHRASES.iter().any(|p| Phrase::new(p).as_ref() == Ok(phrase)));
    }

    #[test]
    fn empty_pool_chooses_nothing() {
        let pool = PhrasePool::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(pool.is_empty());
        assert!(pool.choose(&mut rng).is_none());
    }
}
