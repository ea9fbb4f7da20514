use crate::core::PhraseError;
use thiserror::Error;

/// Rejected player action
///
/// Every variant means nothing happened: no state changed and no view event
/// was emitted. Callers may show it or drop it.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Phrase is empty")]
    EmptyPhrase,
    #[error("Guess must be exactly one letter, got {0} characters")]
    InvalidGuessLength(usize),
    #[error("'{0}' is not a letter")]
    InvalidGuessCharacter(char),
    #[error("Reveal the highlighted letters before guessing again")]
    GuessWhilePending,
    #[error("No phrase on the panel yet")]
    NoActiveRound,
}

impl From<PhraseError> for SessionError {
    fn from(err: PhraseError) -> Self {
        match err {
            PhraseError::Empty => Self::EmptyPhrase,
        }
    }
}

pub type Result<T> = core::result::Result<T, SessionError>;
