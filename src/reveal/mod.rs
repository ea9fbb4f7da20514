//! Reveal engine
//!
//! Owns the tile state of a round: guesses highlight and queue matching tiles,
//! confirms reveal them one at a time, and solving reveals the whole panel.

mod change;
mod round;

pub use change::{ButtonMode, MatchResult, TileChange};
pub use round::Round;
