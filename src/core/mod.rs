//! Core domain types for the panel
//!
//! Letters, phrases and tiles. Everything here is pure and holds no game state.

mod letter;
mod phrase;
mod tile;

pub use letter::{fold, matches};
pub use phrase::{Phrase, PhraseError};
pub use tile::{Tile, TileId, TileKind, TilePosition, TileStatus};
