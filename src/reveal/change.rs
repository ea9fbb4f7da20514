//! State-change records emitted by the reveal engine

use crate::core::{Tile, TileId, TilePosition, TileStatus};
use std::fmt;

/// One tile transition, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileChange {
    pub id: TileId,
    pub position: TilePosition,
    pub status: TileStatus,
    /// Character to draw after the transition, `None` for a blank tile
    pub display: Option<char>,
}

impl TileChange {
    #[must_use]
    pub fn of(tile: &Tile) -> Self {
        Self {
            id: tile.id,
            position: tile.position,
            status: tile.status,
            display: tile.display(),
        }
    }
}

/// What the main panel button does next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonMode {
    /// Accept a new letter
    #[default]
    Guess,
    /// Reveal the next pending tile
    Confirm,
}

impl ButtonMode {
    /// Button caption shown to the player
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guess => "Adivinar",
            Self::Confirm => "Siguiente",
        }
    }
}

impl fmt::Display for ButtonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scanning the panel for a guessed letter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    /// Tiles that became pending, in discovery order
    pub matched: Vec<TileId>,
}

impl MatchResult {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            matched: Vec::new(),
        }
    }

    /// At least one tile matched
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.matched.len()
    }
}
