//! Panel tiles
//!
//! One tile per character of a laid-out phrase. A tile's kind and position are
//! fixed at layout time; only its status changes during a round.

use std::fmt;

/// Index of a tile in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

impl TileId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Row and column of a tile in the wrapped panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePosition {
    pub row: usize,
    pub column: usize,
}

/// What a tile holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Gap between two words, never hidden or guessable
    Space,
    /// Letter or digit the guesser has to find
    Letter,
    /// Punctuation and other signs, shown from the start
    Symbol,
}

impl TileKind {
    /// Classify a phrase character
    #[must_use]
    pub fn of(character: char) -> Self {
        if character.is_whitespace() {
            Self::Space
        } else if character.is_alphanumeric() {
            Self::Letter
        } else {
            Self::Symbol
        }
    }
}

/// Reveal state of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStatus {
    Hidden,
    /// Matched by a guess and waiting for a confirm; carries the ground-truth character
    Pending(char),
    Revealed,
}

impl TileStatus {
    #[inline]
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    #[inline]
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// A single panel tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub character: char,
    pub kind: TileKind,
    pub status: TileStatus,
    pub position: TilePosition,
}

impl Tile {
    /// Create a tile in its starting state
    ///
    /// Letters start hidden; spaces and symbols start revealed.
    #[must_use]
    pub fn new(id: TileId, character: char, position: TilePosition) -> Self {
        let kind = TileKind::of(character);
        let status = match kind {
            TileKind::Letter => TileStatus::Hidden,
            TileKind::Space | TileKind::Symbol => TileStatus::Revealed,
        };

        Self {
            id,
            character,
            kind,
            status,
            position,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_letter(&self) -> bool {
        self.kind == TileKind::Letter
    }

    /// Letter tile that still hides its character
    #[inline]
    #[must_use]
    pub fn is_unrevealed_letter(&self) -> bool {
        self.is_letter() && !self.status.is_revealed()
    }

    /// Character the view should show, if any
    ///
    /// Hidden and pending tiles show nothing; spaces show nothing either.
    #[must_use]
    pub fn display(&self) -> Option<char> {
        match (self.kind, self.status) {
            (TileKind::Space, _) | (_, TileStatus::Hidden | TileStatus::Pending(_)) => None,
            (_, TileStatus::Revealed) => Some(self.character),
        }
    }
}
