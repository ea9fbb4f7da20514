//! Phrase layout
//!
//! Turns a phrase into rows of tiles for a fixed maximum row width. Tile ids
//! follow reading order and row/column positions never change afterwards.

mod wrap;

pub use wrap::wrap_words;

use crate::core::{Phrase, Tile, TileId, TilePosition};
use std::ops::Range;
use tracing::debug;

/// Tiles of a phrase arranged in rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    tiles: Vec<Tile>,
    rows: Vec<Range<usize>>,
    max_columns: usize,
}

impl Layout {
    /// Lay out arbitrary text
    ///
    /// Whitespace runs are treated as single word separators; pass a
    /// normalized [`Phrase`] through [`layout`] to get a lossless layout.
    #[must_use]
    pub fn from_text(text: &str, max_columns: usize) -> Self {
        let mut tiles = Vec::with_capacity(text.len());
        let mut rows = Vec::new();

        for (row, chars) in wrap_words(text, max_columns).into_iter().enumerate() {
            let start = tiles.len();
            for (column, character) in chars.into_iter().enumerate() {
                let id = TileId(tiles.len());
                tiles.push(Tile::new(id, character, TilePosition { row, column }));
            }
            rows.push(start..tiles.len());
        }

        debug!(
            tiles = tiles.len(),
            rows = rows.len(),
            max_columns,
            "laid out panel"
        );

        Self {
            tiles,
            rows,
            max_columns,
        }
    }

    /// All tiles in reading order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Tiles of one row
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Tile]> {
        self.rows.get(index).map(|range| &self.tiles[range.clone()])
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.rows.iter().map(|range| &self.tiles[range.clone()])
    }

    #[inline]
    #[must_use]
    pub const fn max_columns(&self) -> usize {
        self.max_columns
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Concatenated tile characters in reading order
    #[must_use]
    pub fn text(&self) -> String {
        self.tiles.iter().map(|tile| tile.character).collect()
    }

    /// Split into owned tiles and row ranges
    #[must_use]
    pub fn into_parts(self) -> (Vec<Tile>, Vec<Range<usize>>) {
        (self.tiles, self.rows)
    }
}

/// Lay out a phrase with at most `max_columns` tiles per row
///
/// # Examples
/// ```
/// use ruleta_panel::core::Phrase;
/// use ruleta_panel::layout::layout;
///
/// let phrase = Phrase::new("hola mundo").unwrap();
/// let panel = layout(&phrase, 8);
///
/// assert_eq!(panel.row_count(), 2);
/// assert_eq!(panel.text(), "HOLA MUNDO");
/// ```
#[must_use]
pub fn layout(phrase: &Phrase, max_columns: usize) -> Layout {
    Layout::from_text(phrase.as_str(), max_columns)
}
