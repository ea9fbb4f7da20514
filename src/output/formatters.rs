//! Formatting utilities for terminal output

use crate::core::{Tile, TileKind, TileStatus};

/// Plain-text glyph for a tile
///
/// `_` hidden, `*` highlighted and waiting for a confirm, the character once
/// revealed, blank for spaces.
#[must_use]
pub const fn tile_glyph(tile: &Tile) -> char {
    match (tile.kind, tile.status) {
        (TileKind::Space, _) => ' ',
        (_, TileStatus::Hidden) => '_',
        (_, TileStatus::Pending(_)) => '*',
        (_, TileStatus::Revealed) => tile.character,
    }
}

/// Render a row as glyphs separated by single spaces
#[must_use]
pub fn row_to_string(row: &[Tile]) -> String {
    let glyphs: Vec<String> = row.iter().map(|t| tile_glyph(t).to_string()).collect();
    glyphs.join(" ").trim_end().to_string()
}

/// Render every row of a panel
#[must_use]
pub fn panel_lines(rows: &[Vec<Tile>]) -> Vec<String> {
    rows.iter().map(|row| row_to_string(row)).collect()
}

/// Tried letters as an uppercase, space separated list
#[must_use]
pub fn letters_line(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { width } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
