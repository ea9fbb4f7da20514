//! View-side copy of the panel
//!
//! A Board is rebuilt from render commands alone, so views draw from it
//! without ever reading the round directly.

use crate::core::{Tile, TileStatus};
use crate::reveal::{ButtonMode, TileChange};
use crate::session::PanelView;

/// Panel tiles and button state as last reported to the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Tile>>,
    mode: ButtonMode,
    completed: bool,
    /// Tiles highlighted by the latest guess
    last_matches: usize,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> ButtonMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn last_matches(&self) -> usize {
        self.last_matches
    }

    /// Letter tiles on the board, and how many of them are revealed
    #[must_use]
    pub fn letter_progress(&self) -> (usize, usize) {
        let letters = self.rows.iter().flatten().filter(|t| t.is_letter());
        letters.fold((0, 0), |(revealed, total), tile| {
            (revealed + usize::from(tile.status.is_revealed()), total + 1)
        })
    }

    /// Tiles waiting for a confirm
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|t| t.status.is_pending())
            .count()
    }
}

impl PanelView for Board {
    fn round_started(&mut self, rows: &[Vec<Tile>]) {
        self.rows = rows.to_vec();
        self.completed = false;
        self.last_matches = 0;
    }

    fn tile_changed(&mut self, change: &TileChange) {
        if let TileStatus::Pending(_) = change.status {
            // A guess batch follows a confirmed-out queue
            if self.pending_count() == 0 {
                self.last_matches = 0;
            }
            self.last_matches += 1;
        }

        if let Some(tile) = self
            .rows
            .get_mut(change.position.row)
            .and_then(|row| row.get_mut(change.position.column))
        {
            tile.status = change.status;
        }
    }

    fn button_mode_changed(&mut self, mode: ButtonMode) {
        self.mode = mode;
    }

    fn round_completed(&mut self) {
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelWidth;
    use crate::session::Session;

    #[test]
    fn board_mirrors_round() {
        let mut session = Session::new(Board::new(), PanelWidth::Narrow);
        session.submit_phrase("hola mundo").unwrap();
        session.submit_guess_letter("o").unwrap();
        session.request_confirm_next().unwrap();

        let round_rows = session.round().unwrap().snapshot();
        assert_eq!(session.view().rows(), round_rows.as_slice());
        assert_eq!(session.view().mode(), ButtonMode::Confirm);
        assert_eq!(session.view().pending_count(), 1);
        assert_eq!(session.view().last_matches(), 2);
    }

    #[test]
    fn board_progress_and_completion() {
        let mut session = Session::new(Board::new(), PanelWidth::Wide);
        session.submit_phrase("¡sí!").unwrap();
        assert_eq!(session.view().letter_progress(), (0, 2));

        session.request_solve().unwrap();
        assert_eq!(session.view().letter_progress(), (2, 2));
        assert!(session.view().is_completed());

        session.submit_phrase("otra").unwrap();
        assert!(!session.view().is_completed());
    }

    #[test]
    fn last_matches_reset_per_guess() {
        let mut session = Session::new(Board::new(), PanelWidth::Wide);
        session.submit_phrase("ANA").unwrap();
        session.submit_guess_letter("a").unwrap();
        assert_eq!(session.view().last_matches(), 2);
        while session.request_confirm_next().unwrap() {}

        session.submit_guess_letter("n").unwrap();
        assert_eq!(session.view().last_matches(), 1);
    }
}
