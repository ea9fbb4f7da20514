//! Render commands sent from the session to a view

use crate::core::Tile;
use crate::reveal::{ButtonMode, TileChange};

/// Passive panel renderer driven by the session
///
/// Implementors only draw; they never mutate round state.
pub trait PanelView {
    /// A new round was laid out; draw these rows from scratch
    fn round_started(&mut self, rows: &[Vec<Tile>]);

    /// One tile changed status
    fn tile_changed(&mut self, change: &TileChange);

    /// The guess button switched between guessing and confirming
    fn button_mode_changed(&mut self, mode: ButtonMode);

    /// The last hidden letter was revealed
    fn round_completed(&mut self) {}
}

/// Recorded view command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    RoundStarted(Vec<Vec<Tile>>),
    TileChanged(TileChange),
    ButtonModeChanged(ButtonMode),
    RoundCompleted,
}

/// Records every command, handy for tests and headless play
impl PanelView for Vec<PanelEvent> {
    fn round_started(&mut self, rows: &[Vec<Tile>]) {
        self.push(PanelEvent::RoundStarted(rows.to_vec()));
    }

    fn tile_changed(&mut self, change: &TileChange) {
        self.push(PanelEvent::TileChanged(*change));
    }

    fn button_mode_changed(&mut self, mode: ButtonMode) {
        self.push(PanelEvent::ButtonModeChanged(mode));
    }

    fn round_completed(&mut self) {
        self.push(PanelEvent::RoundCompleted);
    }
}

impl<V: PanelView + ?Sized> PanelView for &mut V {
    fn round_started(&mut self, rows: &[Vec<Tile>]) {
        (**self).round_started(rows);
    }

    fn tile_changed(&mut self, change: &TileChange) {
        (**self).tile_changed(change);
    }

    fn button_mode_changed(&mut self, mode: ButtonMode) {
        (**self).button_mode_changed(mode);
    }

    fn round_completed(&mut self) {
        (**self).round_completed();
    }
}
