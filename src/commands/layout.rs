//! Layout inspection command
//!
//! Lays out a phrase for a panel width and reports the resulting rows.

use crate::config::PanelWidth;
use crate::core::{Phrase, TileKind};
use crate::layout::layout;
use crate::session::SessionError;

/// Result of laying out a phrase
pub struct LayoutReport {
    pub phrase: String,
    pub width: PanelWidth,
    /// Row contents as typed, trailing space kept
    pub rows: Vec<String>,
    pub letters: usize,
    pub symbols: usize,
    pub spaces: usize,
}

impl LayoutReport {
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.letters + self.symbols + self.spaces
    }
}

/// Lay out `raw` at `width` and count tiles by kind
///
/// # Errors
///
/// Returns `SessionError::EmptyPhrase` if the phrase is blank.
pub fn analyze_layout(raw: &str, width: PanelWidth) -> Result<LayoutReport, SessionError> {
    let phrase = Phrase::new(raw)?;
    let panel = layout(&phrase, width.max_columns());

    let count = |kind: TileKind| panel.tiles().iter().filter(|t| t.kind == kind).count();

    Ok(LayoutReport {
        phrase: phrase.to_string(),
        width,
        rows: panel
            .rows()
            .map(|row| row.iter().map(|t| t.character).collect())
            .collect(),
        letters: count(TileKind::Letter),
        symbols: count(TileKind::Symbol),
        spaces: count(TileKind::Space),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_kinds() {
        let report = analyze_layout("¿qué tal?", PanelWidth::Wide).unwrap();

        assert_eq!(report.phrase, "¿QUÉ TAL?");
        assert_eq!(report.rows, vec!["¿QUÉ TAL?"]);
        assert_eq!(report.letters, 6);
        assert_eq!(report.symbols, 2);
        assert_eq!(report.spaces, 1);
        assert_eq!(report.tile_count(), 9);
    }

    #[test]
    fn report_rows_follow_width() {
        let report = analyze_layout("hola mundo", PanelWidth::Narrow).unwrap();
        assert_eq!(report.rows, vec!["HOLA ", "MUNDO"]);
    }

    #[test]
    fn report_rejects_blank() {
        assert!(matches!(
            analyze_layout("  ", PanelWidth::Wide),
            Err(SessionError::EmptyPhrase)
        ));
    }
}
