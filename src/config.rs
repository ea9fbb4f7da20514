//! Panel width presets
//!
//! The panel has two fixed geometries. Which one is active is decided by the
//! view from its viewport; the core only consumes the column count.

use std::fmt;
use std::str::FromStr;

/// Horizontal gap between two tiles, in terminal cells
pub const TILE_GAP: u16 = 1;

/// Panel geometry preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelWidth {
    /// Small screens: 8 tiles per row
    Narrow,
    /// 12 tiles per row
    #[default]
    Wide,
}

impl PanelWidth {
    /// Maximum tiles per row handed to the layout engine
    #[inline]
    #[must_use]
    pub const fn max_columns(self) -> usize {
        match self {
            Self::Narrow => 8,
            Self::Wide => 12,
        }
    }

    /// Width of one tile in terminal cells, borders included
    #[inline]
    #[must_use]
    pub const fn tile_cells(self) -> u16 {
        match self {
            Self::Narrow => 3,
            Self::Wide => 4,
        }
    }

    /// Terminal cells needed to draw one full row
    ///
    /// Counts one extra column for the trailing space tile a row may carry.
    #[must_use]
    pub const fn row_cells(self) -> u16 {
        let tiles = self.max_columns() as u16 + 1;
        tiles * self.tile_cells() + (tiles - 1) * TILE_GAP
    }

    /// Pick the preset that fits a viewport of `columns` terminal cells
    ///
    /// # Examples
    /// ```
    /// use ruleta_panel::config::PanelWidth;
    ///
    /// assert_eq!(PanelWidth::for_viewport(200), PanelWidth::Wide);
    /// assert_eq!(PanelWidth::for_viewport(40), PanelWidth::Narrow);
    /// ```
    #[must_use]
    pub const fn for_viewport(columns: u16) -> Self {
        if columns >= Self::Wide.row_cells() {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

impl fmt::Display for PanelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "narrow" | "mobile" => Ok(Self::Narrow),
            "wide" | "desktop" => Ok(Self::Wide),
            other => Err(format!("Unknown panel width '{other}' (expected narrow or wide)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_columns() {
        assert_eq!(PanelWidth::Narrow.max_columns(), 8);
        assert_eq!(PanelWidth::Wide.max_columns(), 12);
    }

    #[test]
    fn row_cells_counts_gaps() {
        // 13 tiles of 4 cells plus 12 gaps
        assert_eq!(PanelWidth::Wide.row_cells(), 64);
        // 9 tiles of 3 cells plus 8 gaps
        assert_eq!(PanelWidth::Narrow.row_cells(), 35);
    }

    #[test]
    fn viewport_threshold() {
        let wide = PanelWidth::Wide.row_cells();
        assert_eq!(PanelWidth::for_viewport(wide), PanelWidth::Wide);
        assert_eq!(PanelWidth::for_viewport(wide - 1), PanelWidth::Narrow);
    }

    #[test]
    fn parse_names() {
        assert_eq!("wide".parse::<PanelWidth>(), Ok(PanelWidth::Wide));
        assert_eq!(" Narrow ".parse::<PanelWidth>(), Ok(PanelWidth::Narrow));
        assert!("huge".parse::<PanelWidth>().is_err());
    }

    #[test]
    fn default_is_wide() {
        assert_eq!(PanelWidth::default(), PanelWidth::Wide);
    }
}
