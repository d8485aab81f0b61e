//! Presentation themes.
//!
//! The screen used to exist as two near-identical variants differing only
//! in tile metrics, palette, and header branding. That variation is data
//! now: one view, several [`Theme`] presets.

use crate::fb::{CellStyle, Rgb};

/// Everything the view needs to know about one presentation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Header branding line drawn above the board.
    pub title: &'static str,
    /// Tile width in terminal columns.
    pub tile_w: u16,
    /// Tile height in terminal rows.
    pub tile_h: u16,
    pub backdrop: CellStyle,
    pub tile: CellStyle,
    pub empty: CellStyle,
    pub border: CellStyle,
    pub header: CellStyle,
    pub help: CellStyle,
    pub overlay: CellStyle,
}

/// Slate backdrop with light-blue tiles, matching the original screen.
pub const CLASSIC: Theme = Theme {
    name: "classic",
    title: "SLIDE PUZZLE",
    tile_w: 7,
    tile_h: 3,
    backdrop: CellStyle::new(Rgb::new(150, 155, 160), Rgb::new(60, 65, 70)),
    tile: CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(173, 216, 230)).bold(),
    empty: CellStyle::new(Rgb::new(60, 65, 70), Rgb::new(245, 245, 245)),
    border: CellStyle::new(Rgb::new(10, 10, 10), Rgb::new(60, 65, 70)),
    header: CellStyle::new(Rgb::new(235, 235, 235), Rgb::new(60, 65, 70)).bold(),
    help: CellStyle::new(Rgb::new(170, 175, 180), Rgb::new(60, 65, 70)),
    overlay: CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 100, 0)).bold(),
};

/// Larger tiles on a deep-blue backdrop.
pub const OCEAN: Theme = Theme {
    name: "ocean",
    title: "OCEAN SLIDER",
    tile_w: 9,
    tile_h: 3,
    backdrop: CellStyle::new(Rgb::new(120, 160, 190), Rgb::new(12, 36, 60)),
    tile: CellStyle::new(Rgb::new(240, 250, 255), Rgb::new(20, 110, 160)).bold(),
    empty: CellStyle::new(Rgb::new(12, 36, 60), Rgb::new(200, 225, 240)),
    border: CellStyle::new(Rgb::new(140, 190, 220), Rgb::new(12, 36, 60)),
    header: CellStyle::new(Rgb::new(220, 240, 255), Rgb::new(12, 36, 60)).bold(),
    help: CellStyle::new(Rgb::new(130, 165, 190), Rgb::new(12, 36, 60)),
    overlay: CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(10, 90, 60)).bold(),
};

/// All presets, in cycle order.
pub const THEMES: [Theme; 2] = [CLASSIC, OCEAN];

impl Theme {
    /// The next preset in the cycle.
    pub fn cycle(&self) -> Theme {
        let pos = THEMES.iter().position(|t| t.name == self.name).unwrap_or(0);
        THEMES[(pos + 1) % THEMES.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        CLASSIC
    }
}
