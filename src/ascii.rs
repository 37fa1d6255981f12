//! ASCII rendering for adventure maps
//!
//! Resolves every cell to a glyph plus a background/foreground color pair
//! and writes the result either with terminal color directives or as bare
//! text.

use std::fmt;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::params::MapParams;
use crate::tiles::Tile;
use crate::world::AdventureMap;

/// Background and foreground color of one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileColors {
    pub bg: Color,
    pub fg: Color,
}

impl TileColors {
    const fn new(bg: Color, fg: Color) -> Self {
        Self { bg, fg }
    }
}

const GRASS: TileColors = TileColors::new(Color::Green, Color::Black);
const FOREST: TileColors = TileColors::new(Color::DarkGreen, Color::Black);
const ROAD: TileColors = TileColors::new(Color::Yellow, Color::DarkGrey);
const RIVER: TileColors = TileColors::new(Color::DarkBlue, Color::Blue);
const STONE: TileColors = TileColors::new(Color::Grey, Color::Black);
const FRAME: TileColors = TileColors::new(Color::Black, Color::DarkYellow);

/// Map geometry the palette needs besides the tile itself
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapLayout {
    pub width: usize,
    /// First title column (may be negative when the title is wider than the map)
    pub title_start: i32,
    pub title_len: usize,
}

impl MapLayout {
    pub fn from_params(params: &MapParams) -> Self {
        Self {
            width: params.width,
            title_start: params.title_start(),
            title_len: params.title_len(),
        }
    }

    /// Cell lies on row 1 within the title's columns
    pub fn in_title(&self, x: usize, y: usize) -> bool {
        let x = x as i64;
        let start = self.title_start as i64;
        y == 1 && x >= start && x < start + self.title_len as i64
    }
}

/// Color for a tile at `(x, y)`.
///
/// The title span wins over everything. Curve tiles east of the middle are
/// river, the rest are wall.
pub fn color_for(tile: Tile, x: usize, y: usize, layout: &MapLayout) -> TileColors {
    if layout.in_title(x, y) {
        return FRAME;
    }

    match tile {
        Tile::Forest => FOREST,
        Tile::Road => ROAD,
        t if t.is_curve() => {
            if x > layout.width / 2 {
                RIVER
            } else {
                STONE
            }
        }
        t if t.is_masonry() => STONE,
        t if t.is_border() => FRAME,
        _ => GRASS,
    }
}

/// One resolved cell, ready for any display backend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderedCell {
    pub x: usize,
    pub y: usize,
    pub glyph: char,
    pub colors: TileColors,
}

impl AdventureMap {
    pub fn layout(&self) -> MapLayout {
        MapLayout::from_params(&self.params)
    }

    /// Every cell in row-major order with its glyph and colors
    pub fn cells(&self) -> impl Iterator<Item = RenderedCell> + '_ {
        let layout = self.layout();
        self.grid.iter().map(move |(x, y, &tile)| RenderedCell {
            x,
            y,
            glyph: tile.to_char(),
            colors: color_for(tile, x, y, &layout),
        })
    }
}

/// Write the map with terminal color directives, one line per row
pub fn write_colored<W: Write>(map: &AdventureMap, out: &mut W) -> io::Result<()> {
    let width = map.width();
    for cell in map.cells() {
        queue!(
            out,
            SetBackgroundColor(cell.colors.bg),
            SetForegroundColor(cell.colors.fg),
            Print(cell.glyph)
        )?;
        if cell.x + 1 == width {
            queue!(out, ResetColor, Print('\n'))?;
        }
    }
    Ok(())
}

/// Write the map as plain text, one line per row
pub fn write_plain<W: Write>(map: &AdventureMap, out: &mut W) -> io::Result<()> {
    write!(out, "{map}")
}

impl fmt::Display for AdventureMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for tile in self.grid.row(y) {
                write!(f, "{}", tile.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
