//! Border frame and map title

use crate::tiles::{Corner, Tile};

use super::MapGrid;

/// Draw the frame around the map.
///
/// This is the only pass that writes the outer ring, and it overwrites
/// whatever is there.
pub fn paint_border(grid: &mut MapGrid) {
    let (w, h) = (grid.width, grid.height);
    if w == 0 || h == 0 {
        return;
    }

    for x in 0..w {
        grid.set(x, 0, Tile::BorderHorizontal);
        grid.set(x, h - 1, Tile::BorderHorizontal);
    }
    for y in 1..h.saturating_sub(1) {
        grid.set(0, y, Tile::BorderVertical);
        grid.set(w - 1, y, Tile::BorderVertical);
    }

    grid.set(0, 0, Tile::BorderCorner(Corner::UpperLeft));
    grid.set(w - 1, 0, Tile::BorderCorner(Corner::UpperRight));
    grid.set(w - 1, h - 1, Tile::BorderCorner(Corner::LowerRight));
    grid.set(0, h - 1, Tile::BorderCorner(Corner::LowerLeft));
}

/// Stamp `title` centered on row 1
pub fn paint_title(grid: &mut MapGrid, title: &str, start: i32) {
    for (x, c) in (start..).zip(title.chars()) {
        grid.set_tile(x, 1, Tile::Glyph(c));
    }
}
