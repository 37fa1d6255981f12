//! Forest with a tree line along the left edge, thinning out to the east

use crate::random::RandomSource;
use crate::tiles::Tile;

use super::MapGrid;

/// Columns that are always forest
const TREE_LINE: [usize; 2] = [1, 2];

/// Plant trees over the interior.
///
/// Columns 1 and 2 are solid forest. Any other column `x` gets a tree with
/// probability `1/x`. The tree line is handled before any draw, so the
/// zero-width range a column 0 draw would need never comes up.
pub fn paint_forest<R: RandomSource + ?Sized>(grid: &mut MapGrid, rng: &mut R) {
    let Some((min_x, max_x, min_y, max_y)) = grid.interior() else {
        return;
    };

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if TREE_LINE.contains(&x) {
                grid.set_tile(x as i32, y as i32, Tile::Forest);
                continue;
            }
            if rng.below(x as u32) == 0 {
                grid.set_tile(x as i32, y as i32, Tile::Forest);
            }
        }
    }
}
