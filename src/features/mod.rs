//! Terrain painters
//!
//! Each painter mutates the shared grid in place. They must run in the order
//! [`crate::world::MapBuilder::build`] calls them: later painters read the
//! tiles and crossings produced by earlier ones.

pub mod crossings;
pub mod curve;
pub mod forest;
pub mod frame;
pub mod roads;

use crate::tilemap::Tilemap;
use crate::tiles::Tile;

pub use crossings::{paint_bridge, paint_gate};
pub use curve::{walk_curve, Crossing, CurveResult};
pub use forest::paint_forest;
pub use frame::{paint_border, paint_title};
pub use roads::{paint_main_road, paint_secondary_road};

/// The grid every painter works on
pub type MapGrid = Tilemap<Tile>;

/// Test helpers shared by the painter modules
#[cfg(test)]
pub(crate) mod testing {
    use super::MapGrid;
    use crate::tiles::Tile;

    /// Coordinates of every cell holding `tile`
    pub fn cells_of(grid: &MapGrid, tile: Tile) -> Vec<(usize, usize)> {
        grid.iter()
            .filter(|(_, _, &t)| t == tile)
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
