//! Structures placed where the main road meets the river and the wall

use crate::params::BridgeParams;
use crate::tiles::Tile;

use super::{Crossing, MapGrid};

/// Lay a bridge across the river at `crossing`.
///
/// The deck runs along the crossing row with a railing on the rows above
/// and below. One column of road at each end, three rows tall, joins the
/// bridge to the approach road.
pub fn paint_bridge(grid: &mut MapGrid, crossing: Crossing, bridge: &BridgeParams) {
    let Crossing { x: cx, y: cy } = crossing;

    for x in cx + bridge.deck_start..=cx + bridge.deck_end {
        grid.set_tile(x, cy - 1, Tile::BridgeRailing);
        grid.set_tile(x, cy, Tile::Road);
        grid.set_tile(x, cy + 1, Tile::BridgeRailing);
    }

    for dx in bridge.approach_columns() {
        for y in cy - 1..=cy + 1 {
            grid.set_tile(cx + dx, y, Tile::Road);
        }
    }
}

/// Carve a two-wide gate through the wall at `crossing`, with a pair of
/// turrets above and below it.
pub fn paint_gate(grid: &mut MapGrid, crossing: Crossing) {
    let Crossing { x: cx, y: cy } = crossing;

    grid.set_tile(cx, cy - 1, Tile::TurretLeft);
    grid.set_tile(cx + 1, cy - 1, Tile::TurretRight);

    grid.set_tile(cx, cy, Tile::Road);
    grid.set_tile(cx + 1, cy, Tile::Road);

    grid.set_tile(cx, cy + 1, Tile::TurretLeft);
    grid.set_tile(cx + 1, cy + 1, Tile::TurretRight);
}
