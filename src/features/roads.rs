//! Main east-west road and the small road that follows the river south

use crate::params::MapParams;
use crate::random::RandomSource;
use crate::tiles::Tile;

use super::{Crossing, MapGrid};

/// Clamp a road row into `[min, max)`
fn clamp_to_band(row: i32, (min, max): (i32, i32)) -> i32 {
    if row < min {
        min
    } else if row >= max {
        max - 1
    } else {
        row
    }
}

/// Walk a road from the west edge to the east edge, one column per step.
///
/// The road starts on the middle row. Each later column draws from
/// `[0, road_turn_modulus)`: 0 climbs a row, 1 drops a row, anything else
/// stays level. The walk position itself is never clamped, only the row
/// that gets painted, so a road pinned against the band edge needs several
/// turns before it visibly moves away again.
pub fn paint_main_road<R: RandomSource + ?Sized>(
    grid: &mut MapGrid,
    params: &MapParams,
    rng: &mut R,
) {
    let Some((min_x, max_x, _, _)) = grid.interior() else {
        return;
    };
    let band = params.road_band();
    let mut row = (grid.height / 2) as i32;

    grid.set_tile(min_x as i32, row, Tile::Road);
    for x in min_x + 1..=max_x {
        match rng.below(params.road_turn_modulus) {
            0 => row -= 1,
            1 => row += 1,
            _ => {}
        }
        grid.set_tile(x as i32, clamp_to_band(row, band), Tile::Road);
    }
}

/// Lay a road `offset` columns west of the river, from just below the river
/// crossing down to the bottom of the map.
///
/// `trace[i]` is the river column on row `i + 1`, so starting the index at
/// the crossing row lines the road up with the row below the crossing. The
/// index is clamped to the trace so a short trace repeats its last column
/// instead of reading past the end.
pub fn paint_secondary_road(grid: &mut MapGrid, crossing: Crossing, trace: &[i32], offset: i32) {
    let Some(last) = trace.len().checked_sub(1) else {
        return;
    };
    let mut index = usize::try_from(crossing.y).unwrap_or(0);

    for y in crossing.y + 1..grid.height as i32 {
        let river_x = trace[index.min(last)];
        grid.set_tile(river_x - offset, y, Tile::Road);
        index += 1;
    }
}
