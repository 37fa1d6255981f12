//! Winding north-south features (river and wall)
//!
//! A curve is a one-dimensional random walk over columns, advancing one row
//! per step from the top of the map to the bottom. While walking it looks
//! for the main road so later painters know where to put the bridge or the
//! gate.

use crate::params::CurveParams;
use crate::random::RandomSource;
use crate::tiles::Tile;

use super::MapGrid;

/// Where a curve met the main road
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crossing {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Output of one curve walk
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurveResult {
    /// Last row on which the walk sat next to a road tile
    pub crossing: Option<Crossing>,
    /// Walk column per row; `trace[i]` belongs to row `i + 1`. Empty unless
    /// the curve was traced.
    pub trace: Vec<i32>,
}

/// Walk a curve down the map and paint it.
///
/// Each row draws from `[0, modulus)`: 0 steps one column left, 1 steps one
/// column right, anything else goes straight, and the matching curve tile is
/// painted `swath` tiles wide starting at the walk column. Before painting,
/// the three cells around the walk column are checked for road. Every hit
/// overwrites the crossing, so the one reported is the lowest on the map.
pub fn walk_curve<R: RandomSource + ?Sized>(
    grid: &mut MapGrid,
    params: &CurveParams,
    rng: &mut R,
) -> CurveResult {
    let mut col = params.start_column(grid.width);
    let mut result = CurveResult::default();

    for y in 1..grid.height as i32 {
        let tile = match rng.below(params.modulus) {
            0 => {
                col -= 1;
                Tile::CurveLeft
            }
            1 => {
                col += 1;
                Tile::CurveRight
            }
            _ => Tile::CurveStraight,
        };

        if touches_road(grid, col, y) {
            result.crossing = Some(Crossing { x: col, y });
        }

        if params.traced {
            result.trace.push(col);
        }
        for x in col..col + params.swath {
            grid.set_tile(x, y, tile);
        }
    }

    result
}

/// Road on `(col - 1, y)`, `(col, y)` or `(col + 1, y)`. Off-grid cells
/// count as no road.
fn touches_road(grid: &MapGrid, col: i32, y: i32) -> bool {
    (col - 1..=col + 1).any(|x| grid.at(x, y) == Some(&Tile::Road))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::testing::cells_of;
    use crate::features::roads::paint_main_road;
    use crate::params::MapParams;
    use crate::random::{MapRng, ScriptedRandom};

    fn road_row(grid: &mut MapGrid, y: usize) {
        for x in 1..grid.width - 1 {
            grid.set(x, y, Tile::Road);
        }
    }

    #[test]
    fn test_straight_river_walk() {
        let mut grid = MapGrid::new(20, 10);
        road_row(&mut grid, 5);

        let result = walk_curve(&mut grid, &CurveParams::RIVER, &mut ScriptedRandom::straight());

        assert_eq!(result.crossing, Some(Crossing { x: 15, y: 5 }));
        assert_eq!(result.trace, vec![15; 9]);
        for y in 1..9 {
            for x in 15..18 {
                assert_eq!(grid.get(x, y), Some(&Tile::CurveStraight));
            }
        }
    }

    #[test]
    fn test_wall_is_two_wide_and_untraced() {
        let mut grid = MapGrid::new(20, 10);
        let result = walk_curve(&mut grid, &CurveParams::WALL, &mut ScriptedRandom::straight());

        assert!(result.trace.is_empty());
        assert_eq!(result.crossing, None);
        let painted = cells_of(&grid, Tile::CurveStraight);
        assert_eq!(painted.len(), 2 * 8);
        assert!(painted.iter().all(|&(x, _)| x == 5 || x == 6));
    }

    #[test]
    fn test_turn_tiles_follow_direction() {
        let mut grid = MapGrid::new(20, 6);
        // left, right, straight, left, straight
        let script = vec![0, 1, 2, 0, 2];
        let result = walk_curve(&mut grid, &CurveParams::RIVER, &mut ScriptedRandom::new(script));

        assert_eq!(result.trace, vec![14, 15, 15, 14, 14]);
        assert_eq!(grid.get(14, 1), Some(&Tile::CurveLeft));
        assert_eq!(grid.get(15, 2), Some(&Tile::CurveRight));
        assert_eq!(grid.get(15, 3), Some(&Tile::CurveStraight));
        // Row 5 is the bottom border, so its step lands on row 4
        assert_eq!(grid.get(14, 4), Some(&Tile::CurveStraight));
    }

    #[test]
    fn test_lowest_crossing_wins() {
        let mut grid = MapGrid::new(20, 12);
        road_row(&mut grid, 3);
        road_row(&mut grid, 7);

        let result = walk_curve(&mut grid, &CurveParams::RIVER, &mut ScriptedRandom::straight());
        assert_eq!(result.crossing, Some(Crossing { x: 15, y: 7 }));
    }

    #[test]
    fn test_road_beside_walk_counts_as_crossing() {
        let mut grid = MapGrid::new(20, 10);
        grid.set(16, 4, Tile::Road);

        let result = walk_curve(&mut grid, &CurveParams::RIVER, &mut ScriptedRandom::straight());
        assert_eq!(result.crossing, Some(Crossing { x: 15, y: 4 }));
    }

    #[test]
    fn test_crossing_was_next_to_road() {
        let params = MapParams::default();
        for seed in 0..30 {
            let mut rng = MapRng::from_seed(seed);
            let mut grid = MapGrid::new(params.width, params.height);
            paint_main_road(&mut grid, &params, &mut rng);
            let before = grid.clone();

            let river = walk_curve(&mut grid, &params.river, &mut rng);
            let crossing = river.crossing.expect("river should meet the road");
            assert!(
                touches_road(&before, crossing.x, crossing.y),
                "seed {seed}: river crossing {crossing} not next to road"
            );

            let before = grid.clone();
            let wall = walk_curve(&mut grid, &params.wall, &mut rng);
            let Some(crossing) = wall.crossing else {
                continue;
            };
            assert!(
                touches_road(&before, crossing.x, crossing.y),
                "seed {seed}: wall crossing {crossing} not next to road"
            );
        }
    }

    #[test]
    fn test_walk_off_grid_is_clamped() {
        let mut grid = MapGrid::new(6, 8);
        let params = CurveParams {
            start_fraction: 0.0,
            ..CurveParams::RIVER
        };
        // Keep stepping left, far past the west edge
        let result = walk_curve(&mut grid, &params, &mut ScriptedRandom::new(vec![0]));

        assert_eq!(result.trace.last(), Some(&-7));
        for (x, y, tile) in grid.iter() {
            if !grid.is_interior(x, y) {
                assert_eq!(*tile, Tile::Blank);
            }
        }
    }
}
