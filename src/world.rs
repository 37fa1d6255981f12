//! Map generation pipeline
//!
//! [`MapBuilder`] owns the grid and the random stream for the length of one
//! generation run and hands each painter what it needs. The painters run in
//! a fixed order: forest, main road, river, bridge, secondary road, wall,
//! gate, border, title. Crossings and the river trace are passed along as
//! values rather than kept in shared state.

use tracing::{debug, debug_span, warn};

use crate::features::{self, CurveResult, MapGrid};
use crate::params::MapParams;
use crate::random::RandomSource;
use crate::tiles::Tile;

/// A finished map. Read-only once built.
#[derive(Clone, Debug)]
pub struct AdventureMap {
    /// Constants the map was built with
    pub params: MapParams,
    /// Final tile grid
    pub grid: MapGrid,
    /// River walk output (crossing and per-row trace)
    pub river: CurveResult,
    /// Wall walk output (crossing only)
    pub wall: CurveResult,
}

impl AdventureMap {
    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.grid.get(x, y).copied()
    }
}

/// Generation context for a single map
pub struct MapBuilder<'a, R: RandomSource + ?Sized> {
    params: &'a MapParams,
    rng: &'a mut R,
    grid: MapGrid,
}

impl<'a, R: RandomSource + ?Sized> MapBuilder<'a, R> {
    /// Allocate a blank grid sized by `params`
    pub fn new(params: &'a MapParams, rng: &'a mut R) -> Self {
        Self {
            params,
            rng,
            grid: MapGrid::new(params.width, params.height),
        }
    }

    /// Run every painter in order and return the finished map
    pub fn build(mut self) -> AdventureMap {
        let params = self.params;
        let span = debug_span!("generate_map", width = params.width, height = params.height);
        let _guard = span.enter();

        features::paint_forest(&mut self.grid, self.rng);
        debug!("forest planted");

        features::paint_main_road(&mut self.grid, params, self.rng);
        debug!("main road laid");

        let river = features::walk_curve(&mut self.grid, &params.river, self.rng);
        debug!(crossing = ?river.crossing, trace_len = river.trace.len(), "river walked");

        match river.crossing {
            Some(crossing) => {
                features::paint_bridge(&mut self.grid, crossing, &params.bridge);
                features::paint_secondary_road(
                    &mut self.grid,
                    crossing,
                    &river.trace,
                    params.secondary_road_offset,
                );
                debug!(%crossing, "bridge and river road placed");
            }
            None => warn!("river never met the main road; no bridge or river road"),
        }

        let wall = features::walk_curve(&mut self.grid, &params.wall, self.rng);
        debug!(crossing = ?wall.crossing, "wall walked");

        match wall.crossing {
            Some(crossing) => {
                features::paint_gate(&mut self.grid, crossing);
                debug!(%crossing, "gate carved");
            }
            None => warn!("wall never met the main road; no gate"),
        }

        features::paint_border(&mut self.grid);
        features::paint_title(&mut self.grid, &params.title, params.title_start());
        debug!("frame and title drawn");

        AdventureMap {
            params: params.clone(),
            grid: self.grid,
            river,
            wall,
        }
    }
}

/// Generate a complete map from `params`, drawing from `rng`
pub fn generate_map<R: RandomSource + ?Sized>(params: &MapParams, rng: &mut R) -> AdventureMap {
    MapBuilder::new(params, rng).build()
}
