//! Map generation constants

/// How a river or wall curve is walked and painted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
    /// Starting column as a fraction of the map width (0.0-1.0)
    pub start_fraction: f64,
    /// Draw range per row; 0 turns left, 1 turns right, anything else is straight
    pub modulus: u32,
    /// Number of tiles painted per row, starting at the walk column
    pub swath: i32,
    /// Record the walk column of every row
    pub traced: bool,
}

impl CurveParams {
    pub const RIVER: CurveParams = CurveParams {
        start_fraction: 0.75,
        modulus: 6,
        swath: 3,
        traced: true,
    };

    pub const WALL: CurveParams = CurveParams {
        start_fraction: 0.25,
        modulus: 6,
        swath: 2,
        traced: false,
    };

    /// Starting column for a map of the given width
    pub fn start_column(&self, width: usize) -> i32 {
        (width as f64 * self.start_fraction) as i32
    }
}

/// Bridge footprint relative to the river crossing column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BridgeParams {
    /// First deck column offset
    pub deck_start: i32,
    /// Last deck column offset (inclusive)
    pub deck_end: i32,
}

impl BridgeParams {
    /// Road columns placed just outside each end of the deck
    pub fn approach_columns(&self) -> [i32; 2] {
        [self.deck_start - 1, self.deck_end + 1]
    }
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self {
            deck_start: -2,
            deck_end: 5,
        }
    }
}

/// All constants that shape a generated map
#[derive(Clone, Debug, PartialEq)]
pub struct MapParams {
    /// Map width in tiles
    pub width: usize,
    /// Map height in tiles
    pub height: usize,
    /// Stamped centered on row 1
    pub title: String,
    /// Main road draw range; 0 climbs a row, 1 drops a row
    pub road_turn_modulus: u32,
    pub river: CurveParams,
    pub wall: CurveParams,
    pub bridge: BridgeParams,
    /// Columns between the river and the road that follows it south
    pub secondary_road_offset: i32,
}

impl MapParams {
    pub const DEFAULT_TITLE: &'static str = "ADVENTURE MAP";

    /// Reference constants at a different map size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Rows the main road may occupy: `[height/5, height*4/5)`
    pub fn road_band(&self) -> (i32, i32) {
        let h = self.height as i32;
        (h / 5, h * 4 / 5)
    }

    /// Title length in characters (not bytes)
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// First column of the centered title
    pub fn title_start(&self) -> i32 {
        (self.width as i32 - self.title_len() as i32) / 2
    }
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            width: 100,
            height: 30,
            title: Self::DEFAULT_TITLE.to_string(),
            road_turn_modulus: 10,
            river: CurveParams::RIVER,
            wall: CurveParams::WALL,
            bridge: BridgeParams::default(),
            secondary_road_offset: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_start_columns() {
        assert_eq!(CurveParams::RIVER.start_column(100), 75);
        assert_eq!(CurveParams::WALL.start_column(100), 25);
        assert_eq!(CurveParams::RIVER.start_column(20), 15);
        assert_eq!(CurveParams::WALL.start_column(20), 5);
    }

    #[test]
    fn test_road_band() {
        assert_eq!(MapParams::default().road_band(), (6, 24));
        assert_eq!(MapParams::with_size(20, 10).road_band(), (2, 8));
    }

    #[test]
    fn test_title_centering() {
        let params = MapParams::default();
        assert_eq!(params.title_len(), 13);
        assert_eq!(params.title_start(), 43);
        assert_eq!(MapParams::with_size(20, 10).title_start(), 3);
    }

    #[test]
    fn test_bridge_approaches() {
        assert_eq!(BridgeParams::default().approach_columns(), [-3, 6]);
    }
}
