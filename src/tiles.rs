//! Tile alphabet for the adventure map
//!
//! Every cell of the map holds exactly one `Tile`. The set is closed apart
//! from `Glyph`, which carries the characters of the stamped map title.

/// Which corner of the border frame a corner tile sits in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    UpperLeft,
    UpperRight,
    LowerRight,
    LowerLeft,
}

/// A single map cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Open grass
    #[default]
    Blank,
    Forest,
    /// Walkable road. Bridge decks use this tile too.
    Road,
    BridgeRailing,
    /// Curve segment heading straight down (river or wall)
    CurveStraight,
    /// Curve segment that stepped one column left
    CurveLeft,
    /// Curve segment that stepped one column right
    CurveRight,
    TurretLeft,
    TurretRight,
    BorderHorizontal,
    BorderVertical,
    BorderCorner(Corner),
    /// A character of the map title
    Glyph(char),
}

impl Tile {
    /// Get the display character for this tile
    pub const fn to_char(self) -> char {
        match self {
            Tile::Blank => ' ',
            Tile::Forest => 'T',
            Tile::Road => '#',
            Tile::BridgeRailing => '=',
            Tile::CurveStraight => '|',
            Tile::CurveLeft => '/',
            Tile::CurveRight => '\\',
            Tile::TurretLeft => '[',
            Tile::TurretRight => ']',
            Tile::BorderHorizontal => '\u{2500}', // ─
            Tile::BorderVertical => '\u{00A6}',   // ¦
            Tile::BorderCorner(Corner::UpperLeft) => '\u{250F}',  // ┏
            Tile::BorderCorner(Corner::UpperRight) => '\u{2513}', // ┓
            Tile::BorderCorner(Corner::LowerRight) => '\u{251B}', // ┛
            Tile::BorderCorner(Corner::LowerLeft) => '\u{2517}',  // ┗
            Tile::Glyph(c) => c,
        }
    }

    /// River and wall segments share these three tiles
    pub const fn is_curve(self) -> bool {
        matches!(self, Tile::CurveStraight | Tile::CurveLeft | Tile::CurveRight)
    }

    pub const fn is_border(self) -> bool {
        matches!(
            self,
            Tile::BorderHorizontal | Tile::BorderVertical | Tile::BorderCorner(_)
        )
    }

    /// Railings and turrets are drawn as masonry
    pub const fn is_masonry(self) -> bool {
        matches!(self, Tile::BridgeRailing | Tile::TurretLeft | Tile::TurretRight)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_deck_shares_road_glyph() {
        assert_eq!(Tile::Road.to_char(), '#');
    }

    #[test]
    fn test_corners_are_distinct() {
        let corners = [
            Corner::UpperLeft,
            Corner::UpperRight,
            Corner::LowerRight,
            Corner::LowerLeft,
        ]
        .map(|c| Tile::BorderCorner(c).to_char());

        for (i, a) in corners.iter().enumerate() {
            for b in &corners[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_categories() {
        assert!(Tile::CurveLeft.is_curve());
        assert!(!Tile::Road.is_curve());
        assert!(Tile::BorderCorner(Corner::LowerLeft).is_border());
        assert!(Tile::TurretRight.is_masonry());
        assert!(!Tile::Glyph('A').is_border());
    }
}
