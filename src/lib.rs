//! Procedural adventure map generator
//!
//! Paints forest, roads, a river with a bridge, a gated wall, a border and a
//! title onto a fixed-size grid, then renders it as colored ASCII.

pub mod ascii;
pub mod features;
pub mod params;
pub mod random;
pub mod tilemap;
pub mod tiles;
pub mod world;

pub use params::MapParams;
pub use random::{MapRng, RandomSource, ScriptedRandom};
pub use world::{generate_map, AdventureMap, MapBuilder};
