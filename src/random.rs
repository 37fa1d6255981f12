//! Random sources for map generation
//!
//! Every stochastic decision draws from one shared stream in a fixed call
//! order, so a seed fully determines the map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform integer source consulted by the feature painters.
pub trait RandomSource {
    /// Uniform integer in `[0, max)`. Returns 0 when `max` is 0 or 1.
    fn below(&mut self, max: u32) -> u32;
}

/// Seeded ChaCha8 stream used for real maps.
#[derive(Clone, Debug)]
pub struct MapRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl MapRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed drawn from the thread RNG
    pub fn random() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for MapRng {
    fn below(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        self.rng.gen_range(0..max)
    }
}

/// Replays a fixed script of draws, each reduced modulo the requested range.
///
/// A script of `[2]` never triggers any 0/1 branch, which keeps every road
/// level and every curve straight. Handy for checking structural placement.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    script: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<u32>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Script that keeps every walk straight and plants no random trees
    pub fn straight() -> Self {
        Self::new(vec![2])
    }

    /// Number of draws served so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, max: u32) -> u32 {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        if max <= 1 {
            0
        } else {
            value % max
        }
    }
}
