//! Randomness sources for quiz generation.
//!
//! Two sources exist and are always passed explicitly:
//!   - `DeterministicRng` (Mulberry32) drives hybrid composition, so a
//!     seed plus the shuffle flags fully determine the output.
//!   - `AmbientRng` drives the content fallback, which does not need to be
//!     reproducible.
//!
//! Neither source is suitable for anything security sensitive.

use rand::Rng;
use serde::{Deserialize, Serialize};

const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const SEED_FOLD_START: u32 = 2_166_136_261;

/// A stream of floats in [0.0, 1.0).
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Seed supplied by a caller: either an integer or any string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Seed {
    Number(i64),
    Text(String),
}

impl Seed {
    /// Reduce the seed to the 32-bit state Mulberry32 runs on.
    pub fn resolve(&self) -> u32 {
        match self {
            Seed::Number(n) => *n as u32,
            Seed::Text(s) => fold_seed(s),
        }
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed::Number(i64::from(value))
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_string())
    }
}

/// Fold a string into a seed: acc = acc * 31 + code_unit (mod 2^32),
/// over UTF-16 code units so the result is platform independent.
pub fn fold_seed(text: &str) -> u32 {
    text.encode_utf16().fold(SEED_FOLD_START, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(u32::from(unit))
    })
}

/// Mulberry32 generator.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    state: u32,
}

impl DeterministicRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_seed(seed: &Seed) -> Self {
        Self::new(seed.resolve())
    }

    /// Advance the state and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RandomSource for DeterministicRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Thread-local, non-reproducible randomness.
pub struct AmbientRng {
    inner: rand::rngs::ThreadRng,
}

impl AmbientRng {
    pub fn new() -> Self {
        Self {
            inner: rand::thread_rng(),
        }
    }
}

impl Default for AmbientRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for AmbientRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Seed for callers that did not supply one.
pub fn random_seed() -> u32 {
    rand::random::<u32>()
}
