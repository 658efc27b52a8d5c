//! WASM-compatible random number generator.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++) which is fast and
//! works with WASM. Entropy is sourced from `getrandom` (browser crypto API).
//! Generation code only sees the [`RandomSource`] trait, so tests can swap in
//! a seeded or scripted source.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random indices.
pub trait RandomSource {
    /// Uniform value in [0, max). `max` must be non-zero.
    fn gen_range(&mut self, max: usize) -> usize;
}

/// A seedable RNG wrapper for WASM.
///
/// Can be seeded for deterministic replay, or created from system entropy.
pub struct WasmRng {
    inner: SmallRng,
}

impl WasmRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for WasmRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for WasmRng {
    #[inline(always)]
    fn gen_range(&mut self, max: usize) -> usize {
        self.inner.random_range(0..max)
    }
}
