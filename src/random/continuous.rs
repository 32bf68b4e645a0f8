//! Continuous generator: uniform reals.

use super::engine::{create_engine, entropy_engine, Engine};
use crate::error::RandomError;
use rand::{Rng, RngCore};

/// Generates `f64` values following a uniform distribution `U[lo, hi)`.
///
/// The range defaults to `[0, 1)`, the domain of random-key genes.
/// Binomial draws are not defined for continuous values:
/// [`init_binomial`](Self::init_binomial) does nothing and
/// [`get_binomial`](Self::get_binomial) always returns `0.0`.
#[derive(Debug, Clone)]
pub struct ContinuousGenerator {
    engine: Engine,
    lo: f64,
    hi: f64,
}

impl Default for ContinuousGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinuousGenerator {
    /// Creates a generator with the default deterministic seed.
    pub fn new() -> Self {
        Self::from_seed(None)
    }

    /// Creates a generator seeded with `seed` (`None` uses the default seed).
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self {
            engine: create_engine(seed),
            lo: 0.0,
            hi: 1.0,
        }
    }

    /// Re-seeds the engine from operating-system entropy.
    pub fn seed(&mut self) {
        self.engine = entropy_engine();
    }

    /// Re-seeds the engine with a fixed seed.
    pub fn seed_from(&mut self, seed: u64) {
        self.engine = create_engine(Some(seed));
    }

    /// Configures the uniform distribution over `[lo, hi)`.
    pub fn init_uniform(&mut self, lo: f64, hi: f64) -> Result<(), RandomError> {
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(RandomError::InvalidRange { lo, hi });
        }
        self.lo = lo;
        self.hi = hi;
        Ok(())
    }

    /// No binomial distribution exists for continuous values.
    pub fn init_binomial(&mut self, _n: u64, _p: f64) {}

    /// Draws one value from `U[lo, hi)`.
    pub fn get_uniform(&mut self) -> f64 {
        self.engine.random_range(self.lo..self.hi)
    }

    /// Always `0.0`.
    pub fn get_binomial(&mut self) -> f64 {
        0.0
    }

    /// Fills `buffer` with independent draws from `U[lo, hi)`.
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for slot in buffer.iter_mut() {
            *slot = self.get_uniform();
        }
    }

    /// Current half-open range of the uniform distribution.
    pub fn uniform_range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}

impl RngCore for ContinuousGenerator {
    fn next_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.engine.fill_bytes(dest)
    }
}
