//! Discrete generator: uniform integers and binomial draws.

use super::engine::{create_engine, entropy_engine, Engine};
use crate::error::RandomError;
use rand::distr::Distribution;
use rand::{Rng, RngCore};
use rand_distr::Binomial;

/// Generates `usize` values following a uniform distribution `U[lo, hi]`
/// and `u64` values following a binomial distribution `B(n, p)`.
///
/// The uniform range defaults to `[0, 0]`. The binomial distribution is
/// unset until [`init_binomial`](Self::init_binomial) is called, and
/// [`get_binomial`](Self::get_binomial) returns `0` until then.
///
/// # Examples
///
/// ```
/// use rk_metaheur::random::DiscreteGenerator;
///
/// let mut rng = DiscreteGenerator::new();
/// rng.init_uniform(0, 9).unwrap();
/// let x = rng.get_uniform();
/// assert!(x <= 9);
/// ```
#[derive(Debug, Clone)]
pub struct DiscreteGenerator {
    engine: Engine,
    lo: usize,
    hi: usize,
    binomial: Option<Binomial>,
}

impl Default for DiscreteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscreteGenerator {
    /// Creates a generator with the default deterministic seed.
    pub fn new() -> Self {
        Self::from_seed(None)
    }

    /// Creates a generator seeded with `seed` (`None` uses the default seed).
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self {
            engine: create_engine(seed),
            lo: 0,
            hi: 0,
            binomial: None,
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

    /// Configures the uniform distribution over the closed range `[lo, hi]`.
    pub fn init_uniform(&mut self, lo: usize, hi: usize) -> Result<(), RandomError> {
        if lo > hi {
            return Err(RandomError::InvalidRange {
                lo: lo as f64,
                hi: hi as f64,
            });
        }
        self.lo = lo;
        self.hi = hi;
        Ok(())
    }

    /// Configures the binomial distribution `B(n, p)`.
    pub fn init_binomial(&mut self, n: u64, p: f64) -> Result<(), RandomError> {
        let binomial = Binomial::new(n, p).map_err(|_| RandomError::InvalidBinomial { n, p })?;
        self.binomial = Some(binomial);
        Ok(())
    }

    /// Draws one value from `U[lo, hi]`.
    pub fn get_uniform(&mut self) -> usize {
        self.engine.random_range(self.lo..=self.hi)
    }

    /// Draws one value from `B(n, p)`.
    pub fn get_binomial(&mut self) -> u64 {
        match &self.binomial {
            Some(binomial) => binomial.sample(&mut self.engine),
            None => 0,
        }
    }

    /// Fills `buffer` with independent draws from `U[lo, hi]`.
    pub fn fill_uniform(&mut self, buffer: &mut [usize]) {
        for slot in buffer.iter_mut() {
            *slot = self.get_uniform();
        }
    }

    /// Current closed range of the uniform distribution.
    pub fn uniform_range(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }
}

impl RngCore for DiscreteGenerator {
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
