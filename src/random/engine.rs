//! Engine shared by all generator kinds.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Underlying pseudo-random engine.
pub type Engine = StdRng;

/// Seed used by every generator until it is explicitly re-seeded.
pub const DEFAULT_SEED: u64 = 5489;

/// Creates an engine from an optional seed, falling back to [`DEFAULT_SEED`].
pub(crate) fn create_engine(seed: Option<u64>) -> Engine {
    StdRng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED))
}

/// Creates an engine seeded from operating-system entropy.
pub(crate) fn entropy_engine() -> Engine {
    StdRng::from_os_rng()
}
