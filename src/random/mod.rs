//! Random number generators used by the algorithms.
//!
//! Two generator kinds are built on the same engine type
//! ([`Engine`], a seedable `StdRng`):
//!
//! - [`DiscreteGenerator`]: uniform integers in a closed range and
//!   binomial draws.
//! - [`ContinuousGenerator`]: uniform reals in a half-open range.
//!
//! Each generator owns its engine. Distributions are (re)configured with
//! `init_uniform` / `init_binomial` without re-seeding, so reconfiguring
//! never perturbs the engine's state. Every generator starts from the fixed
//! [`DEFAULT_SEED`] so that runs are reproducible; call `seed()` to switch
//! to an OS-entropy seed.

mod continuous;
mod discrete;
mod engine;

pub use continuous::ContinuousGenerator;
pub use discrete::DiscreteGenerator;
pub use engine::{Engine, DEFAULT_SEED};
