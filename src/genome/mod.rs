//! Random-key genome containers.
//!
//! - [`Chromosome`]: a fixed-length vector of genes in `[0, 1)`.
//! - [`Individual`]: one chromosome plus its cached fitness.
//! - [`Population`]: a fixed-size ordered collection of individuals.
//!
//! Fitness is a cache of the decoded cost, never an identity: individuals
//! are compared only by fitness, never by gene content. Higher fitness is
//! better.

mod chromosome;
mod individual;
mod population;

pub use chromosome::Chromosome;
pub use individual::Individual;
pub use population::Population;
