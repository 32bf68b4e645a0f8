//! Random-key genetic algorithms (RKGA and BRKGA).
//!
//! Chromosomes are vectors of `f64` keys in `[0, 1)`; the
//! [`Problem::decode`](crate::problem::Problem::decode) implementation maps
//! keys to a solution and its cost. The engine owns population management:
//! mutant injection, crossover and, for BRKGA, the elite copy.
//!
//! Both variants share one generational loop, [`GeneticAlgorithm`],
//! parameterized by a [`ParentSelection`] strategy:
//!
//! - [`Rkga`]: two distinct parents drawn uniformly from the population.
//! - [`Brkga`]: one elite and one non-elite parent; the elite set survives
//!   unchanged into the next generation.
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and optimization"
//! - Goncalves & Resende (2011), "Biased random-key genetic algorithms for
//!   combinatorial optimization", *J. Heuristics* 17(5), 487–525

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GeneticConfig;
pub use runner::{Brkga, GeneticAlgorithm, GeneticStats, Rkga};
pub use selection::{EliteParents, ParentSelection, UniformParents};
