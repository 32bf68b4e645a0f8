//! Problem-agnostic metaheuristic optimization framework.
//!
//! Provides generic implementations of four metaheuristics over a single
//! problem contract:
//!
//! - **Local Search**: neighbourhood climbing with first- or
//!   best-improvement policy.
//! - **GRASP**: Greedy Randomized Adaptive Search Procedure, randomized
//!   greedy construction followed by local search.
//! - **RKGA**: Random-Key Genetic Algorithm, uniform parent selection.
//! - **BRKGA**: Biased Random-Key Genetic Algorithm, elite-biased parent
//!   selection with elite survival.
//!
//! # Architecture
//!
//! A concrete problem implements [`problem::Problem`]: construct an empty
//! solution, decode a random-key [`genome::Chromosome`], build a randomized
//! greedy solution, and explore its neighbourhood. The algorithms contain no
//! domain-specific concepts and share the [`metaheuristic::Metaheuristic`]
//! interface. Cost is maximized; infeasible outcomes are reported through
//! [`error::Infeasible`] and scored as `-inf`.
//!
//! Everything is single-threaded and deterministic for a given seed.

pub mod error;
pub mod genetic;
pub mod genome;
pub mod grasp;
pub mod local_search;
pub mod metaheuristic;
pub mod problem;
pub mod random;

#[cfg(test)]
mod fixtures;

pub use error::{ConfigError, Infeasible, RandomError};
pub use metaheuristic::Metaheuristic;
pub use problem::{Cost, LocalSearchPolicy, Problem};
