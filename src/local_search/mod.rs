//! Local Search.
//!
//! Iterative neighbourhood climbing: starting from the problem's current
//! solution, repeatedly ask the problem for a strictly improving neighbour
//! (under a [`LocalSearchPolicy`](crate::problem::LocalSearchPolicy)) and
//! adopt it, until no such neighbour exists or the iteration budget is
//! spent.

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::{LocalSearch, LocalSearchOutcome, LocalSearchStats};
