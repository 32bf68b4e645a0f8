//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! Each iteration builds a fresh solution with a randomized greedy
//! construction (restricted candidate list controlled by `alpha`) and
//! improves it with [`LocalSearch`](crate::local_search::LocalSearch).
//! The best solution across all iterations is kept. Constructions that
//! turn out infeasible are counted and skipped.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy randomized adaptive search procedures",
//!   *J. Global Optimization* 6, 109–133

mod config;
mod rcl;
mod runner;

pub use config::GraspConfig;
pub use rcl::select_candidate;
pub use runner::{Grasp, GraspStats};
