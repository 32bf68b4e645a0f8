//! Entry points shared by every algorithm family.

use crate::problem::{Cost, Problem};
use std::fmt;

/// An algorithm that improves the solution held by a [`Problem`].
///
/// Each family implements the idiomatic `run` method returning a
/// `Result`; this trait is the uniform façade drivers call.
pub trait Metaheuristic<P: Problem> {
    /// Timing counters and run statistics.
    type Stats: fmt::Display;

    /// Short human-readable name ("GRASP", "BRKGA", ...).
    fn name(&self) -> &'static str;

    /// Resets timing counters and iteration statistics.
    fn reset_algorithm(&mut self);

    /// Runs the algorithm on `problem`.
    ///
    /// `cost` is read as the initial cost where the algorithm needs one
    /// (local search) and always receives the final cost. Returns `false`
    /// without touching `problem` or `cost` if the configuration is invalid.
    fn execute_algorithm(&mut self, problem: &mut P, cost: &mut Cost) -> bool;

    /// Statistics of the last run.
    fn stats(&self) -> &Self::Stats;

    /// Prints the timing summary to standard output.
    fn print_performance(&self) {
        println!("{}", self.stats());
    }
}

/// Average of `total` seconds over `count` items, `0` when `count` is zero.
pub(crate) fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Runs [`Problem::sanity_check`] in debug builds and logs a failure.
pub(crate) fn debug_sanity_check<P: Problem>(
    problem: &P,
    algorithm: &'static str,
    stage: &'static str,
) {
    if cfg!(debug_assertions) && !problem.sanity_check() {
        tracing::warn!(event = "sanity_check_failed", algorithm, stage);
    }
}
