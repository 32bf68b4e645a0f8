//! GRASP execution loop.
//!
//! # Algorithm
//!
//! ```text
//! best_f = -inf
//! repeat max_iterations times:
//!     s = best.empty()
//!     c = s.random_construct(rng, alpha)     // infeasible: count and skip
//!     c = local_search(s, c)
//!     if c > best_f: best_f = c; best.copy_from(s)
//! ```

use super::config::GraspConfig;
use crate::error::ConfigError;
use crate::local_search::{LocalSearch, LocalSearchConfig};
use crate::metaheuristic::{average, debug_sanity_check, Metaheuristic};
use crate::problem::{Cost, Problem};
use crate::random::DiscreteGenerator;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, trace};

/// Statistics of the last GRASP run.
#[derive(Debug, Clone, Default)]
pub struct GraspStats {
    /// Iterations executed.
    pub iterations: usize,

    /// Iterations whose construction was infeasible.
    pub failed_constructions: usize,

    /// Best cost after each iteration.
    pub best_history: Vec<Cost>,

    pub total_time: Duration,

    pub construct_time: Duration,

    pub local_search_time: Duration,
}

impl fmt::Display for GraspStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.iterations;
        let total = self.total_time.as_secs_f64();
        let construct = self.construct_time.as_secs_f64();
        let local = self.local_search_time.as_secs_f64();
        writeln!(
            f,
            "GRASP metaheuristic performance (for a total of {n} iterations):"
        )?;
        writeln!(f, "    Total execution time:      {total} s")?;
        writeln!(f, "    Average iteration time:    {} s", average(total, n))?;
        writeln!(f, "    Total construction time:   {construct} s")?;
        writeln!(f, "    Average construction time: {} s", average(construct, n))?;
        writeln!(f, "    Failed constructions:      {}", self.failed_constructions)?;
        writeln!(f, "    Total local search time:   {local} s")?;
        write!(f, "    Average local search time: {} s", average(local, n))
    }
}

/// GRASP over any [`Problem`].
#[derive(Debug, Clone)]
pub struct Grasp {
    config: GraspConfig,
    rng: DiscreteGenerator,
    stats: GraspStats,
}

impl Grasp {
    pub fn new(config: GraspConfig) -> Self {
        let rng = DiscreteGenerator::from_seed(config.seed);
        Self {
            config,
            rng,
            stats: GraspStats::default(),
        }
    }

    pub fn config(&self) -> &GraspConfig {
        &self.config
    }

    pub fn stats(&self) -> &GraspStats {
        &self.stats
    }

    /// The generator handed to [`Problem::random_construct`].
    pub fn rng_mut(&mut self) -> &mut DiscreteGenerator {
        &mut self.rng
    }

    pub fn reset(&mut self) {
        self.stats = GraspStats::default();
    }

    /// Runs GRASP, storing the best solution found in `best`.
    ///
    /// Returns the best cost, or `-inf` if every construction was
    /// infeasible, in which case `best` is left unchanged.
    ///
    /// # Errors
    /// Returns [`ConfigError::Alpha`] before touching `best` if `alpha`
    /// lies outside `[0, 1]`.
    pub fn run<P: Problem>(&mut self, best: &mut P) -> Result<Cost, ConfigError> {
        self.config.validate()?;
        self.reset();

        let start = Instant::now();
        let mut local_search = LocalSearch::new(LocalSearchConfig::new(
            self.config.local_iterations,
            self.config.policy,
        ));
        let mut best_cost = f64::NEG_INFINITY;

        info!(
            event = "run_start",
            algorithm = "GRASP",
            iterations = self.config.max_iterations,
            alpha = self.config.alpha,
            policy = %self.config.policy,
        );

        for iteration in 1..=self.config.max_iterations {
            let mut scratch = best.empty();

            let construct_start = Instant::now();
            let constructed = scratch.random_construct(&mut self.rng, self.config.alpha);
            self.stats.construct_time += construct_start.elapsed();
            self.stats.iterations = iteration;

            match constructed {
                Ok(constructed_cost) => {
                    debug_sanity_check(&scratch, "GRASP", "random_construct");
                    trace!(event = "construct", iteration, cost = constructed_cost);

                    let ls_start = Instant::now();
                    let improved_cost = local_search.run(&mut scratch, constructed_cost);
                    self.stats.local_search_time += ls_start.elapsed();
                    debug_sanity_check(&scratch, "GRASP", "local_search");
                    trace!(event = "local_search", iteration, cost = improved_cost);

                    if improved_cost > best_cost {
                        best_cost = improved_cost;
                        best.copy_from(&scratch);
                        debug!(
                            event = "new_best",
                            algorithm = "GRASP",
                            iteration,
                            cost = best_cost,
                        );
                    }
                }
                Err(infeasible) => {
                    self.stats.failed_constructions += 1;
                    debug!(
                        event = "construct_failed",
                        iteration,
                        reason = infeasible.reason(),
                    );
                }
            }

            self.stats.best_history.push(best_cost);
        }

        self.stats.total_time = start.elapsed();

        info!(
            event = "run_end",
            algorithm = "GRASP",
            cost = best_cost,
            failed_constructions = self.stats.failed_constructions,
            duration_ms = self.stats.total_time.as_millis() as u64,
        );

        Ok(best_cost)
    }
}

impl<P: Problem> Metaheuristic<P> for Grasp {
    type Stats = GraspStats;

    fn name(&self) -> &'static str {
        "GRASP"
    }

    fn reset_algorithm(&mut self) {
        self.reset();
    }

    fn execute_algorithm(&mut self, problem: &mut P, cost: &mut Cost) -> bool {
        match self.run(problem) {
            Ok(best_cost) => {
                *cost = best_cost;
                true
            }
            Err(err) => {
                error!(event = "invalid_config", algorithm = "GRASP", error = %err);
                false
            }
        }
    }

    fn stats(&self) -> &GraspStats {
        &self.stats
    }
}
