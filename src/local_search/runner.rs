//! Local search execution loop.
//!
//! # Algorithm
//!
//! 1. Start from the problem's current solution with cost `c`.
//! 2. While fewer than `max_iterations` moves were adopted:
//!    a. Ask the problem for its best neighbour under the policy.
//!    b. If there is none, or its cost does not strictly exceed `c`, stop.
//!    c. Otherwise adopt it and set `c` to its cost.
//! 3. Return `c`.

use super::config::LocalSearchConfig;
use crate::metaheuristic::{average, debug_sanity_check, Metaheuristic};
use crate::problem::{Cost, LocalSearchPolicy, Problem};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Why a local search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalSearchOutcome {
    /// No strictly improving neighbour exists.
    Converged,
    /// The iteration budget was spent.
    IterationsExhausted,
}

/// Statistics of the last local search run.
#[derive(Debug, Clone, Default)]
pub struct LocalSearchStats {
    /// Number of adopted moves.
    pub iterations: usize,

    /// Number of calls to [`Problem::best_neighbour`].
    pub explorations: usize,

    /// How the run ended, `None` before the first run.
    pub outcome: Option<LocalSearchOutcome>,

    /// Initial cost followed by the cost of every adopted move.
    pub cost_history: Vec<Cost>,

    pub total_time: Duration,

    /// Time spent inside [`Problem::best_neighbour`].
    pub neighbourhood_time: Duration,
}

impl fmt::Display for LocalSearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_time.as_secs_f64();
        let neighbourhood = self.neighbourhood_time.as_secs_f64();
        writeln!(f, "Local Search algorithm performance:")?;
        writeln!(f, "    Number of iterations:                   {}", self.iterations)?;
        writeln!(f, "    Total execution time:                   {total} s")?;
        writeln!(
            f,
            "    Average iteration time:                 {} s",
            average(total, self.explorations)
        )?;
        writeln!(f, "    Total neighbourhood exploration time:   {neighbourhood} s")?;
        write!(
            f,
            "    Average neighbourhood exploration time: {} s",
            average(neighbourhood, self.explorations)
        )
    }
}

/// Neighbourhood-climbing local search.
#[derive(Debug, Clone, Default)]
pub struct LocalSearch {
    config: LocalSearchConfig,
    stats: LocalSearchStats,
}

impl LocalSearch {
    pub fn new(config: LocalSearchConfig) -> Self {
        Self {
            config,
            stats: LocalSearchStats::default(),
        }
    }

    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    pub fn set_policy(&mut self, policy: LocalSearchPolicy) {
        self.config.policy = policy;
    }

    pub fn set_max_iterations(&mut self, n: usize) {
        self.config.max_iterations = n;
    }

    pub fn stats(&self) -> &LocalSearchStats {
        &self.stats
    }

    /// Clears all statistics. The configuration is kept.
    pub fn reset(&mut self) {
        self.stats = LocalSearchStats::default();
    }

    /// Improves the solution held by `problem`, whose current cost is
    /// `initial_cost`, and returns the final cost.
    ///
    /// Statistics are reset at the start of every run.
    pub fn run<P: Problem>(&mut self, problem: &mut P, initial_cost: Cost) -> Cost {
        self.reset();
        let start = Instant::now();
        let mut cost = initial_cost;
        self.stats.cost_history.push(cost);

        trace!(
            event = "run_start",
            algorithm = "Local Search",
            policy = %self.config.policy,
            max_iterations = self.config.max_iterations,
            cost,
        );

        let outcome = loop {
            if self.stats.iterations >= self.config.max_iterations {
                break LocalSearchOutcome::IterationsExhausted;
            }

            let explore_start = Instant::now();
            let (neighbour, neighbour_cost) = problem.best_neighbour(cost, self.config.policy);
            self.stats.neighbourhood_time += explore_start.elapsed();
            self.stats.explorations += 1;

            match neighbour {
                Some(neighbour) if neighbour_cost > cost => {
                    problem.copy_from(&neighbour);
                    cost = neighbour_cost;
                    self.stats.iterations += 1;
                    self.stats.cost_history.push(cost);
                    debug_sanity_check(problem, "Local Search", "best_neighbour");
                    debug!(
                        event = "move",
                        algorithm = "Local Search",
                        iteration = self.stats.iterations,
                        cost,
                        neighbours_explored = problem.neighbours_explored(),
                    );
                }
                _ => break LocalSearchOutcome::Converged,
            }
        };

        self.stats.outcome = Some(outcome);
        self.stats.total_time = start.elapsed();

        trace!(
            event = "run_end",
            algorithm = "Local Search",
            iterations = self.stats.iterations,
            outcome = ?outcome,
            cost,
        );

        cost
    }
}

impl<P: Problem> Metaheuristic<P> for LocalSearch {
    type Stats = LocalSearchStats;

    fn name(&self) -> &'static str {
        "Local Search"
    }

    fn reset_algorithm(&mut self) {
        self.reset();
    }

    fn execute_algorithm(&mut self, problem: &mut P, cost: &mut Cost) -> bool {
        info!(event = "execute", algorithm = "Local Search", cost = *cost);
        *cost = self.run(problem, *cost);
        true
    }

    fn stats(&self) -> &LocalSearchStats {
        &self.stats
    }
}
