//! Core trait for problems solved by the metaheuristics.

use crate::error::Infeasible;
use crate::genome::Chromosome;
use crate::random::DiscreteGenerator;
use std::fmt;

/// Objective value of a solution. Higher is better.
///
/// Minimization problems report their cost negated, so that every
/// algorithm maximizes. Infeasible genotypes are ranked at
/// `f64::NEG_INFINITY`.
pub type Cost = f64;

/// How a neighbourhood is explored by local search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocalSearchPolicy {
    /// Stop at the first strictly improving neighbour.
    FirstImprovement,
    /// Explore the whole neighbourhood and keep the best strict improvement.
    #[default]
    BestImprovement,
}

impl fmt::Display for LocalSearchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalSearchPolicy::FirstImprovement => write!(f, "First-Improvement"),
            LocalSearchPolicy::BestImprovement => write!(f, "Best-Improvement"),
        }
    }
}

/// A combinatorial optimization problem holding its best-known solution.
///
/// `Clone` is the deep copy: a clone carries the instance data and the
/// current solution, and is fully independent of the original.
///
/// # Examples
///
/// ```ignore
/// #[derive(Clone)]
/// struct Knapsack { values: Vec<f64>, weights: Vec<f64>, capacity: f64, taken: Vec<bool> }
///
/// impl Problem for Knapsack {
///     fn empty(&self) -> Self {
///         Knapsack { taken: vec![false; self.values.len()], ..self.clone() }
///     }
///
///     fn decode(&mut self, chromosome: &Chromosome) -> Result<Cost, Infeasible> {
///         // keys > 0.5 mean "take item i"
///         ...
///     }
///     ...
/// }
/// ```
pub trait Problem: Clone {
    /// A fresh instance sharing the instance data but with no solution assigned.
    fn empty(&self) -> Self;

    /// Deep-copies `other`'s state into `self`, reusing `self`'s storage.
    fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Converts a genotype into a concrete solution stored in `self` and
    /// returns its cost.
    ///
    /// Must be deterministic: decoding the same chromosome on the same
    /// state yields the same cost. The chromosome is never modified.
    fn decode(&mut self, chromosome: &Chromosome) -> Result<Cost, Infeasible>;

    /// Builds a solution directly using a restricted candidate list.
    ///
    /// `alpha = 0` is purely greedy; `alpha = 1` picks uniformly among all
    /// feasible candidates. See [`crate::grasp::select_candidate`].
    fn random_construct(
        &mut self,
        rng: &mut DiscreteGenerator,
        alpha: f64,
    ) -> Result<Cost, Infeasible>;

    /// Explores the neighbourhood of the current solution.
    ///
    /// Returns a strictly improving neighbour and its cost, or
    /// `(None, current_cost)` if none exists. Under
    /// [`LocalSearchPolicy::FirstImprovement`] the exploration stops at
    /// the first strict improvement.
    fn best_neighbour(&mut self, current_cost: Cost, policy: LocalSearchPolicy)
        -> (Option<Self>, Cost);

    /// Re-verifies feasibility of the current solution. Diagnostic only.
    fn sanity_check(&self) -> bool {
        true
    }

    /// Number of neighbours explored so far. Diagnostic only.
    fn neighbours_explored(&self) -> usize {
        0
    }
}
