//! Knapsack problem implementing the full problem contract, for tests.

use crate::error::Infeasible;
use crate::genome::Chromosome;
use crate::grasp::select_candidate;
use crate::problem::{Cost, LocalSearchPolicy, Problem};
use crate::random::DiscreteGenerator;

/// 0/1 knapsack maximizing the total value of the selected items.
///
/// - `decode`: item `i` is taken when gene `i > 0.5`; overweight
///   selections are infeasible.
/// - `random_construct`: adds items by value/weight ratio through the RCL
///   until nothing fits; infeasible if the result is worth less than
///   `min_value`.
/// - `best_neighbour`: add-one and swap-one moves.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Knapsack {
    values: Vec<f64>,
    weights: Vec<f64>,
    capacity: f64,
    min_value: f64,
    taken: Vec<bool>,
    explored: usize,
}

impl Knapsack {
    pub(crate) fn new(values: Vec<f64>, weights: Vec<f64>, capacity: f64) -> Self {
        let n = values.len();
        Self {
            values,
            weights,
            capacity,
            min_value: 0.0,
            taken: vec![false; n],
            explored: 0,
        }
    }

    /// Ten items with pairwise distinct value/weight ratios.
    pub(crate) fn sample() -> Self {
        Self::new(
            vec![11.0, 13.0, 7.0, 9.0, 12.0, 5.0, 8.0, 10.0, 6.0, 4.0],
            vec![5.0, 7.0, 3.0, 4.0, 6.0, 2.0, 5.0, 6.0, 4.0, 3.0],
            20.0,
        )
    }

    pub(crate) fn with_min_value(mut self, min_value: f64) -> Self {
        self.min_value = min_value;
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn taken(&self) -> &[bool] {
        &self.taken
    }

    pub(crate) fn value(&self) -> f64 {
        self.selected().map(|i| self.values[i]).sum()
    }

    pub(crate) fn weight(&self) -> f64 {
        self.selected().map(|i| self.weights[i]).sum()
    }

    fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.taken
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t)
            .map(|(i, _)| i)
    }
}

impl Problem for Knapsack {
    fn empty(&self) -> Self {
        Self {
            taken: vec![false; self.len()],
            explored: 0,
            ..self.clone()
        }
    }

    fn decode(&mut self, chromosome: &Chromosome) -> Result<Cost, Infeasible> {
        for (t, &gene) in self.taken.iter_mut().zip(chromosome.iter()) {
            *t = gene > 0.5;
        }
        if self.weight() > self.capacity {
            return Err(Infeasible::new(format!(
                "weight {} exceeds capacity {}",
                self.weight(),
                self.capacity
            )));
        }
        Ok(self.value())
    }

    fn random_construct(
        &mut self,
        rng: &mut DiscreteGenerator,
        alpha: f64,
    ) -> Result<Cost, Infeasible> {
        self.taken.iter_mut().for_each(|t| *t = false);
        let mut load = 0.0;
        loop {
            let candidates: Vec<usize> = (0..self.len())
                .filter(|&i| !self.taken[i] && load + self.weights[i] <= self.capacity)
                .collect();
            let greedy: Vec<f64> = candidates
                .iter()
                .map(|&i| -self.values[i] / self.weights[i])
                .collect();
            let Some(pick) = select_candidate(&greedy, alpha, rng) else {
                break;
            };
            let item = candidates[pick];
            self.taken[item] = true;
            load += self.weights[item];
        }
        let value = self.value();
        if value < self.min_value {
            return Err(Infeasible::new(format!(
                "value {value} below required {}",
                self.min_value
            )));
        }
        Ok(value)
    }

    fn best_neighbour(
        &mut self,
        current_cost: Cost,
        policy: LocalSearchPolicy,
    ) -> (Option<Self>, Cost) {
        let n = self.len();
        let load = self.weight();
        let value = self.value();
        let mut best: Option<(usize, Option<usize>)> = None;
        let mut best_cost = current_cost;

        let mut moves = Vec::new();
        for j in (0..n).filter(|&j| !self.taken[j]) {
            moves.push((j, None));
            for i in (0..n).filter(|&i| self.taken[i]) {
                moves.push((j, Some(i)));
            }
        }

        for (add, remove) in moves {
            self.explored += 1;
            let (w, v) = match remove {
                Some(r) => (
                    load - self.weights[r] + self.weights[add],
                    value - self.values[r] + self.values[add],
                ),
                None => (load + self.weights[add], value + self.values[add]),
            };
            if w <= self.capacity && v > best_cost {
                best_cost = v;
                best = Some((add, remove));
                if policy == LocalSearchPolicy::FirstImprovement {
                    break;
                }
            }
        }

        match best {
            Some((add, remove)) => {
                let mut neighbour = self.clone();
                neighbour.taken[add] = true;
                if let Some(r) = remove {
                    neighbour.taken[r] = false;
                }
                (Some(neighbour), best_cost)
            }
            None => (None, current_cost),
        }
    }

    fn sanity_check(&self) -> bool {
        self.weight() <= self.capacity
    }

    fn neighbours_explored(&self) -> usize {
        self.explored
    }
}
