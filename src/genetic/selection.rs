//! Parent-selection strategies.
//!
//! The generational loop is the same for RKGA and BRKGA; they differ only
//! in how parents are drawn and whether an elite set is carried over.

use super::config::GeneticConfig;
use crate::error::ConfigError;
use crate::genome::Population;
use crate::random::DiscreteGenerator;

/// Strategy plugged into [`GeneticAlgorithm`](super::GeneticAlgorithm).
pub trait ParentSelection {
    /// Algorithm name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Checks the population size relationships required by the strategy.
    fn validate(&self, config: &GeneticConfig) -> Result<(), ConfigError>;

    /// Prepares internal generators before the initial population is built.
    fn prepare(&mut self, _config: &GeneticConfig) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Updates the strategy's view of the population after it was replaced.
    fn track(&mut self, _population: &Population) {}

    /// Whether [`copy_survivors`](Self::copy_survivors) carries individuals
    /// over between generations.
    fn keeps_survivors(&self) -> bool {
        false
    }

    /// Copies individuals that survive verbatim into the first slots of
    /// `next` and returns how many were copied.
    fn copy_survivors(&self, _population: &Population, _next: &mut Population) -> usize {
        0
    }

    /// Draws `(parent1, parent2)` indices into the current population.
    ///
    /// `population_rng` is configured for `U[0, population_size - 1]`.
    fn select_parents(&mut self, population_rng: &mut DiscreteGenerator) -> (usize, usize);

    /// Index of the fittest individual.
    fn best_index(&self, population: &Population) -> Option<usize> {
        population.best_index()
    }

    /// The strategy's own generator, if it has one.
    fn rng_mut(&mut self) -> Option<&mut DiscreteGenerator> {
        None
    }
}

/// RKGA selection: both parents uniformly from the whole population.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformParents;

impl ParentSelection for UniformParents {
    fn name(&self) -> &'static str {
        "RKGA"
    }

    fn validate(&self, config: &GeneticConfig) -> Result<(), ConfigError> {
        config.validate()
    }

    fn select_parents(&mut self, population_rng: &mut DiscreteGenerator) -> (usize, usize) {
        let p1 = population_rng.get_uniform();
        let mut p2 = population_rng.get_uniform();
        while p2 == p1 {
            p2 = population_rng.get_uniform();
        }
        (p1, p2)
    }
}

/// BRKGA selection: first parent from the elite set, second from the
/// non-elite individuals.
///
/// The elite set holds the indices of the `elite_size` fittest
/// individuals. Ties are broken by population index, lower first.
#[derive(Debug, Clone)]
pub struct EliteParents {
    elite_size: usize,
    elite: Vec<usize>,
    is_elite: Vec<bool>,
    rng: DiscreteGenerator,
}

impl EliteParents {
    pub fn new(elite_size: usize) -> Self {
        Self {
            elite_size,
            elite: Vec::with_capacity(elite_size),
            is_elite: Vec::new(),
            rng: DiscreteGenerator::new(),
        }
    }

    pub fn elite_size(&self) -> usize {
        self.elite_size
    }

    /// Indices of the current elite set, fittest first.
    pub fn elite_indices(&self) -> &[usize] {
        &self.elite
    }

    pub fn is_elite(&self, index: usize) -> bool {
        self.is_elite.get(index).copied().unwrap_or(false)
    }
}

impl ParentSelection for EliteParents {
    fn name(&self) -> &'static str {
        "BRKGA"
    }

    fn validate(&self, config: &GeneticConfig) -> Result<(), ConfigError> {
        if self.elite_size == 0 {
            return Err(ConfigError::EmptyEliteSet);
        }
        if self.elite_size + config.mutant_count >= config.population_size {
            return Err(ConfigError::EliteAndMutantsExceedPopulation {
                elite: self.elite_size,
                mutants: config.mutant_count,
                population: config.population_size,
            });
        }
        config.validate()
    }

    fn prepare(&mut self, _config: &GeneticConfig) -> Result<(), ConfigError> {
        let last = self
            .elite_size
            .checked_sub(1)
            .ok_or(ConfigError::EmptyEliteSet)?;
        self.rng
            .init_uniform(0, last)
            .map_err(|_| ConfigError::EmptyEliteSet)
    }

    fn track(&mut self, population: &Population) {
        let mut ranked: Vec<usize> = (0..population.len()).collect();
        // stable: equal fitness keeps the lower index first
        ranked.sort_by(|&a, &b| population[b].fitness().total_cmp(&population[a].fitness()));
        ranked.truncate(self.elite_size);

        self.is_elite.clear();
        self.is_elite.resize(population.len(), false);
        for &i in &ranked {
            self.is_elite[i] = true;
        }
        self.elite = ranked;
    }

    fn keeps_survivors(&self) -> bool {
        true
    }

    fn copy_survivors(&self, population: &Population, next: &mut Population) -> usize {
        for (slot, &e) in self.elite.iter().enumerate() {
            next[slot].clone_from(&population[e]);
        }
        self.elite.len()
    }

    fn select_parents(&mut self, population_rng: &mut DiscreteGenerator) -> (usize, usize) {
        let p1 = self.elite[self.rng.get_uniform()];
        let mut p2 = population_rng.get_uniform();
        while p2 == p1 || self.is_elite(p2) {
            p2 = population_rng.get_uniform();
        }
        (p1, p2)
    }

    fn best_index(&self, population: &Population) -> Option<usize> {
        self.elite.first().copied().or_else(|| population.best_index())
    }

    fn rng_mut(&mut self) -> Option<&mut DiscreteGenerator> {
        Some(&mut self.rng)
    }
}
