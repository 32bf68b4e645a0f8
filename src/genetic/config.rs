//! Genetic algorithm configuration shared by RKGA and BRKGA.

use crate::error::ConfigError;

/// Configuration of the generational loop.
///
/// Every generation consists of `population_size` individuals:
/// `mutant_count` freshly randomized mutants and crossover offspring in the
/// remaining slots. BRKGA additionally copies its elite set into the first
/// slots of the crossover range; the elite size belongs to
/// [`EliteParents`](super::EliteParents).
///
/// # Examples
///
/// ```
/// use rk_metaheur::genetic::GeneticConfig;
///
/// let config = GeneticConfig::new(50) // 50 random keys
///     .with_population_size(200)
///     .with_mutant_count(30)
///     .with_generations(100)
///     .with_inheritance_probability(0.7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of genes per chromosome.
    pub chromosome_length: usize,

    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of mutants injected every generation.
    pub mutant_count: usize,

    /// Number of generations after the initial population.
    pub generations: usize,

    /// Probability that an offspring inherits the first parent's allele.
    pub inheritance_probability: f64,

    /// Random seed. `None` keeps the default deterministic seed.
    pub seed: Option<u64>,
}

impl GeneticConfig {
    /// Creates a configuration with the given chromosome length.
    pub fn new(chromosome_length: usize) -> Self {
        Self {
            chromosome_length,
            population_size: 100,
            mutant_count: 15,
            generations: 100,
            inheritance_probability: 0.7,
            seed: None,
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mutant_count(mut self, n: usize) -> Self {
        self.mutant_count = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_inheritance_probability(mut self, p: f64) -> Self {
        self.inheritance_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of crossover offspring per generation (elite included).
    pub fn crossover_count(&self) -> usize {
        self.population_size.saturating_sub(self.mutant_count)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chromosome_length == 0 {
            return Err(ConfigError::EmptyChromosome);
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.mutant_count >= self.population_size {
            return Err(ConfigError::MutantsExceedPopulation {
                mutants: self.mutant_count,
                population: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.inheritance_probability) {
            return Err(ConfigError::InheritanceProbability(
                self.inheritance_probability,
            ));
        }
        Ok(())
    }
}
