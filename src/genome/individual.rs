//! Individual: chromosome plus cached fitness.

use super::Chromosome;
use std::fmt;

/// One candidate genotype and the fitness of the solution it decodes to.
///
/// Fitness starts at `0.0` and is overwritten by the algorithm after every
/// decode. Infeasible genotypes carry `f64::NEG_INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: f64,
}

impl Individual {
    /// Creates an individual with a zeroed chromosome of `chromosome_len` genes.
    pub fn new(chromosome_len: usize) -> Self {
        Self {
            chromosome: Chromosome::new(chromosome_len),
            fitness: 0.0,
        }
    }

    /// Wraps an existing chromosome with the given fitness.
    pub fn with_chromosome(chromosome: Chromosome, fitness: f64) -> Self {
        Self {
            chromosome,
            fitness,
        }
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn chromosome_mut(&mut self) -> &mut Chromosome {
        &mut self.chromosome
    }

    pub fn gene(&self, i: usize) -> f64 {
        self.chromosome.gene(i)
    }

    pub fn set_gene(&mut self, i: usize, gene: f64) {
        self.chromosome.set_gene(i, gene);
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fitness, self.chromosome)
    }
}
