//! Fixed-size population of individuals.

use super::Individual;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An ordered sequence of individuals whose length never changes.
///
/// The genetic algorithms overwrite individuals in place and swap whole
/// populations between generations; nothing is ever pushed or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `size` individuals with zeroed chromosomes of `chromosome_len` genes.
    pub fn new(size: usize, chromosome_len: usize) -> Self {
        Self {
            individuals: (0..size).map(|_| Individual::new(chromosome_len)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Individual> {
        self.individuals.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Individual> {
        self.individuals.iter_mut()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn as_mut_slice(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Index of the individual with maximum fitness. Ties go to the
    /// lowest index. Returns `None` for an empty population.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, ind) in self.individuals.iter().enumerate() {
            match best {
                Some(b) if self.individuals[b].fitness() >= ind.fitness() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Individual with maximum fitness.
    pub fn best(&self) -> Option<&Individual> {
        self.best_index().map(|i| &self.individuals[i])
    }
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, i: usize) -> &Individual {
        &self.individuals[i]
    }
}

impl IndexMut<usize> for Population {
    fn index_mut(&mut self, i: usize) -> &mut Individual {
        &mut self.individuals[i]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ind) in self.individuals.iter().enumerate() {
            writeln!(f, "{i}: {ind}")?;
        }
        Ok(())
    }
}
