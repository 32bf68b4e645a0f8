//! Random-key chromosome.

use std::fmt;
use std::ops::{Index, IndexMut};

/// An ordered, fixed-length sequence of genes in `[0, 1)`.
///
/// The length is set at creation and never changes; mutation and
/// crossover overwrite genes in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<f64>,
}

impl Chromosome {
    /// Creates a chromosome of `len` genes, all zero.
    pub fn new(len: usize) -> Self {
        Self {
            genes: vec![0.0; len],
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns the `i`-th gene.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn gene(&self, i: usize) -> f64 {
        self.genes[i]
    }

    /// Overwrites the `i`-th gene.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn set_gene(&mut self, i: usize, gene: f64) {
        self.genes[i] = gene;
    }

    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable view over the genes. The slice cannot be resized.
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.genes.iter()
    }
}

impl From<Vec<f64>> for Chromosome {
    fn from(genes: Vec<f64>) -> Self {
        Self { genes }
    }
}

impl Index<usize> for Chromosome {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.genes[i]
    }
}

impl IndexMut<usize> for Chromosome {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.genes[i]
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{gene}")?;
        }
        write!(f, "}}")
    }
}
