//! Error types shared by every algorithm.

use thiserror::Error;

/// No feasible solution corresponds to a genotype or construction attempt.
///
/// Returned by [`crate::problem::Problem::decode`] and
/// [`crate::problem::Problem::random_construct`]. It is an expected
/// outcome: the genetic algorithms turn it into `-inf` fitness and GRASP
/// counts the iteration as failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("infeasible solution: {reason}")]
pub struct Infeasible {
    reason: String,
}

impl Infeasible {
    /// Creates a new error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the attempt was infeasible.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Invalid algorithm parameters, detected before a run touches any state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("number of mutants ({mutants}) must be smaller than the population size ({population})")]
    MutantsExceedPopulation { mutants: usize, population: usize },

    #[error(
        "number of elite ({elite}) + number of mutants ({mutants}) must be smaller than the population size ({population})"
    )]
    EliteAndMutantsExceedPopulation {
        elite: usize,
        mutants: usize,
        population: usize,
    },

    #[error("elite set must contain at least one individual")]
    EmptyEliteSet,

    #[error("chromosome length must be at least 1")]
    EmptyChromosome,

    #[error("inheritance probability must lie in [0, 1], got {0}")]
    InheritanceProbability(f64),

    #[error("alpha must lie in [0, 1], got {0}")]
    Alpha(f64),
}

/// Invalid distribution parameters for a random generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    #[error("invalid uniform range [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },

    #[error("invalid binomial distribution B({n}, {p})")]
    InvalidBinomial { n: u64, p: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_message() {
        let err = Infeasible::new("centre not found for location 3");
        assert_eq!(err.reason(), "centre not found for location 3");
        assert_eq!(
            err.to_string(),
            "infeasible solution: centre not found for location 3"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::EliteAndMutantsExceedPopulation {
            elite: 1,
            mutants: 5,
            population: 5,
        };
        assert!(err.to_string().contains("(1) + number of mutants (5)"));
    }
}
