//! Local search configuration.

use crate::problem::LocalSearchPolicy;

/// Configuration for [`super::LocalSearch`].
///
/// # Examples
///
/// ```
/// use rk_metaheur::local_search::LocalSearchConfig;
/// use rk_metaheur::problem::LocalSearchPolicy;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(100)
///     .with_policy(LocalSearchPolicy::FirstImprovement);
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Maximum number of adopted moves. `usize::MAX` is unbounded.
    pub max_iterations: usize,

    /// How each neighbourhood is explored.
    pub policy: LocalSearchPolicy,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: usize::MAX,
            policy: LocalSearchPolicy::BestImprovement,
        }
    }
}

impl LocalSearchConfig {
    pub fn new(max_iterations: usize, policy: LocalSearchPolicy) -> Self {
        Self {
            max_iterations,
            policy,
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_policy(mut self, policy: LocalSearchPolicy) -> Self {
        self.policy = policy;
        self
    }
}
