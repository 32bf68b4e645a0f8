//! GRASP configuration.

use crate::error::ConfigError;
use crate::problem::LocalSearchPolicy;

/// Configuration for [`super::Grasp`].
///
/// # Examples
///
/// ```
/// use rk_metaheur::grasp::GraspConfig;
/// use rk_metaheur::problem::LocalSearchPolicy;
///
/// let config = GraspConfig::default()
///     .with_max_iterations(50)
///     .with_local_iterations(200)
///     .with_alpha(0.3)
///     .with_policy(LocalSearchPolicy::FirstImprovement)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of construction + local search iterations.
    pub max_iterations: usize,

    /// Iteration budget of every local search run.
    pub local_iterations: usize,

    /// Restricted candidate list parameter in `[0, 1]`.
    ///
    /// `0` is purely greedy, `1` is uniformly random among feasible candidates.
    pub alpha: f64,

    /// Neighbourhood exploration policy of the local search.
    pub policy: LocalSearchPolicy,

    /// Random seed. `None` keeps the default deterministic seed.
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            local_iterations: usize::MAX,
            alpha: 1.0,
            policy: LocalSearchPolicy::BestImprovement,
            seed: None,
        }
    }
}

impl GraspConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_local_iterations(mut self, n: usize) -> Self {
        self.local_iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_policy(mut self, policy: LocalSearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::Alpha(self.alpha));
        }
        Ok(())
    }
}
