use serde::{Deserialize, Serialize};

use super::defaults;

/// Monte Carlo sensitivity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    /// Samples drawn per analysis.
    pub perturbations: usize,
    /// Half-width of the uniform perturbation, as a fraction of baseline.
    pub perturbation_fraction: f64,
    /// Probability that an untagged sample joins a parameter's subsample.
    pub subsample_probability: f64,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            perturbations: defaults::DEFAULT_PERTURBATIONS,
            perturbation_fraction: defaults::DEFAULT_PERTURBATION_FRACTION,
            subsample_probability: defaults::DEFAULT_SUBSAMPLE_PROBABILITY,
            seed: None,
        }
    }
}
