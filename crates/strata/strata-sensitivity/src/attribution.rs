//! Per-parameter sensitivity estimates.
//!
//! `SubsampledMagnitude` reproduces the behaviour this engine has always
//! shipped: the mean absolute outcome over a subsample chosen partly by
//! each sample's tag and partly at random. It does not isolate a
//! parameter's effect and is kept for compatibility. `OneAtATime` moves a
//! single parameter across its perturbation band with the others held at
//! baseline and reports the outcome swing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::PerturbationSample;
use crate::outcome::outcome;
use crate::parameters::{ParameterSet, StrategicParameter};

/// How per-parameter sensitivity is estimated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionMethod {
    #[default]
    SubsampledMagnitude,
    OneAtATime,
}

/// Estimated sensitivity of the outcome to one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSensitivity {
    pub parameter: StrategicParameter,
    pub estimate: f64,
}

/// Mean |outcome| over the samples tagged with each parameter, plus every
/// other sample admitted with probability `admit_probability`.
pub fn subsampled_magnitude<R: Rng + ?Sized>(
    samples: &[PerturbationSample],
    admit_probability: f64,
    rng: &mut R,
) -> Vec<ParameterSensitivity> {
    let p = if admit_probability.is_nan() {
        0.0
    } else {
        admit_probability.clamp(0.0, 1.0)
    };
    StrategicParameter::ALL
        .iter()
        .map(|&parameter| {
            let (sum, count) = samples
                .iter()
                .filter(|s| s.tag == parameter || rng.gen_bool(p))
                .fold((0.0, 0usize), |(sum, n), s| (sum + s.outcome.abs(), n + 1));
            let estimate = if count == 0 { 0.0 } else { sum / count as f64 };
            ParameterSensitivity {
                parameter,
                estimate,
            }
        })
        .collect()
}

/// |outcome(baseline with p·(1+f)) − outcome(baseline with p·(1−f))| per parameter.
pub fn one_at_a_time(baseline: &ParameterSet, fraction: f64) -> Vec<ParameterSensitivity> {
    StrategicParameter::ALL
        .iter()
        .map(|&parameter| {
            let base = baseline.get(parameter);
            let mut up = *baseline;
            up.set(parameter, parameter.clamp(base * (1.0 + fraction)));
            let mut down = *baseline;
            down.set(parameter, parameter.clamp(base * (1.0 - fraction)));
            ParameterSensitivity {
                parameter,
                estimate: (outcome(&up) - outcome(&down)).abs(),
            }
        })
        .collect()
}

/// Sort descending by estimate. Ties keep declaration order.
pub fn rank(mut estimates: Vec<ParameterSensitivity>) -> Vec<ParameterSensitivity> {
    estimates.sort_by(|a, b| {
        b.estimate
            .partial_cmp(&a.estimate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    estimates
}
