//! SensitivityAnalyzer: Monte Carlo perturbation around a baseline.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use strata_core::config::defaults::DEFAULT_PERTURBATION_FRACTION;
use strata_core::config::SensitivityConfig;
use strata_core::constants::MAX_PERTURBATIONS;
use strata_core::errors::{AnalysisError, StrataResult};
use strata_observability::sensitivity_span;
use tracing::{debug, info};

use crate::attribution::{self, AttributionMethod, ParameterSensitivity};
use crate::outcome::outcome;
use crate::parameters::{ParameterSet, StrategicParameter};
use crate::statistics::OutcomeStatistics;

/// One perturbed parameter vector and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerturbationSample {
    pub parameters: ParameterSet,
    pub outcome: f64,
    /// Parameter with the largest relative perturbation in this sample.
    pub tag: StrategicParameter,
}

/// Full result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityReport {
    pub baseline: ParameterSet,
    pub baseline_outcome: f64,
    pub samples: Vec<PerturbationSample>,
    pub statistics: OutcomeStatistics,
    pub method: AttributionMethod,
    /// Highest estimate first.
    pub ranking: Vec<ParameterSensitivity>,
    pub most_sensitive: StrategicParameter,
    pub least_sensitive: StrategicParameter,
}

/// Analyzer over an injectable random source.
pub struct SensitivityAnalyzer<R: Rng = StdRng> {
    config: SensitivityConfig,
    method: AttributionMethod,
    rng: R,
}

impl SensitivityAnalyzer<StdRng> {
    /// Seeded from `config.seed` when set, otherwise from entropy.
    pub fn new(config: SensitivityConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SensitivityConfig::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SensitivityAnalyzer<R> {
    pub fn with_rng(config: SensitivityConfig, rng: R) -> Self {
        Self {
            config,
            method: AttributionMethod::default(),
            rng,
        }
    }

    pub fn with_method(mut self, method: AttributionMethod) -> Self {
        self.method = method;
        self
    }

    /// Run with the configured perturbation count.
    pub fn analyze(&mut self, baseline: &ParameterSet) -> StrataResult<SensitivityReport> {
        self.analyze_n(baseline, self.config.perturbations)
    }

    /// Run with `perturbations` samples, clamped to `[1, 10_000]`.
    pub fn analyze_n(
        &mut self,
        baseline: &ParameterSet,
        perturbations: usize,
    ) -> StrataResult<SensitivityReport> {
        for p in StrategicParameter::ALL {
            let value = baseline.get(p);
            if !value.is_finite() {
                return Err(AnalysisError::NonFiniteBaseline {
                    parameter: p.name().to_string(),
                    value,
                }
                .into());
            }
        }

        let n = perturbations.clamp(1, MAX_PERTURBATIONS);
        let _span = sensitivity_span!(n).entered();

        let samples: Vec<PerturbationSample> = (0..n).map(|_| self.sample(baseline)).collect();
        let outcomes: Vec<f64> = samples.iter().map(|s| s.outcome).collect();
        let statistics = OutcomeStatistics::from_outcomes(&outcomes);
        debug!(
            mean = statistics.mean,
            std_dev = statistics.std_dev,
            "outcome distribution"
        );

        let estimates = match self.method {
            AttributionMethod::SubsampledMagnitude => attribution::subsampled_magnitude(
                &samples,
                self.config.subsample_probability,
                &mut self.rng,
            ),
            AttributionMethod::OneAtATime => {
                attribution::one_at_a_time(baseline, self.fraction())
            }
        };
        let ranking = attribution::rank(estimates);
        let most_sensitive = ranking[0].parameter;
        let least_sensitive = ranking[ranking.len() - 1].parameter;

        info!(
            samples = n,
            method = ?self.method,
            most_sensitive = %most_sensitive,
            least_sensitive = %least_sensitive,
            "sensitivity analysis complete"
        );

        Ok(SensitivityReport {
            baseline: *baseline,
            baseline_outcome: outcome(baseline),
            samples,
            statistics,
            method: self.method,
            ranking,
            most_sensitive,
            least_sensitive,
        })
    }

    /// Perturbation half-width, clamped to `[0, 1]`. Non-finite values fall
    /// back to the default.
    fn fraction(&self) -> f64 {
        let f = self.config.perturbation_fraction;
        if f.is_finite() {
            f.abs().min(1.0)
        } else {
            DEFAULT_PERTURBATION_FRACTION
        }
    }

    /// Perturb every parameter by an independent uniform draw in `[-f, +f]`
    /// of its baseline, then clamp into range.
    fn sample(&mut self, baseline: &ParameterSet) -> PerturbationSample {
        let fraction = self.fraction();
        let mut parameters = *baseline;
        let mut tag = StrategicParameter::ALL[0];
        let mut largest = f64::NEG_INFINITY;

        for p in StrategicParameter::ALL {
            let shift = if fraction > 0.0 {
                self.rng.gen_range(-fraction..=fraction)
            } else {
                0.0
            };
            parameters.set(p, p.clamp(baseline.get(p) * (1.0 + shift)));
            if shift.abs() > largest {
                largest = shift.abs();
                tag = p;
            }
        }

        PerturbationSample {
            parameters,
            outcome: outcome(&parameters),
            tag,
        }
    }
}
