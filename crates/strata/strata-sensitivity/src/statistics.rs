use serde::Serialize;

/// z-score for a two-sided 95% interval.
const Z_95: f64 = 1.96;

/// Summary of the sampled outcome distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeStatistics {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
}

impl OutcomeStatistics {
    /// Summarize `outcomes`. An empty slice yields all zeros.
    pub fn from_outcomes(outcomes: &[f64]) -> Self {
        if outcomes.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                ci_lower: 0.0,
                ci_upper: 0.0,
                min: 0.0,
                max: 0.0,
            };
        }

        let n = outcomes.len() as f64;
        let mean = outcomes.iter().sum::<f64>() / n;
        let variance = outcomes.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        let min = outcomes.iter().copied().fold(f64::INFINITY, f64::min);
        let max = outcomes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            mean,
            std_dev,
            ci_lower: mean - Z_95 * std_dev,
            ci_upper: mean + Z_95 * std_dev,
            min,
            max,
        }
    }
}
