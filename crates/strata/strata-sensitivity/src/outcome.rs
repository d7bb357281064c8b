//! Scalar outcome model evaluated per sample.

use crate::parameters::ParameterSet;

/// `0.3·rt + 0.2·th + 0.3·ra + 0.2·sa + 0.1·rt·ra − 0.05·(th − 1)²`, rounded to 3 decimals.
pub fn outcome(p: &ParameterSet) -> f64 {
    let linear = 0.3 * p.risk_tolerance
        + 0.2 * p.time_horizon
        + 0.3 * p.resource_availability
        + 0.2 * p.stakeholder_alignment;
    let interaction = 0.1 * p.risk_tolerance * p.resource_availability;
    let horizon_penalty = 0.05 * (p.time_horizon - 1.0).powi(2);
    round3(linear + interaction - horizon_penalty)
}

pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
