use std::fmt;

use serde::{Deserialize, Serialize};

/// The four perturbed strategic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategicParameter {
    RiskTolerance,
    TimeHorizon,
    ResourceAvailability,
    StakeholderAlignment,
}

impl StrategicParameter {
    pub const ALL: [StrategicParameter; 4] = [
        Self::RiskTolerance,
        Self::TimeHorizon,
        Self::ResourceAvailability,
        Self::StakeholderAlignment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::RiskTolerance => "risk_tolerance",
            Self::TimeHorizon => "time_horizon",
            Self::ResourceAvailability => "resource_availability",
            Self::StakeholderAlignment => "stakeholder_alignment",
        }
    }

    /// Inclusive valid range. Time horizon is in years; the rest are unit scores.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::TimeHorizon => (0.1, 5.0),
            _ => (0.0, 1.0),
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let (lo, hi) = self.range();
        value.clamp(lo, hi)
    }
}

impl fmt::Display for StrategicParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per [`StrategicParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub risk_tolerance: f64,
    pub time_horizon: f64,
    pub resource_availability: f64,
    pub stakeholder_alignment: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            risk_tolerance: 0.5,
            time_horizon: 1.0,
            resource_availability: 0.5,
            stakeholder_alignment: 0.5,
        }
    }
}

impl ParameterSet {
    pub fn get(&self, parameter: StrategicParameter) -> f64 {
        match parameter {
            StrategicParameter::RiskTolerance => self.risk_tolerance,
            StrategicParameter::TimeHorizon => self.time_horizon,
            StrategicParameter::ResourceAvailability => self.resource_availability,
            StrategicParameter::StakeholderAlignment => self.stakeholder_alignment,
        }
    }

    pub fn set(&mut self, parameter: StrategicParameter, value: f64) {
        let slot = match parameter {
            StrategicParameter::RiskTolerance => &mut self.risk_tolerance,
            StrategicParameter::TimeHorizon => &mut self.time_horizon,
            StrategicParameter::ResourceAvailability => &mut self.resource_availability,
            StrategicParameter::StakeholderAlignment => &mut self.stakeholder_alignment,
        };
        *slot = value;
    }

    /// Copy with every value clamped into its valid range.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for p in StrategicParameter::ALL {
            out.set(p, p.clamp(self.get(p)));
        }
        out
    }
}
