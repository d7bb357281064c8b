//! # strata-sensitivity
//!
//! Perturbs four strategic parameters around a baseline, evaluates a fixed
//! outcome model per sample, and estimates which parameter the outcome is
//! most sensitive to. The random source is injectable so runs replay
//! exactly under a fixed seed.

pub mod attribution;
pub mod engine;
pub mod outcome;
pub mod parameters;
pub mod statistics;

pub use attribution::{AttributionMethod, ParameterSensitivity};
pub use engine::{PerturbationSample, SensitivityAnalyzer, SensitivityReport};
pub use outcome::outcome;
pub use parameters::{ParameterSet, StrategicParameter};
pub use statistics::OutcomeStatistics;
