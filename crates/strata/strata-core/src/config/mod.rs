//! Workspace configuration, loaded from TOML.

pub mod defaults;
mod history_config;
mod observability_config;
mod retrieval_config;
mod sensitivity_config;
mod similarity_config;

pub use history_config::{HistoryConfig, HistoryPolicyConfig};
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use sensitivity_config::SensitivityConfig;
pub use similarity_config::SimilarityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{StrataError, StrataResult};

/// Aggregate configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    pub similarity: SimilarityConfig,
    pub retrieval: RetrievalConfig,
    pub history: HistoryConfig,
    pub sensitivity: SensitivityConfig,
    pub observability: ObservabilityConfig,
}

impl StrataConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(input: &str) -> StrataResult<Self> {
        toml::from_str(input).map_err(|e| StrataError::ConfigError(e.to_string()))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> StrataResult<String> {
        toml::to_string(self).map_err(|e| StrataError::ConfigError(e.to_string()))
    }
}
