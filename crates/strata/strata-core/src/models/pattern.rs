use serde::{Deserialize, Serialize};

use super::FeatureRecord;

/// Broad family a strategic pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    Cooperative,
    Competitive,
    Bargaining,
    Signaling,
    Coordination,
    Deterrence,
}

/// A catalogued strategic pattern that scenarios are matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicPattern {
    pub id: String,
    pub name: String,
    pub category: PatternCategory,
    pub description: String,
    /// Short keyword signature, weighted above the description when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default)]
    pub features: FeatureRecord,
}
