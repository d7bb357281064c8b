use serde::{Deserialize, Serialize};

use super::defaults;

/// Pattern similarity weighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Weight of the lexical percentage in the combined score.
    pub text_weight: f64,
    /// Weight of the structural percentage in the combined score.
    pub structural_weight: f64,
    /// Multiplier applied to signature terms merged into a pattern vector.
    pub signature_weight: f64,
    /// Floor for the keyword-derived player count.
    pub min_player_count: u32,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            text_weight: defaults::DEFAULT_TEXT_WEIGHT,
            structural_weight: defaults::DEFAULT_STRUCTURAL_WEIGHT,
            signature_weight: defaults::DEFAULT_SIGNATURE_WEIGHT,
            min_player_count: defaults::DEFAULT_MIN_PLAYER_COUNT,
        }
    }
}
