use serde::{Deserialize, Serialize};

/// Structural attributes of a strategic scenario.
///
/// Every attribute is optional: structural comparison only considers the
/// attributes present on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_cooperation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_conflict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_information_asymmetry: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_sequential_moves: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_repeated_interaction: Option<bool>,
}

impl FeatureRecord {
    /// The boolean attributes in a fixed order, paired with their names.
    pub fn flags(&self) -> [(&'static str, Option<bool>); 5] {
        [
            ("hasCooperation", self.has_cooperation),
            ("hasConflict", self.has_conflict),
            ("hasInformationAsymmetry", self.has_information_asymmetry),
            ("hasSequentialMoves", self.has_sequential_moves),
            ("hasRepeatedInteraction", self.has_repeated_interaction),
        ]
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.player_count.is_none() && self.flags().iter().all(|(_, v)| v.is_none())
    }
}
