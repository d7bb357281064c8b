use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of what a query produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    pub result_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ResultMetadata {
    pub fn with_count(result_count: usize) -> Self {
        Self {
            result_count,
            ..Default::default()
        }
    }
}

/// One remembered query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry<D> {
    pub id: String,
    pub descriptor: D,
    pub timestamp: DateTime<Utc>,
    pub result_metadata: ResultMetadata,
    #[serde(default)]
    pub providers: Vec<String>,
    pub dedup_hash: String,
}
