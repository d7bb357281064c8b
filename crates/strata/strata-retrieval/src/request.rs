//! Request/response contract exposed to the HTTP layer.

use serde::{Deserialize, Serialize};
use strata_core::constants::{DEFAULT_TOP_K, MAX_TOP_K, MIN_TOP_K};
use strata_core::models::AnalysisRecord;

/// `{features?: number[128], top_k?: number}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i64>,
}

impl RetrievalRequest {
    pub fn by_embedding(features: Vec<f32>, top_k: i64) -> Self {
        Self {
            features: Some(features),
            top_k: Some(top_k),
        }
    }

    pub fn recent(top_k: i64) -> Self {
        Self {
            features: None,
            top_k: Some(top_k),
        }
    }
}

/// A single result row: a scored neighbor or a recent record.
///
/// `Recent` is listed first so untagged deserialization only falls back to
/// `Scored` when `text`/`createdAt` are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RetrievalItem {
    Recent(AnalysisRecord),
    Scored {
        #[serde(rename = "recordId")]
        record_id: String,
        score: f64,
    },
}

impl RetrievalItem {
    pub fn record_id(&self) -> &str {
        match self {
            Self::Scored { record_id, .. } => record_id,
            Self::Recent(record) => &record.record_id,
        }
    }

    /// Similarity score, present only for scored neighbors.
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Scored { score, .. } => Some(*score),
            Self::Recent(_) => None,
        }
    }
}

/// `{items: [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResponse {
    pub items: Vec<RetrievalItem>,
}

/// Clamp a requested `top_k` into `[1, 20]`; `None` means the default of 5.
pub fn clamp_top_k(requested: Option<i64>) -> usize {
    clamp_top_k_or(requested, DEFAULT_TOP_K)
}

/// [`clamp_top_k`] with a caller-chosen default (itself clamped).
pub fn clamp_top_k_or(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(k) => k.clamp(MIN_TOP_K as i64, MAX_TOP_K as i64) as usize,
        None => default.clamp(MIN_TOP_K, MAX_TOP_K),
    }
}
