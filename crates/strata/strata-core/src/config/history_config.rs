use serde::{Deserialize, Serialize};

use super::defaults;

/// Capacity/expiry policy for one history domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPolicyConfig {
    /// Key under which the entry list is persisted.
    pub storage_key: String,
    /// Maximum retained entries.
    pub capacity: usize,
    /// Entries older than this are dropped on load.
    pub expiry_days: i64,
}

/// Query history configuration for both domains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub evidence: HistoryPolicyConfig,
    pub crawl: HistoryPolicyConfig,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            evidence: HistoryPolicyConfig {
                storage_key: defaults::DEFAULT_EVIDENCE_STORAGE_KEY.to_string(),
                capacity: defaults::DEFAULT_EVIDENCE_CAPACITY,
                expiry_days: defaults::DEFAULT_EVIDENCE_EXPIRY_DAYS,
            },
            crawl: HistoryPolicyConfig {
                storage_key: defaults::DEFAULT_CRAWL_STORAGE_KEY.to_string(),
                capacity: defaults::DEFAULT_CRAWL_CAPACITY,
                expiry_days: defaults::DEFAULT_CRAWL_EXPIRY_DAYS,
            },
        }
    }
}
