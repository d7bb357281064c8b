use chrono::Duration;
use strata_core::config::{defaults, HistoryPolicyConfig};

/// Capacity and expiry for one history domain. Capacity is never below one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPolicy {
    storage_key: String,
    capacity: usize,
    expiry_days: i64,
}

impl HistoryPolicy {
    /// A capacity of zero is raised to one.
    pub fn new(storage_key: impl Into<String>, capacity: usize, expiry_days: i64) -> Self {
        Self {
            storage_key: storage_key.into(),
            capacity: capacity.max(1),
            expiry_days,
        }
    }

    /// Evidence-query history: 20 entries, 30 days.
    pub fn evidence() -> Self {
        Self::new(
            defaults::DEFAULT_EVIDENCE_STORAGE_KEY,
            defaults::DEFAULT_EVIDENCE_CAPACITY,
            defaults::DEFAULT_EVIDENCE_EXPIRY_DAYS,
        )
    }

    /// Crawl/scrape/search history: 10 entries, 14 days.
    pub fn crawl() -> Self {
        Self::new(
            defaults::DEFAULT_CRAWL_STORAGE_KEY,
            defaults::DEFAULT_CRAWL_CAPACITY,
            defaults::DEFAULT_CRAWL_EXPIRY_DAYS,
        )
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Always at least one.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn expiry_days(&self) -> i64 {
        self.expiry_days
    }

    pub fn max_age(&self) -> Duration {
        Duration::days(self.expiry_days.max(0))
    }
}

impl From<&HistoryPolicyConfig> for HistoryPolicy {
    fn from(config: &HistoryPolicyConfig) -> Self {
        Self::new(config.storage_key.clone(), config.capacity, config.expiry_days)
    }
}
