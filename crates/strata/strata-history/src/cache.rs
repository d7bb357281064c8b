//! QueryHistoryCache: capped, most-recent-first, hash-deduplicated.
//!
//! Expiry is applied when the persisted list is loaded, never on write.
//! Persistence is best effort: read and write failures are logged and the
//! in-memory list stays authoritative for the life of the process.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use strata_core::errors::StrataResult;
use strata_core::hashing::dedup_hash;
use strata_core::traits::IKeyValueStore;
use strata_observability::history_span;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::descriptor::QueryDescriptor;
use crate::domains::{CrawlQuery, EvidenceQuery};
use crate::entry::{HistoryEntry, ResultMetadata};
use crate::policy::HistoryPolicy;

/// History of evidence searches.
pub type EvidenceHistory = QueryHistoryCache<EvidenceQuery>;

/// History of scrape/crawl/search operations.
pub type CrawlHistory = QueryHistoryCache<CrawlQuery>;

/// History cache for one query domain, backed by an injected store.
pub struct QueryHistoryCache<D: QueryDescriptor> {
    store: Arc<dyn IKeyValueStore>,
    policy: HistoryPolicy,
    entries: Vec<HistoryEntry<D>>,
}

impl<D: QueryDescriptor> QueryHistoryCache<D> {
    /// Create an empty cache. Call [`load`](Self::load) to read persisted entries.
    pub fn new(store: Arc<dyn IKeyValueStore>, policy: HistoryPolicy) -> Self {
        Self {
            store,
            policy,
            entries: Vec::new(),
        }
    }

    /// Create with the domain's default policy and load persisted entries.
    pub fn open(store: Arc<dyn IKeyValueStore>) -> Self {
        let mut cache = Self::new(store, D::default_policy());
        cache.load();
        cache
    }

    pub fn policy(&self) -> &HistoryPolicy {
        &self.policy
    }

    /// Entries, most recent first.
    pub fn history(&self) -> &[HistoryEntry<D>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the in-memory list with the persisted one, minus expired entries.
    pub fn load(&mut self) {
        self.load_at(Utc::now());
    }

    /// [`load`](Self::load) with an explicit clock.
    pub fn load_at(&mut self, now: DateTime<Utc>) {
        let _span = history_span!(self.policy.storage_key(), "load").entered();

        let raw = match self.store.get(self.policy.storage_key()) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "history read failed, starting empty");
                None
            }
        };

        let mut entries: Vec<HistoryEntry<D>> = match raw {
            None => Vec::new(),
            Some(payload) => serde_json::from_str(&payload).unwrap_or_else(|e| {
                warn!(error = %e, "corrupt history payload, starting empty");
                Vec::new()
            }),
        };

        let before = entries.len();
        let max_age = self.policy.max_age();
        entries.retain(|e| now - e.timestamp <= max_age);
        // Concurrent writers can leave repeats behind; the first copy is the newest.
        let mut seen = HashSet::new();
        entries.retain(|e| seen.insert(e.dedup_hash.clone()));
        entries.truncate(self.policy.capacity());

        debug!(
            loaded = entries.len(),
            dropped = before - entries.len(),
            "history loaded"
        );
        self.entries = entries;
    }

    /// Record a query. Returns the stored entry.
    pub fn add(
        &mut self,
        descriptor: D,
        metadata: ResultMetadata,
        providers: Vec<String>,
    ) -> &HistoryEntry<D> {
        self.add_at(descriptor, metadata, providers, Utc::now())
    }

    /// [`add`](Self::add) with an explicit clock.
    ///
    /// A repeat of an existing dedup hash keeps the original id, refreshes
    /// timestamp and metadata, and moves the entry to the front.
    pub fn add_at(
        &mut self,
        descriptor: D,
        metadata: ResultMetadata,
        providers: Vec<String>,
        now: DateTime<Utc>,
    ) -> &HistoryEntry<D> {
        let _span = history_span!(self.policy.storage_key(), "add").entered();
        let hash = dedup_hash(&descriptor.canonical_key());

        let id = match self.entries.iter().position(|e| e.dedup_hash == hash) {
            Some(idx) => {
                let previous = self.entries.remove(idx);
                debug!(id = %previous.id, hash = %hash, "refreshing repeated query");
                previous.id
            }
            None => Uuid::new_v4().to_string(),
        };

        self.entries.insert(
            0,
            HistoryEntry {
                id,
                descriptor,
                timestamp: now,
                result_metadata: metadata,
                providers,
                dedup_hash: hash,
            },
        );
        self.entries.truncate(self.policy.capacity());
        if let Err(e) = self.persist() {
            warn!(error = %e, "history write failed, keeping in-memory state");
        }

        &self.entries[0]
    }

    /// Drop every entry and remove the persisted blob.
    pub fn clear(&mut self) {
        let _span = history_span!(self.policy.storage_key(), "clear").entered();
        self.entries.clear();
        if let Err(e) = self.store.remove(self.policy.storage_key()) {
            warn!(error = %e, "history remove failed");
        }
    }

    fn persist(&self) -> StrataResult<()> {
        let payload = serde_json::to_string(&self.entries)?;
        self.store.set(self.policy.storage_key(), &payload)
    }
}
