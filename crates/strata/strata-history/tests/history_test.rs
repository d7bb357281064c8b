use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use strata_core::errors::{StorageError, StrataResult};
use strata_core::traits::IKeyValueStore;
use strata_history::{
    CrawlHistory, CrawlMode, CrawlQuery, EvidenceHistory, EvidenceQuery, HistoryPolicy,
    MemoryKeyValueStore, QueryHistoryCache, ResultMetadata,
};

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap()
}

fn small_policy(capacity: usize) -> HistoryPolicy {
    HistoryPolicy::new("test-history", capacity, 14)
}

/// Store whose writes and removes always fail.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryKeyValueStore,
}

impl IKeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StrataResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> StrataResult<()> {
        Err(StorageError::WriteFailed {
            key: key.into(),
            reason: "quota exceeded".into(),
        }
        .into())
    }

    fn remove(&self, key: &str) -> StrataResult<()> {
        Err(StorageError::RemoveFailed {
            key: key.into(),
            reason: "read-only".into(),
        }
        .into())
    }
}

#[test]
fn capacity_is_enforced_most_recent_first() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: EvidenceHistory = QueryHistoryCache::new(store, small_policy(3));

    for i in 0..5 {
        cache.add_at(
            EvidenceQuery::new(format!("query {i}")),
            ResultMetadata::with_count(i),
            vec![],
            t0() + Duration::minutes(i as i64),
        );
    }

    let queries: Vec<&str> = cache.history().iter().map(|e| e.descriptor.query.as_str()).collect();
    assert_eq!(queries, vec!["query 4", "query 3", "query 2"]);
}

#[test]
fn repeat_query_preserves_id_and_moves_to_front() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: EvidenceHistory = QueryHistoryCache::new(store, small_policy(10));

    let original_id = cache
        .add_at(EvidenceQuery::new("breach of contract"), ResultMetadata::with_count(3), vec![], t0())
        .id
        .clone();
    cache.add_at(EvidenceQuery::new("force majeure"), ResultMetadata::with_count(1), vec![], t0() + Duration::minutes(1));
    assert_eq!(cache.len(), 2);

    let later = t0() + Duration::minutes(5);
    let refreshed = cache.add_at(
        EvidenceQuery::new("breach of contract"),
        ResultMetadata::with_count(9),
        vec!["search-a".into()],
        later,
    );
    assert_eq!(refreshed.id, original_id);
    assert_eq!(refreshed.timestamp, later);
    assert_eq!(refreshed.result_metadata.result_count, 9);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.history()[0].descriptor.query, "breach of contract");
    assert_eq!(cache.history()[1].descriptor.query, "force majeure");
}

#[test]
fn distinct_queries_get_distinct_ids_and_hashes() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: EvidenceHistory = QueryHistoryCache::new(store, small_policy(10));
    cache.add_at(EvidenceQuery::new("alpha"), ResultMetadata::default(), vec![], t0());
    cache.add_at(EvidenceQuery::new("beta"), ResultMetadata::default(), vec![], t0());

    let h = cache.history();
    assert_ne!(h[0].id, h[1].id);
    assert_ne!(h[0].dedup_hash, h[1].dedup_hash);
}

#[test]
fn reload_drops_expired_entries() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: EvidenceHistory = QueryHistoryCache::new(store.clone(), small_policy(10));

    cache.add_at(EvidenceQuery::new("stale"), ResultMetadata::default(), vec![], t0() - Duration::days(20));
    cache.add_at(EvidenceQuery::new("fresh"), ResultMetadata::default(), vec![], t0() - Duration::days(2));
    // Expiry is never applied on write.
    assert_eq!(cache.len(), 2);

    let mut reloaded: EvidenceHistory = QueryHistoryCache::new(store, small_policy(10));
    reloaded.load_at(t0());
    let queries: Vec<&str> = reloaded.history().iter().map(|e| e.descriptor.query.as_str()).collect();
    assert_eq!(queries, vec!["fresh"]);
}

#[test]
fn corrupt_payload_loads_as_empty() {
    let store = Arc::new(MemoryKeyValueStore::new());
    store.set("test-history", "{not valid json").unwrap();

    let mut cache: EvidenceHistory = QueryHistoryCache::new(store.clone(), small_policy(10));
    cache.load_at(t0());
    assert!(cache.is_empty());

    // The cache keeps working and overwrites the corrupt blob.
    cache.add_at(EvidenceQuery::new("recovered"), ResultMetadata::default(), vec![], t0());
    let mut again: EvidenceHistory = QueryHistoryCache::new(store, small_policy(10));
    again.load_at(t0());
    assert_eq!(again.len(), 1);
}

#[test]
fn write_failures_are_swallowed() {
    let store = Arc::new(ReadOnlyStore::default());
    let mut cache: EvidenceHistory = QueryHistoryCache::new(store, small_policy(10));
    cache.add_at(EvidenceQuery::new("kept in memory"), ResultMetadata::default(), vec![], t0());
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn clear_removes_persisted_blob() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: EvidenceHistory = QueryHistoryCache::new(store.clone(), small_policy(10));
    cache.add_at(EvidenceQuery::new("q"), ResultMetadata::default(), vec![], t0());
    assert!(store.get("test-history").unwrap().is_some());

    cache.clear();
    assert!(cache.is_empty());
    assert!(store.get("test-history").unwrap().is_none());
}

#[test]
fn crawl_dedup_covers_mode_query_and_urls() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: CrawlHistory = QueryHistoryCache::new(store, HistoryPolicy::crawl());
    let urls = vec!["https://example.com".to_string()];

    cache.add_at(CrawlQuery::new(CrawlMode::Scrape, "", urls.clone()), ResultMetadata::default(), vec![], t0());
    cache.add_at(CrawlQuery::new(CrawlMode::Crawl, "", urls.clone()), ResultMetadata::default(), vec![], t0());
    cache.add_at(CrawlQuery::new(CrawlMode::Scrape, "", urls), ResultMetadata::default(), vec![], t0());

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.history()[0].descriptor.mode, CrawlMode::Scrape);
}

#[test]
fn domains_use_independent_policies_and_keys() {
    let store: Arc<MemoryKeyValueStore> = Arc::new(MemoryKeyValueStore::new());
    let mut evidence = EvidenceHistory::open(store.clone());
    let mut crawl = CrawlHistory::open(store.clone());

    assert_eq!(evidence.policy().capacity(), 20);
    assert_eq!(evidence.policy().expiry_days(), 30);
    assert_eq!(crawl.policy().capacity(), 10);
    assert_eq!(crawl.policy().expiry_days(), 14);

    for i in 0..15 {
        evidence.add(EvidenceQuery::new(format!("e{i}")), ResultMetadata::default(), vec![]);
        crawl.add(
            CrawlQuery::new(CrawlMode::Search, format!("c{i}"), vec![]),
            ResultMetadata::default(),
            vec![],
        );
    }
    assert_eq!(evidence.len(), 15);
    assert_eq!(crawl.len(), 10);

    crawl.clear();
    let reopened = EvidenceHistory::open(store);
    assert_eq!(reopened.len(), 15);
}

#[test]
fn providers_and_metadata_persist() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: EvidenceHistory = QueryHistoryCache::new(store.clone(), small_policy(10));
    cache.add_at(
        EvidenceQuery::new("precedent"),
        ResultMetadata {
            result_count: 4,
            duration_ms: Some(120),
            summary: Some("four cases".into()),
        },
        vec!["provider-a".into(), "provider-b".into()],
        t0(),
    );

    let mut reloaded: EvidenceHistory = QueryHistoryCache::new(store, small_policy(10));
    reloaded.load_at(t0());
    assert_eq!(reloaded.history(), cache.history());
}

#[test]
fn expiry_window_is_inclusive() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: EvidenceHistory = QueryHistoryCache::new(store.clone(), small_policy(10));
    let window = Duration::days(14);

    cache.add_at(EvidenceQuery::new("just expired"), ResultMetadata::default(), vec![], t0() - window - Duration::seconds(1));
    cache.add_at(EvidenceQuery::new("at the edge"), ResultMetadata::default(), vec![], t0() - window);

    let mut reloaded: EvidenceHistory = QueryHistoryCache::new(store, small_policy(10));
    reloaded.load_at(t0());
    let queries: Vec<&str> = reloaded.history().iter().map(|e| e.descriptor.query.as_str()).collect();
    assert_eq!(queries, vec!["at the edge"]);
}

#[test]
fn load_collapses_repeated_hashes_to_newest() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut writer: EvidenceHistory = QueryHistoryCache::new(store.clone(), small_policy(10));
    let older = writer
        .add_at(EvidenceQuery::new("a"), ResultMetadata::with_count(1), vec![], t0() - Duration::hours(2))
        .clone();
    let mut newer = older.clone();
    newer.id = "newer-copy".into();
    newer.timestamp = t0() - Duration::hours(1);
    newer.result_metadata = ResultMetadata::with_count(2);

    // Two writers raced and both copies landed in the blob.
    let payload = serde_json::to_string(&vec![newer.clone(), older]).unwrap();
    store.set("test-history", &payload).unwrap();

    let mut cache: EvidenceHistory = QueryHistoryCache::new(store, small_policy(10));
    cache.load_at(t0());
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.history()[0], newer);

    cache.add_at(EvidenceQuery::new("a"), ResultMetadata::with_count(3), vec![], t0());
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.history()[0].id, "newer-copy");
}

#[test]
fn zero_capacity_policy_still_keeps_latest_entry() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let mut cache: EvidenceHistory =
        QueryHistoryCache::new(store, HistoryPolicy::new("test-history", 0, 14));

    cache.add_at(EvidenceQuery::new("first"), ResultMetadata::default(), vec![], t0());
    let latest = cache.add_at(EvidenceQuery::new("second"), ResultMetadata::default(), vec![], t0());
    assert_eq!(latest.descriptor.query, "second");
    assert_eq!(cache.len(), 1);
}
