use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use strata_history::{
    EvidenceHistory, EvidenceQuery, HistoryPolicy, MemoryKeyValueStore, QueryHistoryCache,
    ResultMetadata,
};

proptest! {
    #[test]
    fn invariants_hold_for_any_add_sequence(
        capacity in 1usize..8,
        queries in proptest::collection::vec("[a-d]{1,2}", 0..40),
    ) {
        let store = Arc::new(MemoryKeyValueStore::new());
        let mut cache: EvidenceHistory =
            QueryHistoryCache::new(store, HistoryPolicy::new("p", capacity, 30));
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        for (i, q) in queries.iter().enumerate() {
            cache.add_at(
                EvidenceQuery::new(q.clone()),
                ResultMetadata::default(),
                vec![],
                t0 + Duration::seconds(i as i64),
            );
            let h = cache.history();
            prop_assert!(h.len() <= capacity);
            prop_assert_eq!(&h[0].descriptor.query, q);

            // Most recent first.
            for pair in h.windows(2) {
                prop_assert!(pair[0].timestamp >= pair[1].timestamp);
            }

            // Unique dedup hashes.
            let mut hashes: Vec<&str> = h.iter().map(|e| e.dedup_hash.as_str()).collect();
            hashes.sort();
            hashes.dedup();
            prop_assert_eq!(hashes.len(), h.len());
        }
    }
}
