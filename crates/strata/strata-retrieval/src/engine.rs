//! NearestNeighborRetriever: bounded linear scan over recent embeddings.
//!
//! The scan is capped at `candidate_limit` rows. A larger store would need
//! an approximate index behind the same `retrieve` contract.

use strata_core::config::RetrievalConfig;
use strata_core::errors::{RetrievalError, StrataError, StrataResult};
use strata_core::traits::IFeatureStore;
use strata_observability::retrieval_span;
use tracing::{debug, info};

use crate::request::{clamp_top_k_or, RetrievalItem, RetrievalRequest, RetrievalResponse};
use crate::similarity::embedding_cosine;

/// Retriever over an external feature store.
pub struct NearestNeighborRetriever<'a> {
    store: &'a dyn IFeatureStore,
    config: RetrievalConfig,
}

impl<'a> NearestNeighborRetriever<'a> {
    pub fn new(store: &'a dyn IFeatureStore, config: RetrievalConfig) -> Self {
        Self { store, config }
    }

    pub fn with_defaults(store: &'a dyn IFeatureStore) -> Self {
        Self::new(store, RetrievalConfig::default())
    }

    /// Serve a retrieval request.
    ///
    /// A `features` vector of exactly the configured dimension triggers a
    /// scored nearest-neighbor search; anything else returns the most
    /// recent records. Store failures propagate; no partial result is
    /// ever returned.
    pub fn retrieve(&self, request: &RetrievalRequest) -> StrataResult<RetrievalResponse> {
        let top_k = clamp_top_k_or(request.top_k, self.config.default_top_k);
        let items = match request.features.as_deref() {
            Some(query) if query.len() == self.config.embedding_dimensions => {
                let _span = retrieval_span!("nearest", top_k).entered();
                self.nearest(query, top_k)?
            }
            other => {
                let _span = retrieval_span!("recent", top_k).entered();
                if let Some(q) = other {
                    debug!(
                        dimensions = q.len(),
                        expected = self.config.embedding_dimensions,
                        "query vector ignored"
                    );
                }
                self.recent(top_k)?
            }
        };
        info!(items = items.len(), top_k, "retrieval complete");
        Ok(RetrievalResponse { items })
    }

    /// Top `top_k` stored embeddings by cosine similarity to `query`.
    pub fn nearest(&self, query: &[f32], top_k: usize) -> StrataResult<Vec<RetrievalItem>> {
        let candidates = self
            .store
            .recent_embeddings(self.config.candidate_limit)
            .map_err(|e| store_err(e, false))?;

        let scanned = candidates.len().min(self.config.candidate_limit);
        let mut scored: Vec<(String, f64)> = candidates
            .into_iter()
            .take(self.config.candidate_limit)
            .filter_map(|c| match embedding_cosine(query, &c.embedding) {
                Some(score) => Some((c.record_id, score)),
                None => {
                    debug!(
                        record_id = %c.record_id,
                        dimensions = c.embedding.len(),
                        "candidate excluded: dimension mismatch"
                    );
                    None
                }
            })
            .collect();

        // Stable sort: equal scores keep the store's recency order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        debug!(scanned, returned = scored.len(), "nearest-neighbor scan");
        Ok(scored
            .into_iter()
            .map(|(record_id, score)| RetrievalItem::Scored { record_id, score })
            .collect())
    }

    /// The `top_k` most recently created records, newest first.
    pub fn recent(&self, top_k: usize) -> StrataResult<Vec<RetrievalItem>> {
        let mut records = self
            .store
            .recent_records(top_k)
            .map_err(|e| store_err(e, true))?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(top_k);
        Ok(records.into_iter().map(RetrievalItem::Recent).collect())
    }
}

/// Normalize store failures into retrieval errors, keeping already-typed ones.
fn store_err(err: StrataError, records: bool) -> StrataError {
    match err {
        StrataError::RetrievalError(_) => err,
        other if records => RetrievalError::RecordStoreUnavailable {
            reason: other.to_string(),
        }
        .into(),
        other => RetrievalError::StoreUnavailable {
            reason: other.to_string(),
        }
        .into(),
    }
}
