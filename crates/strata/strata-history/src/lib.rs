//! # strata-history
//!
//! Bounded, deduplicating, expiring logs of prior queries.
//!
//! One generic [`QueryHistoryCache`] serves every query domain; a domain
//! is a [`QueryDescriptor`] type that knows its canonical dedup key and its
//! default [`HistoryPolicy`]. Entries persist through an injected
//! [`IKeyValueStore`](strata_core::traits::IKeyValueStore).

pub mod cache;
pub mod descriptor;
pub mod domains;
pub mod entry;
pub mod policy;
pub mod store;

pub use cache::{CrawlHistory, EvidenceHistory, QueryHistoryCache};
pub use descriptor::QueryDescriptor;
pub use domains::{CrawlMode, CrawlQuery, EvidenceQuery};
pub use entry::{HistoryEntry, ResultMetadata};
pub use policy::HistoryPolicy;
pub use store::{FileKeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
