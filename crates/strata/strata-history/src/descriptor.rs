use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::policy::HistoryPolicy;

/// The identifying part of a history entry for one query domain.
pub trait QueryDescriptor: Clone + Serialize + DeserializeOwned {
    /// Canonical string the dedup hash is computed over.
    fn canonical_key(&self) -> String;

    /// Policy used when the cache is opened without an explicit one.
    fn default_policy() -> HistoryPolicy;
}
