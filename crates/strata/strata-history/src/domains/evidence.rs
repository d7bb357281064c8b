use serde::{Deserialize, Serialize};

use crate::descriptor::QueryDescriptor;
use crate::policy::HistoryPolicy;

/// A free-text evidence search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceQuery {
    pub query: String,
}

impl EvidenceQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl QueryDescriptor for EvidenceQuery {
    fn canonical_key(&self) -> String {
        self.query.clone()
    }

    fn default_policy() -> HistoryPolicy {
        HistoryPolicy::evidence()
    }
}
