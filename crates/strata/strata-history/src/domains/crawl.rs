use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::QueryDescriptor;
use crate::policy::HistoryPolicy;

/// Web acquisition operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrawlMode {
    Scrape,
    Crawl,
    Search,
}

impl CrawlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scrape => "scrape",
            Self::Crawl => "crawl",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for CrawlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scrape, crawl, or search operation over a set of URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlQuery {
    pub mode: CrawlMode,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

impl CrawlQuery {
    pub fn new(mode: CrawlMode, query: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            mode,
            query: query.into(),
            urls,
        }
    }
}

impl QueryDescriptor for CrawlQuery {
    /// `mode|query|url1,url2,...`; URL order is significant.
    fn canonical_key(&self) -> String {
        format!("{}|{}|{}", self.mode, self.query, self.urls.join(","))
    }

    fn default_policy() -> HistoryPolicy {
        HistoryPolicy::crawl()
    }
}
