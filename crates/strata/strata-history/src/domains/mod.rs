mod crawl;
mod evidence;

pub use crawl::{CrawlMode, CrawlQuery};
pub use evidence::EvidenceQuery;
