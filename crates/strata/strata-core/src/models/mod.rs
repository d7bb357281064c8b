mod analysis_record;
mod feature_record;
mod pattern;

pub use analysis_record::{AnalysisRecord, StoredEmbedding};
pub use feature_record::FeatureRecord;
pub use pattern::{PatternCategory, StrategicPattern};
