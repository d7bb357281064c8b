// Single source of truth for all default values.

// --- Similarity ---
pub const DEFAULT_TEXT_WEIGHT: f64 = 0.6;
pub const DEFAULT_STRUCTURAL_WEIGHT: f64 = 0.4;
pub const DEFAULT_SIGNATURE_WEIGHT: f64 = 1.5;
pub const DEFAULT_MIN_PLAYER_COUNT: u32 = 2;

// --- Retrieval ---
pub const DEFAULT_CANDIDATE_LIMIT: usize = 200;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 128;

// --- History ---
pub const DEFAULT_EVIDENCE_STORAGE_KEY: &str = "evidence-query-history";
pub const DEFAULT_EVIDENCE_CAPACITY: usize = 20;
pub const DEFAULT_EVIDENCE_EXPIRY_DAYS: i64 = 30;
pub const DEFAULT_CRAWL_STORAGE_KEY: &str = "crawl-history";
pub const DEFAULT_CRAWL_CAPACITY: usize = 10;
pub const DEFAULT_CRAWL_EXPIRY_DAYS: i64 = 14;

// --- Sensitivity ---
pub const DEFAULT_PERTURBATIONS: usize = 20;
pub const DEFAULT_PERTURBATION_FRACTION: f64 = 0.2;
pub const DEFAULT_SUBSAMPLE_PROBABILITY: f64 = 0.3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;
