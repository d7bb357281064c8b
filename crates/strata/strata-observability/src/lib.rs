//! # strata-observability
//!
//! Tracing subscriber installation and the span vocabulary shared by the
//! similarity, retrieval, history and sensitivity engines.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, names};
