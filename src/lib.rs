// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyze;
pub mod analyzer;
pub mod api;
pub mod config;
pub mod fixtures;
pub mod report;
pub mod review;
pub mod summary;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::{build_analyzer_from_env, Analyzer, DynAnalyzer, LocalAnalyzer, RemoteAnalyzer};
pub use crate::api::{router, AppState};
pub use crate::config::AnalyzerConfig;
pub use crate::review::{Review, ReviewDraft, SummarizeError};
pub use crate::summary::Summary;
