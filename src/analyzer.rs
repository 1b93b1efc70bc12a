//! # Analyzer Capability
//! The pipeline behind a swappable trait: local runs the pure stages
//! in-process, remote delegates the whole batch to an external service
//! that speaks the same `Summary` contract on `POST /summarize`.
//!
//! Selection happens once at startup via `build_analyzer_from_env`; the
//! rest of the app only sees `DynAnalyzer`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::analyze;
use crate::config::AnalyzerConfig;
use crate::review::{Review, SummarizeError};
use crate::summary::Summary;

pub const ENV_REMOTE_URL: &str = "REVIEW_REMOTE_URL";

/// Whole-pipeline timeout for the remote delegate. Retry/backoff, if ever
/// wanted, belongs to the transport layer, not here.
const REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Summarize a validated, non-empty batch.
    async fn summarize(&self, reviews: &[Review]) -> Result<Summary, SummarizeError>;
    /// Implementation name for logs and diagnostics.
    fn name(&self) -> &'static str;
}

/// Trait object used by handlers and tests.
pub type DynAnalyzer = Arc<dyn Analyzer>;

/// Factory: remote delegate when `REVIEW_REMOTE_URL` is set, local
/// pipeline otherwise.
pub fn build_analyzer_from_env(config: Arc<AnalyzerConfig>) -> DynAnalyzer {
    match std::env::var(ENV_REMOTE_URL) {
        Ok(url) if !url.trim().is_empty() => {
            let url = url.trim().to_string();
            info!(%url, "using remote analyzer delegate");
            Arc::new(RemoteAnalyzer::new(url))
        }
        _ => Arc::new(LocalAnalyzer::new(config)),
    }
}

/// In-process analyzer over a read-only, shared config.
#[derive(Debug, Clone)]
pub struct LocalAnalyzer {
    config: Arc<AnalyzerConfig>,
}

impl LocalAnalyzer {
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Analyzer for LocalAnalyzer {
    async fn summarize(&self, reviews: &[Review]) -> Result<Summary, SummarizeError> {
        analyze::summarize(reviews, &self.config)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

/// Delegate to an external summarization service.
#[derive(Debug, Clone)]
pub struct RemoteAnalyzer {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct RemoteRequest<'a> {
    reviews: &'a [Review],
}

impl RemoteAnalyzer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/summarize", self.base_url)
    }
}

#[async_trait]
impl Analyzer for RemoteAnalyzer {
    async fn summarize(&self, reviews: &[Review]) -> Result<Summary, SummarizeError> {
        if reviews.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let url = self.endpoint();
        let resp = self
            .http
            .post(&url)
            .timeout(REMOTE_TIMEOUT)
            .json(&RemoteRequest { reviews })
            .send()
            .await
            .map_err(|e| {
                SummarizeError::Unavailable(format!(
                    "could not reach {url}: {e}; is the analysis service running?"
                ))
            })?;

        if !resp.status().is_success() {
            return Err(SummarizeError::Unavailable(format!(
                "analysis service answered {}",
                resp.status()
            )));
        }

        resp.json::<Summary>()
            .await
            .map_err(|e| SummarizeError::Unavailable(format!("invalid summary payload: {e}")))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_analyzer_runs_the_pipeline() {
        let analyzer = LocalAnalyzer::new(Arc::new(AnalyzerConfig::default_seed()));
        let reviews = vec![Review::new("Excellent quality, very sturdy build overall.", 5)
            .expect("valid review")];
        let summary = analyzer.summarize(&reviews).await.expect("summary");
        assert_eq!(summary.total_reviews, 1);
        assert_eq!(analyzer.name(), "local");
    }

    #[tokio::test]
    async fn remote_analyzer_surfaces_connection_failures() {
        // Reserved TEST-NET-1 address: nothing listens there.
        let analyzer = RemoteAnalyzer::new("http://192.0.2.1:1/");
        let reviews =
            vec![Review::new("Anything at all, long enough to matter.", 4).expect("valid review")];
        let err = analyzer.summarize(&reviews).await.expect_err("must fail");
        assert!(matches!(err, SummarizeError::Unavailable(_)));
        let msg = err.to_string();
        assert!(msg.contains("/summarize"), "message names the endpoint: {msg}");
    }

    #[tokio::test]
    async fn remote_analyzer_rejects_empty_batches_without_a_call() {
        let analyzer = RemoteAnalyzer::new("http://192.0.2.1:1");
        let err = analyzer.summarize(&[]).await.expect_err("must fail");
        assert!(matches!(err, SummarizeError::EmptyInput));
    }
}
