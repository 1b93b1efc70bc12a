//! Review Summarizer — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use review_summarizer::analyzer::build_analyzer_from_env;
use review_summarizer::api::{router, AppState};
use review_summarizer::config::AnalyzerConfig;

const ENV_BIND: &str = "REVIEW_BIND";
const DEFAULT_BIND: &str = "127.0.0.1:5000";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_summarizer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Arc::new(AnalyzerConfig::from_env());
    let analyzer = build_analyzer_from_env(config);
    let state = AppState { analyzer };
    let app = router(state);

    let addr = std::env::var(ENV_BIND).unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "review summarizer listening");
    axum::serve(listener, app).await?;
    Ok(())
}
