//! HTTP surface: thin glue between the wire and the analyzer capability.
//! All analysis semantics live behind `DynAnalyzer`; handlers only
//! validate input and map errors onto status codes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::analyzer::DynAnalyzer;
use crate::fixtures;
use crate::review::{validate_batch, Review, ReviewDraft, SummarizeError};
use crate::summary::Summary;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: DynAnalyzer,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/summarize", post(summarize))
        .route("/sample", get(sample))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct SummarizeReq {
    reviews: Vec<ReviewDraft>,
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeReq>,
) -> Result<Json<Summary>, (StatusCode, Json<ErrorBody>)> {
    let reviews = validate_batch(body.reviews).map_err(reject)?;
    tracing::info!(
        count = reviews.len(),
        analyzer = state.analyzer.name(),
        "summarizing review batch"
    );
    let summary = state.analyzer.summarize(&reviews).await.map_err(reject)?;
    Ok(Json(summary))
}

async fn sample() -> Json<Vec<Review>> {
    Json(fixtures::sample_reviews())
}

/// Validation problems are the caller's fault (400); a dead remote
/// delegate is an upstream availability problem (502).
fn reject(err: SummarizeError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        SummarizeError::Unavailable(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::BAD_REQUEST,
    };
    if status == StatusCode::BAD_GATEWAY {
        tracing::warn!(error = %err, "analysis delegate unavailable");
    }
    (status, Json(ErrorBody { error: err.to_string() }))
}
