//! # Review Ingestion
//! Validated input types for the analysis pipeline.
//!
//! A `Review` pairs free text with a 1-5 star rating. Construction goes
//! through `Review::new` (or `validate_batch` for wire input), so the
//! analytical stages never see a blank text or an out-of-range rating.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// One product review. Immutable once constructed; the core never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub text: String,
    pub rating: u8,
}

impl Review {
    /// Trim and validate. Blank text and ratings outside 1..=5 are rejected
    /// here, before any analysis runs.
    pub fn new(text: impl Into<String>, rating: u8) -> Result<Self, SummarizeError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(SummarizeError::BlankText);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(SummarizeError::InvalidRating(rating));
        }
        Ok(Self { text, rating })
    }
}

/// Raw review as it arrives on the wire, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub text: String,
    pub rating: u8,
}

/// Validate a whole batch. Empty batches and the first malformed review
/// fail fast; the pipeline itself never receives invalid input.
pub fn validate_batch(drafts: Vec<ReviewDraft>) -> Result<Vec<Review>, SummarizeError> {
    if drafts.is_empty() {
        return Err(SummarizeError::EmptyInput);
    }
    drafts
        .into_iter()
        .map(|d| Review::new(d.text, d.rating))
        .collect()
}

/// Errors surfaced at the ingestion and analyzer boundaries.
/// The analysis stages themselves are total over validated input.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Precondition failure: analyzing nothing is not a zero-filled Summary.
    #[error("no reviews provided")]
    EmptyInput,

    #[error("rating {0} is outside the 1-5 star range")]
    InvalidRating(u8),

    #[error("review text is empty")]
    BlankText,

    /// Remote delegate could not be reached or answered with a failure.
    /// Distinct from the validation errors so callers can surface it as a
    /// service-availability problem rather than bad input.
    #[error("analysis service unavailable: {0}")]
    Unavailable(String),
}
