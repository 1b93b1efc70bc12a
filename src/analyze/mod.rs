// src/analyze/mod.rs
//! Analysis pipeline entry: runs the pure stages over a validated batch
//! and assembles the `Summary` contract.
//!
//! Every stage reads the same immutable review slice and nothing else, so
//! the order below is arbitrary; the computation is bounded by total text
//! length and needs no concurrency.

pub mod aggregate;
pub mod aspects;
pub mod keywords;
pub mod phrases;

use crate::config::AnalyzerConfig;
use crate::review::{Review, SummarizeError};
use crate::summary::{SentimentLabel, Summary};

// Re-export convenient types.
pub use crate::analyze::aspects::AspectScore;
pub use crate::analyze::phrases::Polarity;

/// Run the whole pipeline. Pure and deterministic: same input, same
/// `Summary`, no I/O. The only error is the empty-input precondition.
pub fn summarize(reviews: &[Review], cfg: &AnalyzerConfig) -> Result<Summary, SummarizeError> {
    if reviews.is_empty() {
        return Err(SummarizeError::EmptyInput);
    }

    let sentiment_distribution = aggregate::sentiment_distribution(reviews);
    let overall_score = aggregate::overall_score(reviews);
    let sentiment_trend = aggregate::trend_label(&sentiment_distribution, cfg).to_string();

    let keywords = keywords::top_keywords(reviews, cfg);
    let pros = phrases::top_phrases(reviews, Polarity::Positive, cfg);
    let cons = phrases::top_phrases(reviews, Polarity::Negative, cfg);

    let scores = aspects::score_aspects(reviews, cfg);
    let aspect_reports = aspects::ranked_reports(&scores, cfg);

    let mut summary = Summary {
        total_reviews: reviews.len() as u32,
        overall_score,
        sentiment_trend,
        sentiment_distribution,
        rating_distribution: aggregate::rating_distribution(reviews),
        pros,
        cons,
        keywords,
        aspects: aspect_reports,
        average_review_length: aggregate::average_review_length(reviews),
        executive_summary: String::new(),
    };
    summary.executive_summary = executive_summary(&summary);
    Ok(summary)
}

/// Two-to-three sentence plain-text digest of the summary itself.
fn executive_summary(summary: &Summary) -> String {
    let mut out = format!(
        "The {} reviews show a {} sentiment, with an average score of {:.1}/5.0.",
        summary.total_reviews,
        summary.sentiment_trend.to_lowercase(),
        summary.overall_score,
    );

    // Aspects are already ranked by mentions; pick the loudest praise and
    // the loudest concern.
    let praised = summary
        .aspects
        .iter()
        .find(|a| a.label == SentimentLabel::Positive);
    let concern = summary
        .aspects
        .iter()
        .find(|a| a.label == SentimentLabel::Negative);

    match (praised, concern) {
        (Some(p), Some(c)) => {
            out.push_str(&format!(
                " Customers frequently praised the {}. However, some concerns were raised about the {}.",
                p.name, c.name
            ));
        }
        (Some(p), None) => {
            out.push_str(&format!(" Customers frequently praised the {}.", p.name));
        }
        (None, Some(c)) => {
            out.push_str(&format!(
                " The most common concerns were about the {}.",
                c.name
            ));
        }
        (None, None) => {
            if let Some(top) = summary.pros.first() {
                out.push_str(&format!(
                    " Customers particularly highlighted: \"{}\"",
                    top.text
                ));
            }
        }
    }

    out
}
