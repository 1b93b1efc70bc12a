//! Aspect scorer stage.
//!
//! For each aspect in the taxonomy, count reviews mentioning any of its
//! keywords (case-folded substring containment, at most one mention per
//! review per aspect) and accumulate a rating-derived sentiment
//! contribution of `rating - 3` per qualifying review.
//!
//! Sentiment stays on the raw rating-offset scale throughout: averages
//! land in [-2, +2] and classify as Positive above +0.5, Negative below
//! -0.5, Neutral between. The report bar maps the same average through
//! `(avg + 3) / 6` — one scale, one formula, applied everywhere.

use std::cmp::Reverse;

use crate::config::AnalyzerConfig;
use crate::review::Review;
use crate::summary::{Aspect, AspectReport, SentimentLabel};

/// Raw per-aspect tally. Zero-mention aspects are retained here; the
/// ranked report excludes them.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectScore {
    pub name: Aspect,
    pub mention_count: u32,
    pub sentiment_sum: f64,
}

impl AspectScore {
    /// Average sentiment, undefined (None) when nothing mentioned it.
    pub fn avg_sentiment(&self) -> Option<f64> {
        (self.mention_count > 0).then(|| self.sentiment_sum / f64::from(self.mention_count))
    }
}

/// Tally every aspect over the whole batch, in taxonomy order.
pub fn score_aspects(reviews: &[Review], cfg: &AnalyzerConfig) -> Vec<AspectScore> {
    let mut scores: Vec<AspectScore> = cfg
        .aspects
        .iter()
        .map(|a| AspectScore {
            name: a.name,
            mention_count: 0,
            sentiment_sum: 0.0,
        })
        .collect();

    for review in reviews {
        let lowered = review.text.to_lowercase();
        for (aspect, score) in cfg.aspects.iter().zip(scores.iter_mut()) {
            // First keyword hit wins; further matches in the same review
            // still count as a single mention.
            if aspect.keywords.iter().any(|k| lowered.contains(k.as_str())) {
                score.mention_count += 1;
                score.sentiment_sum += f64::from(review.rating) - 3.0;
            }
        }
    }

    scores
}

/// Ranked output: mentioned aspects only, descending by mention count
/// (stable, so taxonomy order breaks ties).
pub fn ranked_reports(scores: &[AspectScore], cfg: &AnalyzerConfig) -> Vec<AspectReport> {
    let mut reports: Vec<AspectReport> = scores
        .iter()
        .filter_map(|s| {
            let avg = s.avg_sentiment()?;
            Some(AspectReport {
                name: s.name,
                mention_count: s.mention_count,
                sentiment_sum: s.sentiment_sum,
                avg_sentiment: avg,
                label: classify(avg, cfg.aspect_sentiment_cutoff),
            })
        })
        .collect();

    reports.sort_by_key(|r| Reverse(r.mention_count));
    reports
}

pub fn classify(avg_sentiment: f64, cutoff: f64) -> SentimentLabel {
    if avg_sentiment > cutoff {
        SentimentLabel::Positive
    } else if avg_sentiment < -cutoff {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Bar fill for report rendering, 0-100 over the raw scale.
pub fn bar_percent(avg_sentiment: f64) -> f64 {
    ((avg_sentiment + 3.0) / 6.0 * 100.0).clamp(0.0, 100.0)
}
