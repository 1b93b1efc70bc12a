//! Rating classifier and aggregation stage.
//!
//! Pure rating arithmetic: sentiment buckets, the overall score, the star
//! histogram, mean review length, and the human-readable trend label.
//! Bucket policy is an exhaustive partition of the 1-5 range: 4-5 positive,
//! 1-2 negative, 3 neutral.

use crate::config::AnalyzerConfig;
use crate::review::Review;
use crate::summary::SentimentDistribution;

pub const TREND_MOSTLY_POSITIVE: &str = "Mostly Positive";
pub const TREND_MIXED_WITH_CONCERNS: &str = "Mixed with Concerns";
pub const TREND_BALANCED: &str = "Balanced";

pub fn sentiment_distribution(reviews: &[Review]) -> SentimentDistribution {
    let mut dist = SentimentDistribution::default();
    for review in reviews {
        if review.rating >= 4 {
            dist.positive += 1;
        } else if review.rating <= 2 {
            dist.negative += 1;
        } else {
            dist.neutral += 1;
        }
    }
    dist
}

/// Exact arithmetic mean of all ratings. Callers round for display only.
pub fn overall_score(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    f64::from(sum) / reviews.len() as f64
}

/// Star histogram, index 0 = one star. Ratings are pre-validated, so the
/// subtraction cannot underflow.
pub fn rating_distribution(reviews: &[Review]) -> [u32; 5] {
    let mut hist = [0u32; 5];
    for review in reviews {
        hist[usize::from(review.rating - 1)] += 1;
    }
    hist
}

/// Mean review text length in characters.
pub fn average_review_length(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: usize = reviews.iter().map(|r| r.text.chars().count()).sum();
    total as f64 / reviews.len() as f64
}

/// Proportion-threshold trend label. Cutoffs come from config and default
/// to 0.6 (positive share) and 0.3 (negative share).
pub fn trend_label(dist: &SentimentDistribution, cfg: &AnalyzerConfig) -> &'static str {
    let total = dist.total();
    if total == 0 {
        return TREND_BALANCED;
    }
    let total = f64::from(total);
    if f64::from(dist.positive) / total > cfg.positive_trend_cutoff {
        TREND_MOSTLY_POSITIVE
    } else if f64::from(dist.negative) / total > cfg.negative_trend_cutoff {
        TREND_MIXED_WITH_CONCERNS
    } else {
        TREND_BALANCED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> AnalyzerConfig {
        AnalyzerConfig::default_seed()
    }

    fn batch(ratings: &[u8]) -> Vec<Review> {
        ratings
            .iter()
            .map(|&r| Review::new("A placeholder review body.", r).expect("valid review"))
            .collect()
    }

    #[test]
    fn buckets_partition_the_rating_range() {
        let reviews = batch(&[1, 2, 3, 4, 5]);
        let dist = sentiment_distribution(&reviews);
        assert_eq!(dist.positive, 2);
        assert_eq!(dist.neutral, 1);
        assert_eq!(dist.negative, 2);
        assert_eq!(dist.total(), reviews.len() as u32);
    }

    #[test]
    fn overall_score_is_the_exact_mean() {
        assert_eq!(overall_score(&batch(&[5, 5, 5])), 5.0);
        assert_eq!(overall_score(&batch(&[5, 1])), 3.0);
        let third = overall_score(&batch(&[4, 4, 5]));
        assert!((third - 13.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_counts_each_star() {
        let hist = rating_distribution(&batch(&[5, 5, 3, 1]));
        assert_eq!(hist, [1, 0, 1, 0, 2]);
    }

    #[test]
    fn trend_cutoffs_are_exact() {
        let cfg = cfg();

        // 3 of 4 positive: 0.75 > 0.6.
        let dist = sentiment_distribution(&batch(&[5, 5, 4, 1]));
        assert_eq!(trend_label(&dist, &cfg), TREND_MOSTLY_POSITIVE);

        // 2 of 4 negative: 0.5 > 0.3, positive share not above 0.6.
        let dist = sentiment_distribution(&batch(&[1, 2, 4, 5]));
        assert_eq!(trend_label(&dist, &cfg), TREND_MIXED_WITH_CONCERNS);

        // Exactly 0.6 positive is not "Mostly Positive".
        let dist = sentiment_distribution(&batch(&[5, 5, 5, 3, 3]));
        assert_eq!(trend_label(&dist, &cfg), TREND_BALANCED);
    }
}
