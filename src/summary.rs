//! # Summary Contract
//! Output types returned to rendering layers (browser UI, CLI report,
//! remote callers). Every field is always present — empty vectors rather
//! than absent keys — so consumers can destructure uniformly.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// One ranked keyword with its corpus-wide frequency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordCount {
    pub word: String,
    pub count: u32,
}

/// One representative pro/con phrase bucket. `text` is the first 60 chars
/// of the trimmed sentence plus an ellipsis marker (<= 63 chars total);
/// sentences sharing that prefix collapse into one entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhraseEntry {
    pub text: String,
    pub count: u32,
}

/// Review counts per sentiment bucket. Buckets partition the rating range,
/// so the three counts always sum to the review total.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentDistribution {
    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }
}

/// Fixed aspect taxonomy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Quality,
    Price,
    Design,
    Performance,
    Comfort,
}

impl Aspect {
    pub const ALL: [Aspect; 5] = [
        Aspect::Quality,
        Aspect::Price,
        Aspect::Design,
        Aspect::Performance,
        Aspect::Comfort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Quality => "quality",
            Aspect::Price => "price",
            Aspect::Design => "design",
            Aspect::Performance => "performance",
            Aspect::Comfort => "comfort",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical reading of an aspect's average sentiment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        })
    }
}

/// Ranked aspect entry. `mention_count` counts reviews (not occurrences)
/// containing at least one taxonomy keyword; `sentiment_sum` accumulates
/// `(rating - 3)` once per qualifying review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AspectReport {
    pub name: Aspect,
    pub mention_count: u32,
    pub sentiment_sum: f64,
    pub avg_sentiment: f64,
    pub label: SentimentLabel,
}

/// The full analytical summary. Stateless and fully derived: recomputed
/// from scratch on every invocation, no caching or incremental updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_reviews: u32,
    /// Exact arithmetic mean of all ratings. Kept at full precision here;
    /// rounded to 2 decimals on the wire and in reports.
    #[serde(serialize_with = "round2")]
    pub overall_score: f64,
    pub sentiment_trend: String,
    pub sentiment_distribution: SentimentDistribution,
    /// Star histogram, index 0 = one star.
    pub rating_distribution: [u32; 5],
    pub pros: Vec<PhraseEntry>,
    pub cons: Vec<PhraseEntry>,
    pub keywords: Vec<KeywordCount>,
    /// Aspects with at least one mention, sorted by descending mentions.
    pub aspects: Vec<AspectReport>,
    /// Mean review text length in characters.
    #[serde(serialize_with = "round2")]
    pub average_review_length: f64,
    pub executive_summary: String,
}

fn round2<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64((v * 100.0).round() / 100.0)
}
