//! # Analyzer Configuration
//!
//! All tunables of the analysis pipeline in one place: stop-words,
//! token/sentence length floors, ranking caps, trend cutoffs, the aspect
//! sentiment cutoff, and the aspect keyword taxonomy.
//!
//! - Loads from a JSON file (`config/analyzer.json` by default, overridable
//!   via `ANALYZER_CONFIG_PATH`).
//! - Falls back to the built-in `default_seed()` when the file is missing
//!   or malformed, so the service always boots with the canonical defaults.
//! - Read-only after load; shared via `Arc` and safe for concurrent reads.

use std::collections::HashSet;
use std::{fs, path::Path};

use serde::Deserialize;

use crate::summary::Aspect;

pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.json";
pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";

/// One aspect with its keyword set. Matching is case-folded substring
/// containment; a review counts at most once per aspect.
#[derive(Debug, Clone, Deserialize)]
pub struct AspectKeywords {
    pub name: Aspect,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Function words dropped before keyword counting.
    #[serde(default = "default_stopwords")]
    pub stopwords: HashSet<String>,
    /// Minimum token length to qualify as a keyword.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
    /// Keyword ranking cap.
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,
    /// Pros/cons ranking cap (per polarity).
    #[serde(default = "default_max_phrases")]
    pub max_phrases: usize,
    /// Sentences at or below this trimmed length are too short to keep.
    #[serde(default = "default_min_sentence_len")]
    pub min_sentence_len: usize,
    /// Phrase dedup key length: sentences sharing this prefix collapse.
    #[serde(default = "default_phrase_prefix_len")]
    pub phrase_prefix_len: usize,
    /// positive/total above this reads "Mostly Positive".
    #[serde(default = "default_positive_trend_cutoff")]
    pub positive_trend_cutoff: f64,
    /// negative/total above this reads "Mixed with Concerns".
    #[serde(default = "default_negative_trend_cutoff")]
    pub negative_trend_cutoff: f64,
    /// Aspect average sentiment beyond +/- this is Positive/Negative.
    /// Raw rating-offset scale: per-review contributions are `rating - 3`.
    #[serde(default = "default_aspect_sentiment_cutoff")]
    pub aspect_sentiment_cutoff: f64,
    #[serde(default = "default_aspects")]
    pub aspects: Vec<AspectKeywords>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::default_seed()
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file.
    /// Falls back to `default_seed()` on any read or parse error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// Load from `ANALYZER_CONFIG_PATH`, or the default path.
    pub fn from_env() -> Self {
        let path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_file(path)
    }

    /// Built-in defaults matching the documented contract.
    pub fn default_seed() -> Self {
        Self {
            stopwords: default_stopwords(),
            min_token_len: default_min_token_len(),
            max_keywords: default_max_keywords(),
            max_phrases: default_max_phrases(),
            min_sentence_len: default_min_sentence_len(),
            phrase_prefix_len: default_phrase_prefix_len(),
            positive_trend_cutoff: default_positive_trend_cutoff(),
            negative_trend_cutoff: default_negative_trend_cutoff(),
            aspect_sentiment_cutoff: default_aspect_sentiment_cutoff(),
            aspects: default_aspects(),
        }
    }
}

fn default_stopwords() -> HashSet<String> {
    [
        "this", "that", "with", "have", "from", "they", "been", "were", "just", "very", "about",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_min_token_len() -> usize {
    4
}

fn default_max_keywords() -> usize {
    15
}

fn default_max_phrases() -> usize {
    5
}

fn default_min_sentence_len() -> usize {
    20
}

fn default_phrase_prefix_len() -> usize {
    60
}

fn default_positive_trend_cutoff() -> f64 {
    0.6
}

fn default_negative_trend_cutoff() -> f64 {
    0.3
}

fn default_aspect_sentiment_cutoff() -> f64 {
    0.5
}

fn default_aspects() -> Vec<AspectKeywords> {
    fn entry(name: Aspect, keywords: &[&str]) -> AspectKeywords {
        AspectKeywords {
            name,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    vec![
        entry(Aspect::Quality, &["quality", "build", "material"]),
        entry(
            Aspect::Price,
            &["price", "value", "expensive", "cheap", "cost"],
        ),
        entry(Aspect::Design, &["design", "look", "beautiful", "style"]),
        entry(
            Aspect::Performance,
            &["performance", "work", "fast", "reliable"],
        ),
        entry(Aspect::Comfort, &["comfort", "comfortable", "easy"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_matches_documented_contract() {
        let cfg = AnalyzerConfig::default_seed();
        assert_eq!(cfg.min_token_len, 4);
        assert_eq!(cfg.max_keywords, 15);
        assert_eq!(cfg.max_phrases, 5);
        assert_eq!(cfg.min_sentence_len, 20);
        assert_eq!(cfg.phrase_prefix_len, 60);
        assert!(cfg.stopwords.contains("about"));
        assert_eq!(cfg.stopwords.len(), 11);
        assert_eq!(cfg.aspects.len(), 5);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: AnalyzerConfig =
            serde_json::from_str(r#"{"max_keywords": 3}"#).expect("parse partial config");
        assert_eq!(cfg.max_keywords, 3);
        assert_eq!(cfg.min_token_len, 4);
        assert_eq!(cfg.aspects.len(), 5);
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let cfg = AnalyzerConfig::load_from_file("definitely/not/here.json");
        assert_eq!(cfg.max_keywords, 15);
    }
}
