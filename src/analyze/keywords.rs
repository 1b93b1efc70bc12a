//! Tokenizer / keyword ranker stage.
//!
//! Case-folds all review text, extracts word-character runs (anything else
//! is a boundary), drops stop-words and short tokens, counts frequency, and
//! returns the top N. Ties keep first-encounter order so the ranking is
//! deterministic across runs.

use std::cmp::Reverse;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::AnalyzerConfig;
use crate::review::Review;
use crate::summary::KeywordCount;

/// Maximal word-character runs in already-lowercased text.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9_]+").expect("valid token regex"));

pub fn top_keywords(reviews: &[Review], cfg: &AnalyzerConfig) -> Vec<KeywordCount> {
    // Entries stay in first-encounter order; the index maps token -> slot.
    let mut entries: Vec<KeywordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for review in reviews {
        let lowered = review.text.to_lowercase();
        for m in WORD_RE.find_iter(&lowered) {
            let token = m.as_str();
            if token.len() < cfg.min_token_len || cfg.stopwords.contains(token) {
                continue;
            }
            match index.get(token).copied() {
                Some(slot) => entries[slot].count += 1,
                None => {
                    index.insert(token.to_string(), entries.len());
                    entries.push(KeywordCount {
                        word: token.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort: equal counts keep first-seen order.
    entries.sort_by_key(|k| Reverse(k.count));
    entries.truncate(cfg.max_keywords);
    entries
}
