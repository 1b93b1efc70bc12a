//! Sentence extractor stage: representative pros/cons phrases.
//!
//! Runs once per polarity. Reviews are filtered by rating (4-5 for pros,
//! 1-2 for cons; rating 3 lands in neither), split into sentences on runs
//! of `.`, `!`, `?`, and trimmed. Sentences at or below the length floor
//! are dropped as uninformative. Surviving sentences are bucketed by a
//! truncated-prefix key: the first 60 chars plus an ellipsis marker. Two
//! sentences sharing that prefix count as the same point. This is a cheap,
//! deliberately lossy similarity proxy, not semantic clustering.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::config::AnalyzerConfig;
use crate::review::Review;
use crate::summary::PhraseEntry;

/// Which rating band a phrase run draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Pros: ratings 4 and 5.
    Positive,
    /// Cons: ratings 1 and 2.
    Negative,
}

impl Polarity {
    fn admits(self, rating: u8) -> bool {
        match self {
            Polarity::Positive => rating >= 4,
            Polarity::Negative => rating <= 2,
        }
    }
}

pub fn top_phrases(reviews: &[Review], polarity: Polarity, cfg: &AnalyzerConfig) -> Vec<PhraseEntry> {
    let mut entries: Vec<PhraseEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for review in reviews.iter().filter(|r| polarity.admits(r.rating)) {
        for sentence in split_sentences(&review.text) {
            if sentence.chars().count() <= cfg.min_sentence_len {
                continue;
            }
            let key = prefix_key(sentence, cfg.phrase_prefix_len);
            match index.get(&key).copied() {
                Some(slot) => entries[slot].count += 1,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push(PhraseEntry {
                        text: key,
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort: equal counts keep first-seen order.
    entries.sort_by_key(|p| Reverse(p.count));
    entries.truncate(cfg.max_phrases);
    entries
}

/// Runs of terminators collapse into a single boundary because the empty
/// segments between them are filtered out.
fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn prefix_key(sentence: &str, prefix_len: usize) -> String {
    let mut key: String = sentence.chars().take(prefix_len).collect();
    key.push_str("...");
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> AnalyzerConfig {
        AnalyzerConfig::default_seed()
    }

    fn review(text: &str, rating: u8) -> Review {
        Review::new(text, rating).expect("valid review")
    }

    #[test]
    fn pros_only_draw_from_four_and_five_star_reviews() {
        let reviews = vec![
            review("The build quality is genuinely impressive here.", 5),
            review("Honestly a complete disappointment from day one.", 1),
            review("Perfectly average, nothing to write home about here.", 3),
        ];
        let pros = top_phrases(&reviews, Polarity::Positive, &cfg());
        assert_eq!(pros.len(), 1);
        assert!(pros[0].text.starts_with("The build quality"));

        let cons = top_phrases(&reviews, Polarity::Negative, &cfg());
        assert_eq!(cons.len(), 1);
        assert!(cons[0].text.starts_with("Honestly a complete"));
    }

    #[test]
    fn short_sentences_are_dropped() {
        let reviews = vec![review("Love it. The comfort level on long days is excellent.", 5)];
        let pros = top_phrases(&reviews, Polarity::Positive, &cfg());
        assert_eq!(pros.len(), 1);
        assert!(pros[0].text.starts_with("The comfort level"));
    }

    #[test]
    fn terminator_runs_are_one_boundary() {
        let reviews = vec![review("Really wonderful piece of kit!!! Would buy it all over again...", 5)];
        let pros = top_phrases(&reviews, Polarity::Positive, &cfg());
        let texts: Vec<&str> = pros.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Really wonderful piece of kit...",
                "Would buy it all over again..."
            ]
        );
    }

    #[test]
    fn identical_prefixes_collapse_into_one_bucket() {
        // 70-char opening sentence, shared verbatim across three reviews.
        let opener = "This product absolutely exceeded all of my expectations in every way";
        assert!(opener.chars().count() > 60);
        let reviews = vec![
            review(&format!("{opener}. Loved the color too."), 5),
            review(&format!("{opener}. Works great."), 5),
            review(&format!("{opener}."), 4),
        ];
        let pros = top_phrases(&reviews, Polarity::Positive, &cfg());
        assert_eq!(pros[0].count, 3);
        assert_eq!(pros[0].text.chars().count(), 63);
        assert!(pros[0].text.ends_with("..."));
    }

    #[test]
    fn rating_three_reviews_yield_nothing() {
        let reviews = vec![review("It's fine, nothing special, average performance.", 3)];
        assert!(top_phrases(&reviews, Polarity::Positive, &cfg()).is_empty());
        assert!(top_phrases(&reviews, Polarity::Negative, &cfg()).is_empty());
    }

    #[test]
    fn caps_at_max_phrases() {
        let text = (0..8)
            .map(|i| format!("Sentence number {i} with plenty of padding words."))
            .collect::<Vec<_>>()
            .join(" ");
        let pros = top_phrases(&[review(&text, 5)], Polarity::Positive, &cfg());
        assert_eq!(pros.len(), 5);
    }
}
