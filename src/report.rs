//! Plain-text report rendering for CLI and demo use.
//! Pure formatting over a finished `Summary`; no analysis happens here.

use std::fmt::Write as _;

use crate::analyze::aspects::bar_percent;
use crate::summary::Summary;

const RULE: &str = "--------------------------------------------------------------------------------";

pub fn render_report(summary: &Summary) -> String {
    let mut out = String::new();
    let total = summary.sentiment_distribution.total().max(1) as f64;

    let _ = writeln!(out, "{}", "=".repeat(80));
    let _ = writeln!(out, "PRODUCT REVIEW SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(80));

    let _ = writeln!(out, "\n{}", summary.executive_summary);
    let _ = writeln!(out, "\nTotal Reviews Analyzed: {}", summary.total_reviews);
    let _ = writeln!(out, "Overall Score: {:.2}/5.0", summary.overall_score);
    let _ = writeln!(out, "Sentiment Trend: {}", summary.sentiment_trend);

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "SENTIMENT DISTRIBUTION:");
    let dist = &summary.sentiment_distribution;
    for (label, count) in [
        ("Positive", dist.positive),
        ("Neutral", dist.neutral),
        ("Negative", dist.negative),
    ] {
        let pct = f64::from(count) / total * 100.0;
        let _ = writeln!(out, "  {label}: {count} ({pct:.1}%)");
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "TOP STRENGTHS:");
    if summary.pros.is_empty() {
        let _ = writeln!(out, "  No specific strengths identified");
    }
    for (i, pro) in summary.pros.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} (x{})", i + 1, pro.text, pro.count);
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "KEY CONCERNS:");
    if summary.cons.is_empty() {
        let _ = writeln!(out, "  No significant concerns identified");
    }
    for (i, con) in summary.cons.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} (x{})", i + 1, con.text, con.count);
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "TOP KEYWORDS:");
    let keywords = summary
        .keywords
        .iter()
        .map(|k| format!("{} ({})", k.word, k.count))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "  {keywords}");

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "ASPECT ANALYSIS:");
    for aspect in &summary.aspects {
        let _ = writeln!(
            out,
            "  {}: {} ({} mentions, avg {:+.2}, bar {:.0}%)",
            aspect.name,
            aspect.label,
            aspect.mention_count,
            aspect.avg_sentiment,
            bar_percent(aspect.avg_sentiment),
        );
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "RATING DISTRIBUTION:");
    for star in (1..=5u8).rev() {
        let count = summary.rating_distribution[usize::from(star - 1)];
        let pct = f64::from(count) / f64::from(summary.total_reviews.max(1)) * 100.0;
        let bar: String = "*".repeat(usize::from(star));
        let _ = writeln!(out, "  {bar:<5}: {count} ({pct:.1}%)");
    }

    let _ = writeln!(out, "\n{}", "=".repeat(80));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::summarize;
    use crate::config::AnalyzerConfig;
    use crate::fixtures::sample_reviews;

    #[test]
    fn report_renders_every_section() {
        let cfg = AnalyzerConfig::default_seed();
        let summary = summarize(&sample_reviews(), &cfg).expect("summary");
        let report = render_report(&summary);

        for heading in [
            "PRODUCT REVIEW SUMMARY",
            "SENTIMENT DISTRIBUTION:",
            "TOP STRENGTHS:",
            "KEY CONCERNS:",
            "TOP KEYWORDS:",
            "ASPECT ANALYSIS:",
            "RATING DISTRIBUTION:",
        ] {
            assert!(report.contains(heading), "missing section: {heading}");
        }
        assert!(report.contains("Total Reviews Analyzed: 8"));
    }

    #[test]
    fn empty_lists_render_placeholders() {
        let cfg = AnalyzerConfig::default_seed();
        let reviews = vec![crate::review::Review::new(
            "It's fine, nothing special, average performance.",
            3,
        )
        .expect("valid review")];
        let summary = summarize(&reviews, &cfg).expect("summary");
        let report = render_report(&summary);
        assert!(report.contains("No specific strengths identified"));
        assert!(report.contains("No significant concerns identified"));
    }
}
