//! Prints the plain-text summary report for the bundled sample reviews.
//! Handy for eyeballing pipeline output without starting the server:
//! `cargo run --bin report_demo`

use review_summarizer::analyze::summarize;
use review_summarizer::config::AnalyzerConfig;
use review_summarizer::fixtures::sample_reviews;
use review_summarizer::report::render_report;

fn main() -> anyhow::Result<()> {
    let cfg = AnalyzerConfig::from_env();
    let reviews = sample_reviews();
    let summary = summarize(&reviews, &cfg)?;
    println!("{}", render_report(&summary));
    Ok(())
}
