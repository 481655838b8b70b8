//! Batch analysis and aggregate reporting.
//!
//! Reads reviews from JSON Lines or plain text, analyzes them in parallel and
//! summarizes the results: sentiment distribution, average score, most
//! frequent topics and reviews per month.

pub mod record;
pub mod stats;

use rayon::prelude::*;

use crate::analysis::analyzer::SentimentAnalyzer;
use crate::config::ValidationConfig;

pub use record::{AnalyzedReview, ReviewOutcome, ReviewRecord, read_records};
pub use stats::{MonthCount, ReportStats, SentimentDistribution, TopicCount};

/// Analyze every record in parallel, keeping input order.
///
/// Records that fail `policy` are kept as rejected entries so callers can
/// report them; they never reach the analyzer.
pub fn analyze_batch(
    analyzer: &SentimentAnalyzer,
    records: &[ReviewRecord],
    policy: &ValidationConfig,
) -> Vec<AnalyzedReview> {
    let reviews: Vec<AnalyzedReview> = records
        .par_iter()
        .map(|record| {
            let outcome = match analyzer.analyze_checked(&record.text, policy) {
                Ok(result) => ReviewOutcome::Analyzed(result),
                Err(e) => ReviewOutcome::Rejected {
                    message: e.to_string(),
                },
            };
            AnalyzedReview::new(record, outcome)
        })
        .collect();

    let rejected = reviews.iter().filter(|r| !r.is_analyzed()).count();
    log::info!(
        "analyzed {} reviews ({} rejected)",
        reviews.len() - rejected,
        rejected
    );

    reviews
}
