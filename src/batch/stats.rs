//! Aggregate statistics over analyzed reviews.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::types::{Sentiment, Topic};
use crate::batch::record::AnalyzedReview;

/// Number of entries in [`ReportStats::top_topics`].
pub const TOP_TOPICS: usize = 5;

/// Review count per sentiment; every category is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDistribution {
    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: Topic,
    pub count: usize,
}

/// Reviews created in one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

/// Summary of a batch of analyzed reviews.
///
/// Rejected reviews are counted in `rejected` and ignored everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_reviews: usize,
    pub rejected: usize,
    pub sentiment_distribution: SentimentDistribution,
    /// Mean score rounded to one decimal, `0.0` for an empty batch.
    pub average_score: f64,
    /// Most frequent topics, ties broken by topic priority.
    pub top_topics: Vec<TopicCount>,
    /// Reviews per month in ascending order; only reviews with a creation date.
    pub reviews_over_time: Vec<MonthCount>,
}

impl ReportStats {
    pub fn from_reviews(reviews: &[AnalyzedReview]) -> Self {
        let mut distribution = SentimentDistribution::default();
        let mut topic_counts: AHashMap<Topic, usize> = AHashMap::new();
        let mut months: BTreeMap<String, usize> = BTreeMap::new();
        let mut score_sum: u64 = 0;
        let mut total = 0;

        for review in reviews {
            let Some(result) = review.result() else {
                continue;
            };
            total += 1;
            score_sum += u64::from(result.score);
            distribution.record(result.sentiment);
            for topic in &result.topics {
                *topic_counts.entry(*topic).or_insert(0) += 1;
            }
            if let Some(created_at) = review.created_at {
                *months
                    .entry(created_at.format("%Y-%m").to_string())
                    .or_insert(0) += 1;
            }
        }

        let average_score = if total == 0 {
            0.0
        } else {
            round_one_decimal(score_sum as f64 / total as f64)
        };

        let mut top_topics: Vec<TopicCount> = topic_counts
            .into_iter()
            .map(|(topic, count)| TopicCount { topic, count })
            .collect();
        top_topics.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.topic.priority().cmp(&b.topic.priority()))
        });
        top_topics.truncate(TOP_TOPICS);

        Self {
            total_reviews: total,
            rejected: reviews.len() - total,
            sentiment_distribution: distribution,
            average_score,
            top_topics,
            reviews_over_time: months
                .into_iter()
                .map(|(month, count)| MonthCount { month, count })
                .collect(),
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
