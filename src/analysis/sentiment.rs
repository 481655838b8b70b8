//! Sentiment classification from lexicon match counts.

use crate::analysis::counts::LexiconCounts;
use crate::analysis::text::NormalizedText;
use crate::analysis::types::Sentiment;
use crate::config::ScoringConfig;
use crate::lexicon::Lexicon;

/// Three-way classifier comparing positive and negative match counts.
///
/// A side wins only when its count exceeds the other side's count times
/// `ratio`; positive is checked first. With no matches at all both checks
/// fail and the text is neutral, while a single unopposed match is enough
/// to win (`1 > 0 * ratio`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentClassifier {
    ratio: f64,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl SentimentClassifier {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            ratio: config.sentiment_ratio,
        }
    }

    /// Classify precomputed counts.
    pub fn classify_counts(&self, counts: &LexiconCounts) -> Sentiment {
        let positive = counts.positive as f64;
        let negative = counts.negative as f64;

        if positive > negative * self.ratio {
            Sentiment::Positive
        } else if negative > positive * self.ratio {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Normalize and count `text`, then classify it.
    pub fn classify(&self, lexicon: &Lexicon, text: &str) -> Sentiment {
        let normalized = NormalizedText::new(text);
        self.classify_counts(&LexiconCounts::compute(lexicon, &normalized))
    }
}
