//! Common types produced by the analysis engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LexisentError;

/// Three-way sentiment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favorable text.
    Positive,
    /// Neither side dominates (including no matches at all).
    Neutral,
    /// Unfavorable text.
    Negative,
}

impl Sentiment {
    /// All categories, in reporting order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject-matter tag a review may talk about.
///
/// The declaration order is the detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Delivery,
    Price,
    Quality,
    Service,
    Speed,
    Packaging,
    EaseOfUse,
}

impl Topic {
    /// All topics in detection priority order.
    pub const ALL: [Topic; 7] = [
        Topic::Delivery,
        Topic::Price,
        Topic::Quality,
        Topic::Service,
        Topic::Speed,
        Topic::Packaging,
        Topic::EaseOfUse,
    ];

    /// Snake-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Delivery => "delivery",
            Topic::Price => "price",
            Topic::Quality => "quality",
            Topic::Service => "service",
            Topic::Speed => "speed",
            Topic::Packaging => "packaging",
            Topic::EaseOfUse => "ease_of_use",
        }
    }

    /// Position in the priority order.
    pub fn priority(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = LexisentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| LexisentError::invalid_argument(format!("unknown topic `{s}`")))
    }
}

/// Outcome of analyzing one piece of text.
///
/// Owned by the caller; the engine keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall sentiment.
    pub sentiment: Sentiment,
    /// Confidence score, always within `0..=100`.
    pub score: u8,
    /// Distinct topics in detection order, at most five by default.
    pub topics: Vec<Topic>,
}
