//! Sentiment, score and topic analysis.
//!
//! The pipeline for one text is:
//!
//! 1. [`text::NormalizedText`] lowercases it and measures its shape.
//! 2. [`counts::LexiconCounts`] counts positive, negative and intensifier
//!    substrings once.
//! 3. [`sentiment::SentimentClassifier`], [`score::ScoreCalculator`] and
//!    [`topic::TopicDetector`] turn those into the three outputs.
//!
//! [`analyzer::SentimentAnalyzer`] wires the steps together.

pub mod analyzer;
pub mod counts;
pub mod score;
pub mod sentiment;
pub mod text;
pub mod topic;
pub mod types;

pub use analyzer::{AnalysisReport, SentimentAnalyzer, analyze};
pub use types::{AnalysisResult, Sentiment, Topic};
