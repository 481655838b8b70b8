//! # lexisent
//!
//! A deterministic, lexicon-driven analyzer for customer reviews.
//!
//! ## Features
//!
//! - Three-way sentiment from positive/negative word counts
//! - A 0–100 confidence score shaped by length, exclamation marks and
//!   intensifiers
//! - Ordered topic tags (delivery, price, quality, ...)
//! - Built-in French/English lexicon, or custom tables loaded from JSON
//! - Parallel batch analysis with aggregate statistics
//!
//! ## Example
//!
//! ```
//! use lexisent::analysis::{SentimentAnalyzer, Sentiment, Topic};
//!
//! let analyzer = SentimentAnalyzer::new();
//! let result = analyzer.analyze("Bien.");
//!
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! assert_eq!(result.score, 42);
//! assert!(result.topics.is_empty());
//!
//! let result = analyzer.analyze("Livraison rapide, emballage soigné");
//! assert_eq!(result.topics, vec![Topic::Delivery, Topic::Speed, Topic::Packaging]);
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod validation;

pub mod prelude {
    pub use crate::analysis::{AnalysisResult, Sentiment, SentimentAnalyzer, Topic};
    pub use crate::config::{AnalyzerConfig, ScoringConfig, ValidationConfig};
    pub use crate::error::{LexisentError, Result};
    pub use crate::lexicon::Lexicon;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
