//! The analysis entry point.
//!
//! [`SentimentAnalyzer`] normalizes a text once, counts lexicon matches once,
//! and feeds the shared counts to the classifier, the score calculator and the
//! topic detector. It holds only immutable data, so one instance can serve any
//! number of threads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::counts::LexiconCounts;
use crate::analysis::score::{ScoreBreakdown, ScoreCalculator};
use crate::analysis::sentiment::SentimentClassifier;
use crate::analysis::text::NormalizedText;
use crate::analysis::topic::TopicDetector;
use crate::analysis::types::AnalysisResult;
use crate::config::{AnalyzerConfig, ScoringConfig, ValidationConfig};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::validation::validate_text;

/// Analysis result together with the values it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub counts: LexiconCounts,
    pub characters: usize,
    pub exclamations: usize,
    pub breakdown: ScoreBreakdown,
}

/// Lexicon-driven sentiment, score and topic analyzer.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
    classifier: SentimentClassifier,
    calculator: ScoreCalculator,
    detector: TopicDetector,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Analyzer over the built-in lexicon with default scoring.
    pub fn new() -> Self {
        Self::with_config(Lexicon::builtin(), ScoringConfig::default())
    }

    /// Analyzer over a custom lexicon with default scoring.
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self::with_config(lexicon, ScoringConfig::default())
    }

    /// Analyzer over `lexicon` tuned by `config`.
    pub fn with_config(lexicon: Arc<Lexicon>, config: ScoringConfig) -> Self {
        Self {
            lexicon,
            classifier: SentimentClassifier::new(&config),
            detector: TopicDetector::new(&config),
            calculator: ScoreCalculator::new(config),
        }
    }

    /// Build an analyzer from a loaded configuration file.
    pub fn from_config(lexicon: Arc<Lexicon>, config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(lexicon, config.scoring.clone()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze `text`.
    ///
    /// Defined for any string; callers are expected to have validated it
    /// first (see [`SentimentAnalyzer::analyze_checked`]).
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.explain(text).result
    }

    /// Validate `text` against `policy`, then analyze it.
    pub fn analyze_checked(&self, text: &str, policy: &ValidationConfig) -> Result<AnalysisResult> {
        let text = validate_text(text, policy)?;
        Ok(self.analyze(text))
    }

    /// Analyze `text` and keep the intermediate values.
    pub fn explain(&self, text: &str) -> AnalysisReport {
        let normalized = NormalizedText::new(text);
        let counts = LexiconCounts::compute(&self.lexicon, &normalized);

        let sentiment = self.classifier.classify_counts(&counts);
        let breakdown = self.calculator.breakdown(&counts, &normalized);
        let topics = self.detector.detect_normalized(&self.lexicon, &normalized);

        log::debug!(
            "analyzed {} chars: positive={} negative={} intensifiers={} -> {} ({})",
            normalized.char_len(),
            counts.positive,
            counts.negative,
            counts.intensifiers,
            sentiment,
            breakdown.score
        );

        AnalysisReport {
            result: AnalysisResult {
                sentiment,
                score: breakdown.score,
                topics,
            },
            counts,
            characters: normalized.char_len(),
            exclamations: normalized.exclamations(),
            breakdown,
        }
    }
}

/// Analyze `text` with the built-in lexicon and default scoring.
pub fn analyze(text: &str) -> AnalysisResult {
    SentimentAnalyzer::new().analyze(text)
}
