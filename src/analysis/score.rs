//! Numeric confidence score in `0..=100`.
//!
//! The score is the share of positive matches among all sentiment matches,
//! scaled by three multipliers derived from the shape of the text:
//!
//! ```text
//! base  = positive / (positive + negative + 1) * 100
//! final = base * length * punctuation * intensifier
//! score = trunc(clamp(final, 0, 100))
//! ```
//!
//! The `+ 1` in the denominator keeps the division defined when nothing
//! matched. Everything is computed in `f64`; the fractional part is dropped,
//! never rounded.

use serde::{Deserialize, Serialize};

use crate::analysis::counts::LexiconCounts;
use crate::analysis::text::NormalizedText;
use crate::config::ScoringConfig;
use crate::lexicon::Lexicon;

/// Intermediate values of a score computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub length_modifier: f64,
    pub punctuation_modifier: f64,
    pub intensifier_modifier: f64,
    /// Product of the base and the modifiers, before clamping.
    pub raw: f64,
    pub score: u8,
}

/// Multi-factor score calculator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Positive share of all sentiment matches, in percent.
    pub fn base_score(&self, counts: &LexiconCounts) -> f64 {
        let total = (counts.positive + counts.negative + 1) as f64;
        (counts.positive as f64 / total) * 100.0
    }

    /// Penalty for very short or very long texts.
    pub fn length_modifier(&self, char_len: usize) -> f64 {
        if char_len < self.config.short_text_chars {
            self.config.short_text_modifier
        } else if char_len > self.config.long_text_chars {
            self.config.long_text_modifier
        } else {
            1.0
        }
    }

    /// Exclamation marks amplify whichever way the text already leans.
    pub fn punctuation_modifier(&self, exclamations: usize, counts: &LexiconCounts) -> f64 {
        if exclamations == 0 {
            1.0
        } else if counts.positive > counts.negative {
            self.config.exclamation_boost
        } else {
            self.config.exclamation_penalty
        }
    }

    /// Each intensifier adds `intensifier_step`, up to `intensifier_cap`.
    pub fn intensifier_modifier(&self, intensifiers: usize) -> f64 {
        let modifier = 1.0 + intensifiers as f64 * self.config.intensifier_step;
        modifier.min(self.config.intensifier_cap)
    }

    /// Full computation with every intermediate value.
    pub fn breakdown(&self, counts: &LexiconCounts, text: &NormalizedText) -> ScoreBreakdown {
        let base = self.base_score(counts);
        let length_modifier = self.length_modifier(text.char_len());
        let punctuation_modifier = self.punctuation_modifier(text.exclamations(), counts);
        let intensifier_modifier = self.intensifier_modifier(counts.intensifiers);

        let raw = base * length_modifier * punctuation_modifier * intensifier_modifier;
        // `as` truncates toward zero; NaN cannot occur since every factor is finite.
        let score = raw.clamp(0.0, 100.0) as u8;

        ScoreBreakdown {
            base,
            length_modifier,
            punctuation_modifier,
            intensifier_modifier,
            raw,
            score,
        }
    }

    /// Score precomputed counts for `text`.
    pub fn score(&self, counts: &LexiconCounts, text: &NormalizedText) -> u8 {
        self.breakdown(counts, text).score
    }

    /// Normalize and count `text`, then score it.
    pub fn calculate(&self, lexicon: &Lexicon, text: &str) -> u8 {
        let normalized = NormalizedText::new(text);
        let counts = LexiconCounts::compute(lexicon, &normalized);
        self.score(&counts, &normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(positive: usize, negative: usize, intensifiers: usize) -> LexiconCounts {
        LexiconCounts {
            positive,
            negative,
            intensifiers,
        }
    }

    #[test]
    fn test_base_score() {
        let calculator = ScoreCalculator::default();
        assert_eq!(calculator.base_score(&counts(0, 0, 0)), 0.0);
        assert_eq!(calculator.base_score(&counts(1, 0, 0)), 50.0);
        assert_eq!(calculator.base_score(&counts(3, 0, 0)), 75.0);
        assert_eq!(calculator.base_score(&counts(0, 5, 0)), 0.0);
    }

    #[test]
    fn test_length_modifier_boundaries() {
        let calculator = ScoreCalculator::default();
        assert_eq!(calculator.length_modifier(5), 0.85);
        assert_eq!(calculator.length_modifier(19), 0.85);
        assert_eq!(calculator.length_modifier(20), 1.0);
        assert_eq!(calculator.length_modifier(1000), 1.0);
        assert_eq!(calculator.length_modifier(1001), 0.90);
    }

    #[test]
    fn test_punctuation_modifier() {
        let calculator = ScoreCalculator::default();
        assert_eq!(calculator.punctuation_modifier(0, &counts(3, 0, 0)), 1.0);
        assert_eq!(calculator.punctuation_modifier(2, &counts(3, 0, 0)), 1.10);
        assert_eq!(calculator.punctuation_modifier(1, &counts(1, 1, 0)), 0.95);
        assert_eq!(calculator.punctuation_modifier(1, &counts(0, 0, 0)), 0.95);
    }

    #[test]
    fn test_intensifier_modifier_is_capped() {
        let calculator = ScoreCalculator::default();
        assert_eq!(calculator.intensifier_modifier(0), 1.0);
        assert!((calculator.intensifier_modifier(2) - 1.10).abs() < 1e-9);
        assert!((calculator.intensifier_modifier(6) - 1.30).abs() < 1e-9);
        assert_eq!(calculator.intensifier_modifier(50), 1.30);
    }

    #[test]
    fn test_score_truncates() {
        let calculator = ScoreCalculator::default();
        let lexicon = Lexicon::builtin();

        // 50 * 0.85 = 42.5
        assert_eq!(calculator.calculate(&lexicon, "Bien."), 42);
        // 33.33 * 0.85 = 28.33
        assert_eq!(calculator.calculate(&lexicon, "bon mais mauvais"), 28);
    }

    #[test]
    fn test_score_is_clamped() {
        let config = ScoringConfig {
            exclamation_boost: 3.0,
            ..Default::default()
        };
        let calculator = ScoreCalculator::new(config);
        let text = NormalizedText::new("great great great great, really!");
        let breakdown = calculator.breakdown(&counts(4, 0, 1), &text);

        assert!(breakdown.raw > 100.0);
        assert_eq!(breakdown.score, 100);
    }

    #[test]
    fn test_no_positive_matches_scores_zero() {
        let calculator = ScoreCalculator::default();
        let lexicon = Lexicon::builtin();
        assert_eq!(
            calculator.calculate(&lexicon, "Horrible, très déçu, jamais !"),
            0
        );
    }

    #[test]
    fn test_breakdown_fields() {
        let calculator = ScoreCalculator::default();
        let text = NormalizedText::new("Vraiment top, très bon produit !");
        let breakdown = calculator.breakdown(&counts(2, 0, 2), &text);

        assert!((breakdown.base - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(breakdown.length_modifier, 1.0);
        assert_eq!(breakdown.punctuation_modifier, 1.10);
        assert!((breakdown.intensifier_modifier - 1.10).abs() < 1e-9);
        // 66.67 * 1.10 * 1.10 = 80.67
        assert_eq!(breakdown.score, 80);
    }
}
