//! Configuration for the analysis engine and its input boundary.
//!
//! Every default reproduces the reference behavior; a config file only needs
//! to list the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexisentError, Result};

/// Upper bound on the number of topics a result may carry.
pub const MAX_TOPICS: usize = 5;

/// Tuning constants of the classifier, score calculator and topic detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// One side must exceed the other times this ratio to win.
    pub sentiment_ratio: f64,

    /// Texts shorter than this many characters get `short_text_modifier`.
    pub short_text_chars: usize,

    /// Multiplier for short texts.
    pub short_text_modifier: f64,

    /// Texts longer than this many characters get `long_text_modifier`.
    pub long_text_chars: usize,

    /// Multiplier for long texts.
    pub long_text_modifier: f64,

    /// Multiplier when `!` is present and positive matches dominate.
    pub exclamation_boost: f64,

    /// Multiplier when `!` is present otherwise.
    pub exclamation_penalty: f64,

    /// Bonus per intensifier match.
    pub intensifier_step: f64,

    /// Upper bound of the intensifier multiplier.
    pub intensifier_cap: f64,

    /// Maximum number of topics reported, at most [`MAX_TOPICS`].
    pub max_topics: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sentiment_ratio: 1.5,
            short_text_chars: 20,
            short_text_modifier: 0.85,
            long_text_chars: 1000,
            long_text_modifier: 0.90,
            exclamation_boost: 1.10,
            exclamation_penalty: 0.95,
            intensifier_step: 0.05,
            intensifier_cap: 1.30,
            max_topics: MAX_TOPICS,
        }
    }
}

impl ScoringConfig {
    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        let multipliers = [
            ("sentiment_ratio", self.sentiment_ratio),
            ("short_text_modifier", self.short_text_modifier),
            ("long_text_modifier", self.long_text_modifier),
            ("exclamation_boost", self.exclamation_boost),
            ("exclamation_penalty", self.exclamation_penalty),
            ("intensifier_step", self.intensifier_step),
            ("intensifier_cap", self.intensifier_cap),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value < 0.0 {
                return Err(LexisentError::invalid_config(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        if self.intensifier_cap < 1.0 {
            return Err(LexisentError::invalid_config(
                "intensifier_cap must be at least 1.0",
            ));
        }
        if self.max_topics > MAX_TOPICS {
            return Err(LexisentError::invalid_config(format!(
                "max_topics must not exceed {MAX_TOPICS} (got {})",
                self.max_topics
            )));
        }
        if self.short_text_chars > self.long_text_chars {
            return Err(LexisentError::invalid_config(
                "short_text_chars must not exceed long_text_chars",
            ));
        }
        Ok(())
    }
}

/// Length policy applied to caller input before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum number of characters (inclusive).
    pub min_chars: usize,
    /// Maximum number of characters (inclusive).
    pub max_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_chars: 5,
            max_chars: 5000,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub scoring: ScoringConfig,
    pub validation: ValidationConfig,
}

impl AnalyzerConfig {
    /// Parse and check a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&content)?;
        log::info!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        if self.validation.min_chars > self.validation.max_chars {
            return Err(LexisentError::invalid_config(
                "validation.min_chars must not exceed validation.max_chars",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.scoring.sentiment_ratio, 1.5);
        assert_eq!(config.scoring.max_topics, 5);
        assert_eq!(config.validation.min_chars, 5);
        assert_eq!(config.validation.max_chars, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config =
            AnalyzerConfig::from_json_str(r#"{"scoring": {"max_topics": 3}}"#).unwrap();
        assert_eq!(config.scoring.max_topics, 3);
        assert_eq!(config.scoring.intensifier_cap, 1.30);
        assert_eq!(config.validation, ValidationConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AnalyzerConfig::from_json_str(r#"{"scoring": {"intensifier_cap": 0.5}}"#)
            .unwrap_err();
        assert!(matches!(err, LexisentError::InvalidConfig(_)));

        let err = AnalyzerConfig::from_json_str(
            r#"{"validation": {"min_chars": 10, "max_chars": 2}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LexisentError::InvalidConfig(_)));

        let err = AnalyzerConfig::from_json_str(r#"{"scoring": {"sentiment_ratio": -1.0}}"#)
            .unwrap_err();
        assert!(matches!(err, LexisentError::InvalidConfig(_)));

        let err =
            AnalyzerConfig::from_json_str(r#"{"scoring": {"max_topics": 7}}"#).unwrap_err();
        assert!(matches!(err, LexisentError::InvalidConfig(_)));
        assert!(err.to_string().contains("max_topics"));

        assert!(AnalyzerConfig::from_json_str(r#"{"scoring": {"max_topics": 5}}"#).is_ok());
    }
}
