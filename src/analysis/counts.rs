//! Lexicon match counts shared by the classifier and the score calculator.

use serde::{Deserialize, Serialize};

use crate::analysis::text::NormalizedText;
use crate::lexicon::Lexicon;

/// Substring match totals for one normalized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconCounts {
    pub positive: usize,
    pub negative: usize,
    pub intensifiers: usize,
}

impl LexiconCounts {
    /// Count every table of `lexicon` against `text`.
    pub fn compute(lexicon: &Lexicon, text: &NormalizedText) -> Self {
        let text = text.as_str();
        Self {
            positive: lexicon.count_positive(text),
            negative: lexicon.count_negative(text),
            intensifiers: lexicon.count_intensifiers(text),
        }
    }

    /// Whether neither positive nor negative words matched.
    pub fn is_empty(&self) -> bool {
        self.positive == 0 && self.negative == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute() {
        let lexicon = Lexicon::builtin();
        let text = NormalizedText::new("Très bon, vraiment génial mais un peu cher");
        let counts = LexiconCounts::compute(&lexicon, &text);

        assert_eq!(counts.positive, 2); // bon, génial
        assert_eq!(counts.negative, 0);
        assert_eq!(counts.intensifiers, 2); // très, vraiment
        assert!(!counts.is_empty());
    }

    #[test]
    fn test_no_matches() {
        let lexicon = Lexicon::builtin();
        let counts = LexiconCounts::compute(&lexicon, &NormalizedText::new("rien à dire"));
        assert!(counts.is_empty());
        assert_eq!(counts, LexiconCounts::default());
    }
}
