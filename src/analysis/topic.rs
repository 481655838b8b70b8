//! Ordered topic detection.

use crate::analysis::text::NormalizedText;
use crate::analysis::types::Topic;
use crate::config::{MAX_TOPICS, ScoringConfig};
use crate::lexicon::Lexicon;

/// Detects which topics a text talks about.
///
/// Topics are checked in [`Topic::ALL`] order. A topic is detected as soon
/// as one of its keywords occurs in the text; the remaining keywords of that
/// topic are skipped. The output is therefore distinct and ordered by
/// priority, and is cut to `max_topics` entries, never more than
/// [`MAX_TOPICS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicDetector {
    max_topics: usize,
}

impl Default for TopicDetector {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl TopicDetector {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            max_topics: config.max_topics.min(MAX_TOPICS),
        }
    }

    /// Detect topics in already-normalized text.
    pub fn detect_normalized(&self, lexicon: &Lexicon, text: &NormalizedText) -> Vec<Topic> {
        let text = text.as_str();
        Topic::ALL
            .into_iter()
            .filter(|topic| lexicon.first_topic_keyword(*topic, text).is_some())
            .take(self.max_topics)
            .collect()
    }

    /// Normalize `text`, then detect its topics.
    pub fn detect(&self, lexicon: &Lexicon, text: &str) -> Vec<Topic> {
        self.detect_normalized(lexicon, &NormalizedText::new(text))
    }
}
