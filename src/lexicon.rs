//! Word tables consulted by the analysis engine.
//!
//! A [`Lexicon`] holds four read-only tables: positive words, negative words,
//! intensifiers, and per-topic keyword lists. Lookups are plain substring
//! matches against already-lowercased text, with no tokenization, so a word
//! found inside a longer word still counts.
//!
//! The built-in tables are built once per process and shared through
//! [`Lexicon::builtin`]. Custom tables can be loaded from JSON with
//! [`Lexicon::from_file`].
//!
//! # Examples
//!
//! ```
//! use lexisent::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builtin();
//! assert_eq!(lexicon.count_positive("super, vraiment bien"), 2);
//! assert_eq!(lexicon.count_intensifiers("super, vraiment bien"), 2);
//! ```

pub mod builtin;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::types::Topic;
use crate::error::{LexisentError, Result};

static BUILTIN_LEXICON: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    let topics = Topic::ALL
        .iter()
        .map(|topic| to_owned_words(builtin::topic_keywords(*topic)))
        .collect();

    Arc::new(Lexicon {
        positive: to_owned_words(builtin::POSITIVE_WORDS),
        negative: to_owned_words(builtin::NEGATIVE_WORDS),
        intensifiers: to_owned_words(builtin::INTENSIFIERS),
        topics,
    })
});

fn to_owned_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Category a lexicon entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "topic")]
pub enum LexiconCategory {
    Positive,
    Negative,
    Intensifier,
    TopicKeyword(Topic),
}

impl LexiconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexiconCategory::Positive => "positive",
            LexiconCategory::Negative => "negative",
            LexiconCategory::Intensifier => "intensifier",
            LexiconCategory::TopicKeyword(_) => "topic_keyword",
        }
    }

    /// The topic of a topic keyword.
    pub fn topic(&self) -> Option<Topic> {
        match self {
            LexiconCategory::TopicKeyword(topic) => Some(*topic),
            _ => None,
        }
    }
}

/// A single word together with the table it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconEntry<'a> {
    pub word: &'a str,
    pub category: LexiconCategory,
}

/// On-disk JSON layout of a lexicon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
    #[serde(default)]
    pub intensifiers: Vec<String>,
    #[serde(default)]
    pub topics: BTreeMap<Topic, Vec<String>>,
}

/// Immutable word tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
    intensifiers: Vec<String>,
    /// Keyword lists indexed by [`Topic::priority`].
    topics: Vec<Vec<String>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().as_ref().clone()
    }
}

impl Lexicon {
    /// Shared handle to the built-in French/English lexicon.
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN_LEXICON)
    }

    /// Build a lexicon from custom tables.
    ///
    /// Words are lowercased. Empty or whitespace-only words are rejected.
    pub fn new(file: LexiconFile) -> Result<Self> {
        let positive = normalize_words("positive", file.positive)?;
        let negative = normalize_words("negative", file.negative)?;
        let intensifiers = normalize_words("intensifiers", file.intensifiers)?;

        let mut topics = vec![Vec::new(); Topic::ALL.len()];
        for (topic, keywords) in file.topics {
            topics[topic.priority()] = normalize_words(topic.as_str(), keywords)?;
        }

        Ok(Self {
            positive,
            negative,
            intensifiers,
            topics,
        })
    }

    /// Parse a lexicon from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::new(file)
    }

    /// Load a lexicon from a JSON file.
    ///
    /// Example format:
    /// ```json
    /// {
    ///   "positive": ["great", "love"],
    ///   "negative": ["awful"],
    ///   "intensifiers": ["very"],
    ///   "topics": { "delivery": ["shipping"], "price": ["cheap", "expensive"] }
    /// }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&content)?;
        log::info!(
            "loaded lexicon from {} ({} positive, {} negative, {} intensifiers, {} topics)",
            path.display(),
            lexicon.positive.len(),
            lexicon.negative.len(),
            lexicon.intensifiers.len(),
            lexicon.topics.iter().filter(|k| !k.is_empty()).count()
        );
        Ok(lexicon)
    }

    /// Export the tables in their on-disk layout.
    pub fn to_file_format(&self) -> LexiconFile {
        LexiconFile {
            positive: self.positive.clone(),
            negative: self.negative.clone(),
            intensifiers: self.intensifiers.clone(),
            topics: Topic::ALL
                .iter()
                .filter(|topic| !self.topic_keywords(**topic).is_empty())
                .map(|topic| (*topic, self.topic_keywords(*topic).to_vec()))
                .collect(),
        }
    }

    pub fn positive_words(&self) -> &[String] {
        &self.positive
    }

    pub fn negative_words(&self) -> &[String] {
        &self.negative
    }

    pub fn intensifiers(&self) -> &[String] {
        &self.intensifiers
    }

    /// Keywords for `topic` in scanning order; empty when the topic has none.
    pub fn topic_keywords(&self, topic: Topic) -> &[String] {
        self.topics
            .get(topic.priority())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total positive matches in lowercased `text`.
    pub fn count_positive(&self, text: &str) -> usize {
        count_all(&self.positive, text)
    }

    /// Total negative matches in lowercased `text`.
    pub fn count_negative(&self, text: &str) -> usize {
        count_all(&self.negative, text)
    }

    /// Total intensifier matches in lowercased `text`.
    pub fn count_intensifiers(&self, text: &str) -> usize {
        count_all(&self.intensifiers, text)
    }

    /// First keyword of `topic` (in declaration order) contained in `text`.
    pub fn first_topic_keyword(&self, topic: Topic, text: &str) -> Option<&str> {
        self.topic_keywords(topic)
            .iter()
            .find(|keyword| text.contains(keyword.as_str()))
            .map(String::as_str)
    }

    /// Whether `word` is listed as positive.
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.iter().any(|w| w == word)
    }

    /// Whether `word` is listed as negative.
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.iter().any(|w| w == word)
    }

    /// Whether `word` is listed as an intensifier.
    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.iter().any(|w| w == word)
    }

    /// Every entry of every table, topics in priority order.
    pub fn entries(&self) -> impl Iterator<Item = LexiconEntry<'_>> {
        tagged(&self.positive, LexiconCategory::Positive)
            .chain(tagged(&self.negative, LexiconCategory::Negative))
            .chain(tagged(&self.intensifiers, LexiconCategory::Intensifier))
            .chain(Topic::ALL.into_iter().flat_map(move |topic| {
                tagged(
                    self.topic_keywords(topic),
                    LexiconCategory::TopicKeyword(topic),
                )
            }))
    }
}

fn tagged(words: &[String], category: LexiconCategory) -> impl Iterator<Item = LexiconEntry<'_>> {
    words.iter().map(move |word| LexiconEntry {
        word: word.as_str(),
        category,
    })
}

fn count_all(words: &[String], text: &str) -> usize {
    words.iter().map(|word| count_occurrences(text, word)).sum()
}

fn normalize_words(table: &str, words: Vec<String>) -> Result<Vec<String>> {
    words
        .into_iter()
        .map(|word| {
            if word.trim().is_empty() {
                Err(LexisentError::lexicon(format!(
                    "table `{table}` contains an empty word"
                )))
            } else {
                Ok(word.to_lowercase())
            }
        })
        .collect()
}
