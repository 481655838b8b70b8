//! Property tests for the analysis invariants.

use lexisent::prelude::*;
use proptest::prelude::*;

/// Vocabulary mixing lexicon words, topic keywords and filler.
const VOCABULARY: &[&str] = &[
    "excellent", "super", "génial", "rapide", "qualité", "bien", "bon", "great", "love",
    "horrible", "mauvais", "déçu", "lent", "arnaque", "jamais", "awful", "terrible",
    "très", "vraiment", "extremely", "livraison", "prix", "service", "emballage", "facile",
    "colis", "cheap", "help", "produit", "le", "et", "mais", "the", "and", "!", ",", ".",
    "ÉNORME", "Très", "QUALITÉ",
];

fn review_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..60).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn score_stays_in_range(text in review_text()) {
        let result = SentimentAnalyzer::new().analyze(&text);
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn score_stays_in_range_for_arbitrary_text(text in "\\PC{1,400}") {
        let result = SentimentAnalyzer::new().analyze(&text);
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn topics_are_distinct_capped_and_ordered(text in review_text()) {
        let result = SentimentAnalyzer::new().analyze(&text);
        prop_assert!(result.topics.len() <= 5);
        // Strictly increasing priority implies distinct and ordered
        for pair in result.topics.windows(2) {
            prop_assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn analysis_is_deterministic(text in review_text()) {
        let analyzer = SentimentAnalyzer::new();
        let first = serde_json::to_string(&analyzer.analyze(&text)).unwrap();
        let second = serde_json::to_string(&SentimentAnalyzer::new().analyze(&text)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_matches_means_neutral_zero(text in "[0-9 #@/:+=-]{5,200}") {
        let report = SentimentAnalyzer::new().explain(&text);
        prop_assert_eq!(report.counts.positive, 0);
        prop_assert_eq!(report.counts.negative, 0);
        prop_assert_eq!(report.result.sentiment, Sentiment::Neutral);
        prop_assert_eq!(report.result.score, 0);
    }

    #[test]
    fn zero_counts_imply_neutral_zero(text in review_text()) {
        let report = SentimentAnalyzer::new().explain(&text);
        if report.counts.positive == 0 && report.counts.negative == 0 {
            prop_assert_eq!(report.result.sentiment, Sentiment::Neutral);
            prop_assert_eq!(report.result.score, 0);
        }
    }

    #[test]
    fn score_is_truncated_product(text in review_text()) {
        let report = SentimentAnalyzer::new().explain(&text);
        let b = report.breakdown;
        let expected = (b.base * b.length_modifier * b.punctuation_modifier * b.intensifier_modifier)
            .clamp(0.0, 100.0)
            .trunc() as u8;
        prop_assert_eq!(report.result.score, expected);
    }
}
