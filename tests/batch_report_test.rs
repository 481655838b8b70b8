//! Integration tests for batch analysis and reporting.

use std::fs::File;
use std::io::{BufReader, Write};

use lexisent::batch::{ReportStats, analyze_batch, read_records};
use lexisent::prelude::*;
use tempfile::NamedTempFile;

fn write_input(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_jsonl_batch_report() -> Result<()> {
    let file = write_input(
        r#"{"id": "a", "text": "Excellent service, livraison rapide et produit de qualité !", "created_at": "2024-02-10T09:30:00Z"}
{"id": "b", "text": "Horrible, très déçu, produit lent et arnaque, jamais recommandé !", "created_at": "2024-02-21T18:00:00Z"}
{"id": "c", "text": "Bien.", "created_at": "2024-03-01T08:00:00Z"}
{"id": "d", "text": "bon mais mauvais"}
{"id": "e", "text": "ok"}
"#,
    );

    let records = read_records(BufReader::new(File::open(file.path())?))?;
    assert_eq!(records.len(), 5);

    let analyzer = SentimentAnalyzer::new();
    let reviews = analyze_batch(&analyzer, &records, &ValidationConfig::default());
    assert_eq!(reviews.len(), 5);
    assert_eq!(reviews[0].id.as_deref(), Some("a"));
    assert_eq!(reviews[0].result().unwrap().score, 66);
    assert!(!reviews[4].is_analyzed());

    let stats = ReportStats::from_reviews(&reviews);
    assert_eq!(stats.total_reviews, 4);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.sentiment_distribution.positive, 2);
    assert_eq!(stats.sentiment_distribution.negative, 1);
    assert_eq!(stats.sentiment_distribution.neutral, 1);
    // (66 + 0 + 42 + 28) / 4 = 34.0
    assert_eq!(stats.average_score, 34.0);

    // speed is mentioned twice, the rest once in priority order
    let topics: Vec<(Topic, usize)> = stats
        .top_topics
        .iter()
        .map(|t| (t.topic, t.count))
        .collect();
    assert_eq!(
        topics,
        vec![
            (Topic::Speed, 2),
            (Topic::Delivery, 1),
            (Topic::Quality, 1),
            (Topic::Service, 1),
        ]
    );

    let months: Vec<(&str, usize)> = stats
        .reviews_over_time
        .iter()
        .map(|m| (m.month.as_str(), m.count))
        .collect();
    assert_eq!(months, vec![("2024-02", 2), ("2024-03", 1)]);

    Ok(())
}

#[test]
fn test_plain_text_batch() -> Result<()> {
    let file = write_input("Très bon produit\n\n   \nLivraison en retard, service nul\n");

    let records = read_records(BufReader::new(File::open(file.path())?))?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].line, 4);

    let reviews = analyze_batch(
        &SentimentAnalyzer::new(),
        &records,
        &ValidationConfig::default(),
    );
    let stats = ReportStats::from_reviews(&reviews);

    assert_eq!(stats.sentiment_distribution.positive, 1);
    assert_eq!(stats.sentiment_distribution.negative, 1);
    assert!(stats.reviews_over_time.is_empty());

    Ok(())
}

#[test]
fn test_custom_lexicon_and_config_files() -> Result<()> {
    let lexicon_file = write_input(
        r#"{"positive": ["lovely"], "negative": ["dreadful"], "topics": {"service": ["staff"]}}"#,
    );
    let config_file = write_input(r#"{"validation": {"min_chars": 1}, "scoring": {"max_topics": 1}}"#);

    let lexicon = Lexicon::from_file(lexicon_file.path())?;
    let config = AnalyzerConfig::from_file(config_file.path())?;
    let analyzer = SentimentAnalyzer::from_config(std::sync::Arc::new(lexicon), &config)?;

    let result = analyzer.analyze_checked("Lovely staff", &config.validation)?;
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.topics, vec![Topic::Service]);

    // the built-in words no longer count
    let result = analyzer.analyze("excellent");
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.score, 0);

    Ok(())
}
