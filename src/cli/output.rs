//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::types::Topic;
use crate::batch::{AnalyzedReview, ReportStats, ReviewOutcome};
use crate::cli::args::{LexisentArgs, OutputFormat};
use crate::error::Result;
use crate::lexicon::LexiconEntry;

/// Result structure for batch analysis.
#[derive(Debug, Serialize)]
pub struct BatchOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<AnalyzedReview>>,
    pub stats: ReportStats,
}

/// Lexicon table sizes.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconSummary {
    pub positive_words: usize,
    pub negative_words: usize,
    pub intensifiers: usize,
    pub topics: Vec<TopicKeywords>,
}

/// Keywords of one topic.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicKeywords {
    pub topic: Topic,
    pub keywords: Vec<String>,
}

/// Flat row for one lexicon entry.
#[derive(Debug, Serialize)]
pub struct EntryRow {
    pub word: String,
    pub category: &'static str,
    pub topic: String,
}

impl From<LexiconEntry<'_>> for EntryRow {
    fn from(entry: LexiconEntry<'_>) -> Self {
        EntryRow {
            word: entry.word.to_string(),
            category: entry.category.as_str(),
            topic: entry
                .category
                .topic()
                .map(|topic| topic.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Flat CSV row for one batch review.
#[derive(Debug, Serialize)]
struct ReviewRow {
    line: usize,
    id: String,
    status: &'static str,
    sentiment: String,
    score: String,
    topics: String,
    message: String,
}

impl From<&AnalyzedReview> for ReviewRow {
    fn from(review: &AnalyzedReview) -> Self {
        let id = review.id.clone().unwrap_or_default();
        match &review.outcome {
            ReviewOutcome::Analyzed(result) => ReviewRow {
                line: review.line,
                id,
                status: "analyzed",
                sentiment: result.sentiment.to_string(),
                score: result.score.to_string(),
                topics: result
                    .topics
                    .iter()
                    .map(Topic::as_str)
                    .collect::<Vec<_>>()
                    .join(";"),
                message: String::new(),
            },
            ReviewOutcome::Rejected { message } => ReviewRow {
                line: review.line,
                id,
                status: "rejected",
                sentiment: String::new(),
                score: String::new(),
                topics: String::new(),
                message: message.clone(),
            },
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexisentArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
    }
}

/// Output a batch, with one CSV row per review when reviews are included.
pub fn output_batch(batch: &BatchOutput, args: &LexisentArgs) -> Result<()> {
    match (&batch.reviews, args.output_format) {
        (Some(reviews), OutputFormat::Csv) => {
            let rows: Vec<ReviewRow> = reviews.iter().map(ReviewRow::from).collect();
            output_csv(&rows, args)
        }
        _ => output_result("Batch analysis complete", batch, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexisentArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as indented `key: value` lines.
fn human_lines(value: &Value, indent: usize) -> Vec<String> {
    let spaces = "  ".repeat(indent);
    let mut lines = Vec::new();

    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
                if is_nested(val) {
                    lines.push(format!("{spaces}{key}:"));
                    lines.extend(human_lines(val, indent + 1));
                } else {
                    let formatted_val = format_value(val);
                    lines.push(format!("{spaces}{key}: {formatted_val}"));
                }
            }
        }
        Value::Array(arr) => {
            for item in arr {
                if is_nested(item) {
                    lines.push(format!("{spaces}-"));
                    lines.extend(human_lines(item, indent + 1));
                } else {
                    let formatted_item = format_value(item);
                    lines.push(format!("{spaces}- {formatted_item}"));
                }
            }
        }
        _ => lines.push(format!("{spaces}{}", format_value(value))),
    }

    lines
}

/// Objects and arrays of objects get their own block; flat arrays stay inline.
fn is_nested(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(arr) => arr.iter().any(|v| v.is_object() || v.is_array()),
        _ => false,
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexisentArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Serialize>(result: &T, _args: &LexisentArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;
    for line in csv_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

fn csv_lines(value: &Value) -> Vec<String> {
    let mut lines = Vec::new();

    match value {
        Value::Array(arr) => {
            // Header from the first row
            if let Some(obj) = arr.first().and_then(|item| item.as_object()) {
                let headers: Vec<String> = obj.keys().cloned().collect();
                lines.push(headers.join(","));
            }
            for item in arr {
                if let Some(obj) = item.as_object() {
                    let values: Vec<String> = obj.values().map(format_csv_value).collect();
                    lines.push(values.join(","));
                }
            }
        }
        Value::Object(obj) => {
            lines.push("key,value".to_string());
            for (key, value) in obj {
                let formatted_csv_value = format_csv_value(value);
                lines.push(format!("{key},{formatted_csv_value}"));
            }
        }
        _ => {
            lines.push("value".to_string());
            lines.push(format_csv_value(value));
        }
    }

    lines
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        Value::Object(_) => "[object]".to_string(),
        Value::Null => "-".to_string(),
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("\"[{formatted_values}]\"")
        }
        Value::Object(_) => "\"[object]\"".to_string(),
        Value::Null => "".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_csv_value() {
        assert_eq!(format_csv_value(&json!("test")), "test");
        assert_eq!(
            format_csv_value(&json!("livraison, rapide")),
            "\"livraison, rapide\""
        );
        assert_eq!(format_csv_value(&json!(42)), "42");
        assert_eq!(
            format_csv_value(&json!(["delivery", "speed"])),
            "\"[delivery; speed]\""
        );
        assert_eq!(format_csv_value(&Value::Null), "");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("positive")), "positive");
        assert_eq!(format_value(&json!(["delivery", "speed"])), "[delivery, speed]");
        assert_eq!(format_value(&json!([])), "[]");
        assert_eq!(format_value(&Value::Null), "-");
    }

    #[test]
    fn test_human_lines_nested() {
        let value = json!({
            "sentiment": "positive",
            "topics": ["delivery"],
            "counts": {"positive": 3}
        });
        let lines = human_lines(&value, 0);
        assert!(lines.contains(&"sentiment: positive".to_string()));
        assert!(lines.contains(&"topics: [delivery]".to_string()));
        assert!(lines.contains(&"counts:".to_string()));
        assert!(lines.contains(&"  positive: 3".to_string()));
    }

    #[test]
    fn test_csv_rows() {
        let value = json!([
            {"line": 1, "status": "analyzed"},
            {"line": 2, "status": "rejected"}
        ]);
        let lines = csv_lines(&value);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,analyzed");
    }

    #[test]
    fn test_entry_rows() {
        use crate::lexicon::Lexicon;

        let lexicon = Lexicon::builtin();
        let rows: Vec<EntryRow> = lexicon.entries().map(EntryRow::from).collect();
        assert_eq!(rows.len(), lexicon.entries().count());

        let value = serde_json::to_value(&rows).unwrap();
        let lines = csv_lines(&value);
        assert_eq!(lines[0], "category,topic,word");
        assert_eq!(lines[1], "positive,,excellent");

        let keyword = rows
            .iter()
            .find(|row| row.word == "livraison")
            .unwrap();
        assert_eq!(keyword.category, "topic_keyword");
        assert_eq!(keyword.topic, "delivery");
    }
}
