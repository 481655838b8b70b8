//! Batch input records and their analysis outcome.

use std::io::BufRead;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::types::AnalysisResult;
use crate::error::Result;

/// One review to analyze.
///
/// JSON Lines input uses this layout directly; plain text input yields one
/// record per non-blank line with only `text` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// 1-based line number in the input.
    #[serde(default, skip_serializing)]
    pub line: usize,
}

/// Read records from `reader`.
///
/// Lines starting with `{` are parsed as JSON records, other non-blank lines
/// are taken verbatim as review text. A line that starts with `{` but is not
/// a valid record is logged and kept as plain review text.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<ReviewRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('{') {
            match serde_json::from_str::<ReviewRecord>(trimmed) {
                Ok(mut record) => {
                    record.line = line_num;
                    records.push(record);
                    continue;
                }
                Err(e) => {
                    log::warn!("line {line_num} is not a JSON record, reading it as text: {e}")
                }
            }
        }

        records.push(ReviewRecord {
            text: line,
            line: line_num,
            ..Default::default()
        });
    }

    Ok(records)
}

/// What happened to one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReviewOutcome {
    Analyzed(AnalysisResult),
    Rejected { message: String },
}

/// A record together with its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedReview {
    pub id: Option<String>,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub outcome: ReviewOutcome,
}

impl AnalyzedReview {
    pub fn new(record: &ReviewRecord, outcome: ReviewOutcome) -> Self {
        Self {
            id: record.id.clone(),
            line: record.line,
            created_at: record.created_at,
            outcome,
        }
    }

    pub fn is_analyzed(&self) -> bool {
        matches!(self.outcome, ReviewOutcome::Analyzed(_))
    }

    /// The analysis result, unless the record was rejected.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.outcome {
            ReviewOutcome::Analyzed(result) => Some(result),
            ReviewOutcome::Rejected { .. } => None,
        }
    }
}
