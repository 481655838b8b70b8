//! Input checks applied before text reaches the engine.
//!
//! The engine accepts any string; this is the boundary where callers enforce
//! the length policy and get a field-level message back.

use crate::config::ValidationConfig;
use crate::error::{LexisentError, Result};

/// Field name reported in validation errors.
pub const TEXT_FIELD: &str = "text";

/// Check `text` against `policy` and hand it back unchanged.
///
/// Lengths are counted in characters on the untrimmed text; a text that is
/// blank after trimming is always rejected.
pub fn validate_text<'a>(text: &'a str, policy: &ValidationConfig) -> Result<&'a str> {
    if text.trim().is_empty() {
        return Err(LexisentError::validation(
            TEXT_FIELD,
            "The text to analyze is required",
        ));
    }

    let chars = text.chars().count();
    if chars < policy.min_chars {
        return Err(LexisentError::validation(
            TEXT_FIELD,
            format!(
                "The text must contain at least {} characters",
                policy.min_chars
            ),
        ));
    }
    if chars > policy.max_chars {
        return Err(LexisentError::validation(
            TEXT_FIELD,
            format!("The text must not exceed {} characters", policy.max_chars),
        ));
    }

    Ok(text)
}
