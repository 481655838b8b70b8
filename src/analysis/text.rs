//! Case normalization and text shape.

/// Lowercased text plus the shape features the score calculator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    char_len: usize,
    exclamations: usize,
}

impl NormalizedText {
    /// Lowercase `raw` with full Unicode case mapping, so accented capitals
    /// ("É", "À") fold like their ASCII counterparts.
    pub fn new(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let mut char_len = 0;
        let mut exclamations = 0;
        for c in text.chars() {
            char_len += 1;
            if c == '!' {
                exclamations += 1;
            }
        }

        Self {
            text,
            char_len,
            exclamations,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Number of `!` characters.
    pub fn exclamations(&self) -> usize {
        self.exclamations
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
