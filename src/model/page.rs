//! Page-level types.

use serde::{Deserialize, Serialize};

/// Text extracted from a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Extracted text, empty when the page has none
    pub text: String,

    /// Paragraphs derived from `text`, present only after paragraph extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Vec<String>>,
}

impl ExtractedPage {
    /// Create a new page.
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
            paragraphs: None,
        }
    }

    /// Check if the page produced no text.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters in the page text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
