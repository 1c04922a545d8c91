//! Document-level types.

use super::ExtractedPage;
use serde::{Deserialize, Serialize};

/// Text extracted from a PDF, one entry per physical page.
///
/// `pages.len()` always equals `metadata.total_pages` and pages are numbered
/// consecutively from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Document-level metadata
    pub metadata: DocumentMetadata,

    /// Pages in physical order
    pub pages: Vec<ExtractedPage>,
}

impl ExtractedDocument {
    /// Create an empty document for the given source.
    pub fn new(source_path: impl Into<String>) -> Self {
        Self {
            metadata: DocumentMetadata {
                total_pages: 0,
                source_path: source_path.into(),
            },
            pages: Vec::new(),
        }
    }

    /// Append the next page's text.
    ///
    /// The page number is assigned from the current length so numbering
    /// stays consecutive.
    pub fn push_page(&mut self, text: impl Into<String>) {
        let page_number = self.pages.len() as u32 + 1;
        self.pages.push(ExtractedPage::new(page_number, text));
        self.metadata.total_pages = self.pages.len() as u32;
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.metadata.total_pages
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_number: u32) -> Option<&ExtractedPage> {
        if page_number == 0 {
            return None;
        }
        self.pages.get((page_number - 1) as usize)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages that produced no text.
    pub fn blank_pages(&self) -> impl Iterator<Item = &ExtractedPage> {
        self.pages.iter().filter(|p| p.is_blank())
    }

    /// Plain text of the whole document, pages separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Total number of pages
    pub total_pages: u32,

    /// Path the document was read from
    pub source_path: String,
}
