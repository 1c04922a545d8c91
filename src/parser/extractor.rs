//! Page-by-page text extraction into an [`ExtractedDocument`].

use std::path::Path;

use crate::detect::detect_pdf_from_path;
use crate::error::ExtractError;
use crate::model::ExtractedDocument;

use super::backend::{LopdfBackend, PdfBackend};

/// Extracts plain text from every page of a PDF.
///
/// Opening is all-or-nothing: a missing, corrupt or non-PDF source fails
/// with [`ExtractError::Unreadable`]. Once the document is open, extraction
/// is best effort per page; a page that fails or has no text gets `""`.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor {
    _private: (),
}

impl PdfTextExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Extract the text of every page of the PDF at `source`.
    pub fn extract(&self, source: &Path) -> Result<ExtractedDocument, ExtractError> {
        detect_pdf_from_path(source).map_err(|e| ExtractError::unreadable(source, e))?;
        let backend =
            LopdfBackend::load_file(source).map_err(|e| ExtractError::unreadable(source, e))?;

        if backend.is_encrypted() {
            log::warn!("{} is encrypted; page text may be empty", source.display());
        }
        log::debug!("Opened {} (PDF {})", source.display(), backend.version());

        Ok(self.extract_from(&backend, &source.to_string_lossy()))
    }

    /// Extract the text of every page of an in-memory PDF.
    ///
    /// `source_path` is recorded in the document metadata as given.
    pub fn extract_bytes(
        &self,
        data: &[u8],
        source_path: &str,
    ) -> Result<ExtractedDocument, ExtractError> {
        let backend =
            LopdfBackend::load_bytes(data).map_err(|e| ExtractError::unreadable(source_path, e))?;
        Ok(self.extract_from(&backend, source_path))
    }

    /// Walk the pages of an open backend in physical order.
    pub fn extract_from<B: PdfBackend>(&self, backend: &B, source_path: &str) -> ExtractedDocument {
        let mut document = ExtractedDocument::new(source_path);

        for page_number in backend.page_numbers() {
            let text = match backend.page_text(page_number) {
                Ok(text) if text.trim().is_empty() => String::new(),
                Ok(text) => text,
                Err(e) => {
                    log::warn!("No text extracted from page {}: {}", page_number, e);
                    String::new()
                }
            };
            document.push_page(text);
        }

        log::debug!(
            "Extracted {} pages from {} ({} without text)",
            document.page_count(),
            source_path,
            document.blank_pages().count()
        );
        document
    }
}
