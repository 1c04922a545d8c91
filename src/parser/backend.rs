//! Page access for the text extractor.
//!
//! The extractor only needs page numbers, per-page text and the declared
//! version. [`PdfBackend`] names those three; [`LopdfBackend`] answers
//! them from a loaded `lopdf::Document`.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};

/// Read access to the pages of an open PDF.
pub trait PdfBackend {
    /// Page numbers in physical order, starting at 1.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extract the text of one page.
    fn page_text(&self, page_number: u32) -> Result<String>;

    /// PDF version declared by the document.
    fn version(&self) -> String;
}

/// [`PdfBackend`] over an in-memory `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path).map_err(map_load_error)?;
        Ok(Self { doc })
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(map_load_error)?;
        Ok(Self { doc })
    }

    /// Whether the document declares an `/Encrypt` dictionary.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }
}

impl PdfBackend for LopdfBackend {
    fn page_numbers(&self) -> Vec<u32> {
        self.doc.get_pages().into_keys().collect()
    }

    fn page_text(&self, page_number: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_number])
            .map_err(|e| Error::TextExtract(format!("page {}: {}", page_number, e)))
    }

    fn version(&self) -> String {
        self.doc.version.to_string()
    }
}

fn map_load_error(err: lopdf::Error) -> Error {
    match err {
        lopdf::Error::IO(e) => Error::Io(e),
        other => Error::PdfParse(other.to_string()),
    }
}
