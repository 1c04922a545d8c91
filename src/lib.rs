//! # docubridge
//!
//! Bidirectional conversion between JSON documents and PDF files.
//!
//! - **JSON → PDF**: any JSON document is flattened into `(path, value)`
//!   pairs, one per scalar leaf, and rendered as a paginated two-column
//!   `Key | Value` table.
//! - **PDF → JSON**: the plain text of every page is extracted, optionally
//!   post-processed by an [`ExtractionStrategy`], and written as JSON with
//!   document metadata.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! // Returns false (and logs the cause) on any failure.
//! let ok = docubridge::json_to_pdf(Path::new("data.json"), Path::new("data.pdf"));
//! assert!(ok);
//!
//! let ok = docubridge::pdf_to_json(
//!     Path::new("report.pdf"),
//!     Path::new("report.json"),
//!     Some("extract_paragraphs"),
//! );
//! assert!(ok);
//! ```
//!
//! For typed errors and custom options use [`Converter`] directly:
//!
//! ```no_run
//! use docubridge::{ConvertOptions, Converter, PageSize, TableStyle};
//! use std::path::Path;
//!
//! let options = ConvertOptions::new()
//!     .with_separator("/")
//!     .with_table_style(TableStyle::new().with_page_size(PageSize::A4));
//!
//! Converter::new(options).try_json_to_pdf(Path::new("data.json"), Path::new("data.pdf"))?;
//! # Ok::<(), docubridge::Error>(())
//! ```

pub mod convert;
pub mod detect;
pub mod error;
pub mod flatten;
pub mod model;
pub mod output;
pub mod parser;
pub mod render;
pub mod sanitize;
pub mod strategy;
pub mod writer;

// Re-export commonly used types
pub use convert::{ConversionKind, ConvertOptions, Converter, LogReporter, Reporter};
pub use detect::{detect_pdf_from_path, is_pdf, PdfFormat, SupportedFormat};
pub use error::{Error, ExtractError, Result, WriteError};
pub use flatten::{flatten, flatten_with_separator, FlatEntry};
pub use model::{DocumentMetadata, ExtractedDocument, ExtractedPage, TabularRow};
pub use output::OutputDir;
pub use parser::PdfTextExtractor;
pub use render::JsonFormat;
pub use strategy::ExtractionStrategy;
pub use writer::{CellAlign, PageSize, TableStyle, TableWriter};

use std::path::Path;

/// Convert a JSON file into a Key/Value table PDF with default options.
///
/// Failures are logged and reported as `false`.
pub fn json_to_pdf(input: &Path, output: &Path) -> bool {
    Converter::default().json_to_pdf(input, output)
}

/// Extract a PDF's page text into a JSON file.
///
/// `strategy` names the post-processing to apply (`clean_text`,
/// `extract_paragraphs`); `None` or an unknown name leaves the text as
/// extracted.
pub fn pdf_to_json(input: &Path, output: &Path, strategy: Option<&str>) -> bool {
    let options = ConvertOptions::new().with_strategy_name(strategy);
    Converter::new(options).pdf_to_json(input, output)
}

/// Extract the text of a PDF into memory.
///
/// # Example
///
/// ```no_run
/// let doc = docubridge::extract_file("report.pdf")?;
/// println!("{} pages", doc.page_count());
/// # Ok::<(), docubridge::Error>(())
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractedDocument> {
    Ok(PdfTextExtractor::new().extract(path.as_ref())?)
}

/// Flatten a JSON string into table rows, header first.
pub fn json_str_to_rows(json: &str) -> Result<Vec<TabularRow>> {
    let value = flatten::parse_unbounded(json.as_bytes())?;
    let entries = flatten(&value);
    flatten::release(value);
    Ok(model::rows_from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_str_to_rows() {
        let rows = json_str_to_rows(r#"{"name": "DocuBridge Test", "features": ["A", "B"]}"#)
            .unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], TabularRow::header());
        assert_eq!(rows[2], TabularRow::new("features.0", "A"));
    }

    #[test]
    fn test_json_str_to_rows_deep() {
        let json = format!("{}true{}", "[".repeat(1_000), "]".repeat(1_000));
        assert_eq!(json_str_to_rows(&json).unwrap().len(), 2);
    }

    #[test]
    fn test_json_str_to_rows_malformed() {
        assert!(matches!(json_str_to_rows("[1,"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_pdf_to_json_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("out.json");
        assert!(!pdf_to_json(Path::new("missing.pdf"), &output, None));
        assert!(!output.exists());
    }
}
