//! Input format detection.
//!
//! Conversion direction is chosen from the input's extension; PDF inputs
//! are additionally checked for the `%PDF-x.y` header before lopdf sees
//! them, so non-PDF files fail fast with a clear reason.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Input formats the converter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedFormat {
    /// JSON document, converted to a PDF table
    Json,
    /// PDF document, converted to JSON
    Pdf,
}

impl SupportedFormat {
    /// Recognized file extensions, lowercase without the leading dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SupportedFormat::Json => &["json", "jsonl"],
            SupportedFormat::Pdf => &["pdf", "pdfa"],
        }
    }

    /// Resolve a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        [SupportedFormat::Json, SupportedFormat::Pdf]
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    /// Resolve a format from a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Extension of the file this format converts into.
    pub fn output_extension(&self) -> &'static str {
        match self {
            SupportedFormat::Json => "pdf",
            SupportedFormat::Pdf => "json",
        }
    }
}

/// PDF header information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const HEADER_LEN: usize = PDF_MAGIC_LEN + VERSION_LEN;

/// Detect the PDF header of a file.
pub fn detect_pdf_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    detect_pdf_from_bytes(&header)
}

/// Detect the PDF header from the first bytes of a file.
///
/// # Returns
/// * `Ok(PdfFormat)` if the data starts with a valid PDF header
/// * `Err(Error::UnknownFormat)` if the data is not a PDF
pub fn detect_pdf_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < HEADER_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..HEADER_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// Check if a version string looks like `d.d`.
fn is_valid_version(version: &str) -> bool {
    matches!(
        version.as_bytes(),
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit()
    )
}

/// Check if a file starts with a valid PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_pdf_from_path(path).is_ok()
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_pdf_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        let format = detect_pdf_from_bytes(data).unwrap();
        assert_eq!(format.version, "1.7");
        assert_eq!(format.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_pdf_from_bytes(b"{\"name\": \"not a pdf\"}");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        assert!(matches!(
            detect_pdf_from_bytes(b"%PDF"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(detect_pdf_from_bytes(b""), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_bad_version() {
        assert!(matches!(
            detect_pdf_from_bytes(b"%PDF-x.y\n"),
            Err(Error::UnsupportedVersion(v)) if v == "x.y"
        ));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
    }

    #[test]
    fn test_detect_from_short_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.pdf");
        std::fs::write(&path, b"%PD").unwrap();
        assert!(!is_pdf(&path));
        assert!(!is_pdf(dir.path().join("missing.pdf")));
    }

    #[test]
    fn test_supported_format_from_path() {
        assert_eq!(
            SupportedFormat::from_path("data.JSON"),
            Some(SupportedFormat::Json)
        );
        assert_eq!(
            SupportedFormat::from_path("lines.jsonl"),
            Some(SupportedFormat::Json)
        );
        assert_eq!(
            SupportedFormat::from_path("scan.pdfa"),
            Some(SupportedFormat::Pdf)
        );
        assert_eq!(SupportedFormat::from_path("notes.txt"), None);
        assert_eq!(SupportedFormat::from_path("noextension"), None);
    }

    #[test]
    fn test_output_extension() {
        assert_eq!(SupportedFormat::Json.output_extension(), "pdf");
        assert_eq!(SupportedFormat::Pdf.output_extension(), "json");
    }
}
