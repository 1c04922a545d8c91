//! Error types for docubridge.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docubridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not syntactically valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The tabular document could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// The source PDF could not be read.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The input file exceeds the configured size limit.
    #[error("{path} is {size_mb:.1} MB, limit is {limit_mb} MB")]
    FileTooLarge {
        path: PathBuf,
        size_mb: f64,
        limit_mb: u64,
    },

    /// The input file has no content at all.
    #[error("{0} is empty")]
    EmptyFile(PathBuf),

    /// The input extension maps to no conversion direction.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(PathBuf),

    /// The file does not start with a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries an unrecognized version.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error extracting text from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error while rendering output (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Errors produced by the table writer.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Only the header row would be written.
    #[error("no data rows to write")]
    EmptyInput,

    /// The destination could not be created or written.
    #[error("cannot write {path}: {source}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The PDF object graph could not be encoded.
    #[error("PDF encoding error: {0}")]
    Render(String),
}

/// Errors produced by the text extractor.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The source cannot be opened or parsed as a PDF.
    #[error("cannot read {path} as PDF: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

impl ExtractError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExtractError::Unreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
