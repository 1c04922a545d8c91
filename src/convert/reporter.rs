//! Reporting of conversion outcomes.
//!
//! The converter never logs through global state directly; it hands every
//! outcome to a [`Reporter`]. [`LogReporter`] forwards to the `log` facade,
//! which is what the CLI uses. Tests and embedding applications can supply
//! their own.

use std::fmt;
use std::path::Path;

use crate::error::Error;

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    /// JSON input rendered as a Key/Value PDF table
    JsonToPdf,
    /// PDF input extracted into JSON
    PdfToJson,
    /// Direction chosen from the input extension
    Auto,
}

impl ConversionKind {
    /// Short operation name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ConversionKind::JsonToPdf => "json_to_pdf",
            ConversionKind::PdfToJson => "pdf_to_json",
            ConversionKind::Auto => "convert",
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionKind::JsonToPdf => f.write_str("JSON to PDF"),
            ConversionKind::PdfToJson => f.write_str("PDF to JSON"),
            ConversionKind::Auto => f.write_str("Auto"),
        }
    }
}

/// Receives the outcome of each conversion.
pub trait Reporter: Send + Sync {
    /// A conversion finished and `output` was written.
    fn succeeded(&self, kind: ConversionKind, input: &Path, output: &Path);

    /// A conversion failed; nothing is reported to the caller beyond `false`.
    fn failed(&self, kind: ConversionKind, input: &Path, error: &Error);
}

/// [`Reporter`] that writes to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn succeeded(&self, kind: ConversionKind, input: &Path, output: &Path) {
        log::info!(
            "{} conversion succeeded: {} -> {}",
            kind,
            input.display(),
            output.display()
        );
    }

    fn failed(&self, kind: ConversionKind, input: &Path, error: &Error) {
        log::error!(
            "{} conversion error [{}] {}: {}",
            kind,
            kind.name(),
            input.display(),
            error
        );
    }
}
