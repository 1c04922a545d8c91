//! Conversion facade joining the JSON and PDF pipelines.
//!
//! [`Converter`] exposes two entry points of the same shape. Each reads one
//! file, writes one file, reports the outcome to its [`Reporter`] and
//! returns `true` or `false`. The `try_*` variants run the same pipelines
//! and hand back the typed [`Error`] instead.
//!
//! # Example
//!
//! ```no_run
//! use docubridge::convert::{ConvertOptions, Converter};
//! use docubridge::strategy::ExtractionStrategy;
//! use std::path::Path;
//!
//! let converter = Converter::new(
//!     ConvertOptions::new().with_strategy(ExtractionStrategy::CleanText),
//! );
//!
//! if converter.pdf_to_json(Path::new("report.pdf"), Path::new("report.json")) {
//!     println!("done");
//! }
//! ```

mod options;
mod reporter;

pub use options::{ConvertOptions, DEFAULT_MAX_FILE_SIZE_MB};
pub use reporter::{ConversionKind, LogReporter, Reporter};

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::detect::SupportedFormat;
use crate::error::{Error, Result};
use crate::flatten::{flatten_with_separator, parse_unbounded, release};
use crate::model::{rows_from_entries, ExtractedDocument};
use crate::parser::PdfTextExtractor;
use crate::render::write_json;
use crate::sanitize::sanitize;
use crate::writer::TableWriter;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Runs conversions and reports their outcome.
#[derive(Clone)]
pub struct Converter {
    options: ConvertOptions,
    reporter: Arc<dyn Reporter>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Converter {
    /// Create a converter that reports through the `log` facade.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_reporter(options, Arc::new(LogReporter))
    }

    /// Create a converter with a custom reporter.
    pub fn with_reporter(options: ConvertOptions, reporter: Arc<dyn Reporter>) -> Self {
        Self { options, reporter }
    }

    /// Get the options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Render the JSON file at `input` as a Key/Value table PDF at `output`.
    pub fn json_to_pdf(&self, input: &Path, output: &Path) -> bool {
        let result = self.try_json_to_pdf(input, output);
        self.report(ConversionKind::JsonToPdf, input, output, result)
    }

    /// Extract the text of the PDF at `input` into a JSON file at `output`.
    pub fn pdf_to_json(&self, input: &Path, output: &Path) -> bool {
        let result = self.try_pdf_to_json(input, output).map(|_| ());
        self.report(ConversionKind::PdfToJson, input, output, result)
    }

    /// Convert `input` in whichever direction its extension implies.
    ///
    /// An unrecognized extension is reported as an
    /// [`Error::UnsupportedFileType`] failure.
    pub fn convert(&self, input: &Path, output: &Path) -> bool {
        match SupportedFormat::from_path(input) {
            Some(SupportedFormat::Json) => self.json_to_pdf(input, output),
            Some(SupportedFormat::Pdf) => self.pdf_to_json(input, output),
            None => self.report(
                ConversionKind::Auto,
                input,
                output,
                Err(Error::UnsupportedFileType(input.to_path_buf())),
            ),
        }
    }

    /// [`json_to_pdf`](Self::json_to_pdf) returning the typed error.
    pub fn try_json_to_pdf(&self, input: &Path, output: &Path) -> Result<()> {
        self.check_input_size(input)?;

        let data = fs::read(input)?;
        let mut value = parse_unbounded(&data)?;
        if self.options.sanitize {
            value = sanitize(value);
        }

        let entries = flatten_with_separator(&value, &self.options.separator);
        release(value);
        log::debug!(
            "Flattened {} into {} entries",
            input.display(),
            entries.len()
        );

        let rows = rows_from_entries(entries);
        TableWriter::with_style(self.options.table.clone()).write(&rows, output)?;
        Ok(())
    }

    /// [`pdf_to_json`](Self::pdf_to_json) returning the typed error.
    ///
    /// On success the document that was written is returned.
    pub fn try_pdf_to_json(&self, input: &Path, output: &Path) -> Result<ExtractedDocument> {
        self.check_input_size(input)?;

        let document = PdfTextExtractor::new().extract(input)?;
        let document = self.options.strategy.apply(document);
        write_json(&document, self.options.json_format, output)?;
        Ok(document)
    }

    fn report(
        &self,
        kind: ConversionKind,
        input: &Path,
        output: &Path,
        result: Result<()>,
    ) -> bool {
        match result {
            Ok(()) => {
                self.reporter.succeeded(kind, input, output);
                true
            }
            Err(e) => {
                self.reporter.failed(kind, input, &e);
                false
            }
        }
    }

    /// Reject empty or oversized inputs before reading them.
    ///
    /// A missing file is left for the pipeline itself to report.
    fn check_input_size(&self, input: &Path) -> Result<()> {
        let Some(limit_mb) = self.options.max_file_size_mb else {
            return Ok(());
        };
        let Ok(metadata) = fs::metadata(input) else {
            return Ok(());
        };

        let size = metadata.len();
        if size == 0 {
            return Err(Error::EmptyFile(input.to_path_buf()));
        }
        if size > limit_mb.saturating_mul(BYTES_PER_MB) {
            return Err(Error::FileTooLarge {
                path: input.to_path_buf(),
                size_mb: size as f64 / BYTES_PER_MB as f64,
                limit_mb,
            });
        }
        Ok(())
    }
}
