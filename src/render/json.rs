//! JSON rendering for extracted documents.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::ExtractedDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with two-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// Non-ASCII text is emitted as-is, not as `\u` escapes.
pub fn to_json(doc: &ExtractedDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize a document and write it to `path`.
pub fn write_json(doc: &ExtractedDocument, format: JsonFormat, path: &Path) -> Result<()> {
    let json = to_json(doc, format)?;
    fs::write(path, json)?;
    Ok(())
}
