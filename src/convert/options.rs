//! Conversion options.

use crate::flatten::DEFAULT_SEPARATOR;
use crate::render::JsonFormat;
use crate::strategy::ExtractionStrategy;
use crate::writer::TableStyle;

/// Default input size limit in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 100;

/// Options shared by both conversion directions.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Separator joining path segments of flattened keys
    pub separator: String,

    /// Post-processing applied to extracted PDF text
    pub strategy: ExtractionStrategy,

    /// Layout of the JSON written by PDF extraction
    pub json_format: JsonFormat,

    /// Page and table styling for generated PDFs
    pub table: TableStyle,

    /// Strip sensitive keys and truncate long strings before flattening
    pub sanitize: bool,

    /// Reject inputs larger than this many megabytes (`None` disables the check)
    pub max_file_size_mb: Option<u64>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            strategy: ExtractionStrategy::Identity,
            json_format: JsonFormat::Pretty,
            table: TableStyle::default(),
            sanitize: false,
            max_file_size_mb: Some(DEFAULT_MAX_FILE_SIZE_MB),
        }
    }
}

impl ConvertOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key path separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the extraction strategy.
    pub fn with_strategy(mut self, strategy: ExtractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the extraction strategy by name; unknown names select identity.
    pub fn with_strategy_name(mut self, name: Option<&str>) -> Self {
        self.strategy = ExtractionStrategy::from_name(name);
        self
    }

    /// Set the JSON output layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Set the table style.
    pub fn with_table_style(mut self, style: TableStyle) -> Self {
        self.table = style;
        self
    }

    /// Enable or disable sanitization of JSON input.
    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// Set the input size limit.
    pub fn with_max_file_size_mb(mut self, limit: Option<u64>) -> Self {
        self.max_file_size_mb = limit;
        self
    }
}
