//! Post-processing strategies for extracted PDF text.
//!
//! Strategies form a closed set. Each is a pure transform over an
//! [`ExtractedDocument`]; adding one means adding a variant here, and the
//! compiler points at every `match` that needs to learn about it.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::ExtractedDocument;

/// A named post-processing transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtractionStrategy {
    /// Leave the document unchanged
    #[default]
    Identity,
    /// Trim leading and trailing whitespace from each page's text
    CleanText,
    /// Split each page's text into paragraphs on blank lines
    ExtractParagraphs,
}

impl ExtractionStrategy {
    /// Every named strategy, in the order they are listed to users.
    pub const ALL: [ExtractionStrategy; 2] = [
        ExtractionStrategy::CleanText,
        ExtractionStrategy::ExtractParagraphs,
    ];

    /// Resolve a strategy name.
    ///
    /// Unknown names and `None` resolve to [`ExtractionStrategy::Identity`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("clean_text") => ExtractionStrategy::CleanText,
            Some("extract_paragraphs") => ExtractionStrategy::ExtractParagraphs,
            Some(other) => {
                log::debug!("Unknown extraction strategy {:?}, using identity", other);
                ExtractionStrategy::Identity
            }
            None => ExtractionStrategy::Identity,
        }
    }

    /// The strategy's name, `None` for identity.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            ExtractionStrategy::Identity => None,
            ExtractionStrategy::CleanText => Some("clean_text"),
            ExtractionStrategy::ExtractParagraphs => Some("extract_paragraphs"),
        }
    }

    /// Apply the strategy to a document.
    pub fn apply(self, mut doc: ExtractedDocument) -> ExtractedDocument {
        match self {
            ExtractionStrategy::Identity => {}
            ExtractionStrategy::CleanText => {
                for page in &mut doc.pages {
                    let trimmed = page.text.trim();
                    if trimmed.len() != page.text.len() {
                        page.text = trimmed.to_string();
                    }
                }
            }
            ExtractionStrategy::ExtractParagraphs => {
                for page in &mut doc.pages {
                    page.paragraphs = Some(split_paragraphs(&page.text));
                }
            }
        }
        doc
    }
}

impl FromStr for ExtractionStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(Some(s)))
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("identity"))
    }
}

/// Apply the strategy named by `name` to `doc`.
pub fn apply_strategy(doc: ExtractedDocument, name: Option<&str>) -> ExtractedDocument {
    ExtractionStrategy::from_name(name).apply(doc)
}

fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:\r?\n){2,}").unwrap())
}

/// Split text on runs of two or more newlines.
///
/// Empty pieces produced by leading or trailing breaks are dropped, so a
/// blank page has no paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    paragraph_break()
        .split(text)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
