//! Document model types shared by both conversion directions.
//!
//! [`ExtractedDocument`] is the intermediate representation produced by the
//! PDF text extractor and serialized as JSON. [`TabularRow`] is the unit the
//! table writer lays out when rendering flattened JSON as a PDF.

mod document;
mod page;
mod table;

pub use document::{DocumentMetadata, ExtractedDocument};
pub use page::ExtractedPage;
pub use table::{rows_from_entries, TabularRow, HEADER_KEY, HEADER_VALUE};
