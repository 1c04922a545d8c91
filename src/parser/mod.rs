//! PDF text extraction.

mod backend;
mod extractor;

pub use backend::{LopdfBackend, PdfBackend};
pub use extractor::PdfTextExtractor;
