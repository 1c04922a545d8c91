//! Rendering of Key/Value tables into paginated PDF documents.
//!
//! # Example
//!
//! ```no_run
//! use docubridge::model::TabularRow;
//! use docubridge::writer::{PageSize, TableStyle, TableWriter};
//! use std::path::Path;
//!
//! let rows = vec![TabularRow::header(), TabularRow::new("name", "Test")];
//! let writer = TableWriter::with_style(TableStyle::new().with_page_size(PageSize::A4));
//! writer.write(&rows, Path::new("table.pdf"))?;
//! # Ok::<(), docubridge::error::WriteError>(())
//! ```

mod metrics;
mod style;
mod table_writer;

pub use metrics::{encode_win_ansi, text_width, wrap_text, FontFace};
pub use style::{CellAlign, PageSize, Rgb, TableStyle};
pub use table_writer::TableWriter;
