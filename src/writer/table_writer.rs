//! Paginated Key/Value table writer backed by lopdf.

use std::fs;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId, Stream, StringFormat};

use crate::error::WriteError;
use crate::model::TabularRow;

use super::metrics::{encode_win_ansi, text_width, wrap_text, FontFace};
use super::style::{CellAlign, Rgb, TableStyle};

const PRODUCER: &str = concat!("docubridge ", env!("CARGO_PKG_VERSION"));

/// Writes a two-column table as a paginated PDF.
///
/// The first row passed to [`TableWriter::write`] is the header: it is drawn
/// in bold on a contrasting background and repeated at the top of every
/// page. The remaining rows are the body.
#[derive(Debug, Clone, Default)]
pub struct TableWriter {
    style: TableStyle,
}

/// A row after wrapping, ready to be placed on a page.
struct WrappedRow {
    cells: [Vec<String>; 2],
}

impl WrappedRow {
    fn line_count(&self) -> usize {
        self.cells[0].len().max(self.cells[1].len())
    }
}

/// Placement state for the page being filled.
struct PageCursor {
    operations: Vec<Operation>,
    y: f32,
    has_body: bool,
}

impl TableWriter {
    /// Create a writer with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with a custom style.
    pub fn with_style(style: TableStyle) -> Self {
        Self { style }
    }

    /// Get the style.
    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Render `rows` and write the PDF to `destination`.
    ///
    /// The document is encoded completely before the destination is
    /// touched, so no file is created on failure.
    pub fn write(&self, rows: &[TabularRow], destination: &Path) -> Result<(), WriteError> {
        let bytes = self.render(rows)?;
        fs::write(destination, &bytes).map_err(|source| WriteError::IoFailure {
            path: destination.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Wrote {} table rows ({} bytes) to {}",
            rows.len(),
            bytes.len(),
            destination.display()
        );
        Ok(())
    }

    /// Render `rows` to PDF bytes.
    pub fn render(&self, rows: &[TabularRow]) -> Result<Vec<u8>, WriteError> {
        let (header, body) = match rows.split_first() {
            Some((header, body)) if !body.is_empty() => (header, body),
            _ => return Err(WriteError::EmptyInput),
        };

        let pages = self.layout(header, body);
        self.build_document(pages)
    }

    /// Lay rows out into per-page content operations.
    fn layout(&self, header: &TabularRow, body: &[TabularRow]) -> Vec<Vec<Operation>> {
        let style = &self.style;
        let (_, page_height) = style.page_size.dimensions();
        let top = page_height - style.margin;
        let bottom = style.margin;
        let header = self.wrap_row(header, FontFace::Bold, style.header_font_size);

        let mut pages = Vec::new();
        let mut cursor = self.start_page(&header, top);

        for row in body {
            let row = self.wrap_row(row, FontFace::Regular, style.body_font_size);
            let total_lines = row.line_count();
            let mut start = 0;

            while start < total_lines {
                let available = cursor.y - bottom;
                let fitting = self.lines_fitting(available);
                let remaining = total_lines - start;

                if fitting < remaining && cursor.has_body {
                    // Move the whole row to a fresh page before splitting it.
                    pages.push(std::mem::take(&mut cursor.operations));
                    cursor = self.start_page(&header, top);
                    continue;
                }

                let count = remaining.min(fitting.max(1));
                self.draw_body_segment(&mut cursor, &row, start, count);
                start += count;

                if start < total_lines {
                    pages.push(std::mem::take(&mut cursor.operations));
                    cursor = self.start_page(&header, top);
                }
            }
        }

        pages.push(cursor.operations);
        pages
    }

    fn wrap_row(&self, row: &TabularRow, face: FontFace, font_size: f32) -> WrappedRow {
        let widths = self.style.column_widths();
        let pad = self.style.cell_padding;
        let [key, value] = row.cells();
        WrappedRow {
            cells: [
                wrap_text(key, face, font_size, widths[0] - 2.0 * pad),
                wrap_text(value, face, font_size, widths[1] - 2.0 * pad),
            ],
        }
    }

    fn body_leading(&self) -> f32 {
        self.style.body_font_size * self.style.line_spacing
    }

    /// How many body lines fit in `available` points of vertical space.
    fn lines_fitting(&self, available: f32) -> usize {
        let usable = available - 2.0 * self.style.cell_padding;
        if usable <= 0.0 {
            return 0;
        }
        (usable / self.body_leading()).floor() as usize
    }

    fn start_page(&self, header: &WrappedRow, top: f32) -> PageCursor {
        let style = &self.style;
        let leading = style.header_font_size * style.line_spacing;
        let height = header.line_count() as f32 * leading
            + style.cell_padding
            + style.header_bottom_padding;

        let mut operations = Vec::new();
        self.draw_row(
            &mut operations,
            header,
            0,
            header.line_count(),
            top,
            height,
            FontFace::Bold,
            style.header_font_size,
            style.header_background,
            style.header_text,
        );

        PageCursor {
            operations,
            y: top - height,
            has_body: false,
        }
    }

    fn draw_body_segment(
        &self,
        cursor: &mut PageCursor,
        row: &WrappedRow,
        start: usize,
        count: usize,
    ) {
        let style = &self.style;
        let height = count as f32 * self.body_leading() + 2.0 * style.cell_padding;
        self.draw_row(
            &mut cursor.operations,
            row,
            start,
            count,
            cursor.y,
            height,
            FontFace::Regular,
            style.body_font_size,
            style.body_background,
            style.body_text,
        );
        cursor.y -= height;
        cursor.has_body = true;
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_row(
        &self,
        ops: &mut Vec<Operation>,
        row: &WrappedRow,
        start: usize,
        count: usize,
        top: f32,
        height: f32,
        face: FontFace,
        font_size: f32,
        background: Rgb,
        text_color: Rgb,
    ) {
        let style = &self.style;
        let widths = style.column_widths();
        let left = style.margin;
        let row_bottom = top - height;

        // Background
        ops.push(Operation::new("rg", rgb_operands(background)));
        ops.push(Operation::new(
            "re",
            reals(&[left, row_bottom, widths[0] + widths[1], height]),
        ));
        ops.push(Operation::new("f", vec![]));

        // Grid
        if style.grid_width > 0.0 {
            ops.push(Operation::new("RG", rgb_operands(style.grid_color)));
            ops.push(Operation::new("w", reals(&[style.grid_width])));
            let mut x = left;
            for width in widths {
                ops.push(Operation::new("re", reals(&[x, row_bottom, width, height])));
                x += width;
            }
            ops.push(Operation::new("S", vec![]));
        }

        // Text
        let leading = font_size * style.line_spacing;
        let ascent = font_size * 0.8;
        let mut x = left;
        for (column, width) in widths.iter().enumerate() {
            let lines = row.cells[column].iter().skip(start).take(count);
            for (i, line) in lines.enumerate() {
                if line.is_empty() {
                    continue;
                }
                let line_x = match style.align {
                    CellAlign::Left => x + style.cell_padding,
                    CellAlign::Center => {
                        x + ((width - text_width(line, face, font_size)) / 2.0)
                            .max(style.cell_padding)
                    }
                };
                let baseline = top - style.cell_padding - ascent - i as f32 * leading;

                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(face.resource_name().to_vec()),
                        Object::Real(font_size),
                    ],
                ));
                ops.push(Operation::new("rg", rgb_operands(text_color)));
                ops.push(Operation::new("Td", reals(&[line_x, baseline])));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(line), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            x += width;
        }
    }

    /// Assemble the page content streams into a PDF document.
    fn build_document(&self, pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, WriteError> {
        let (width, height) = self.style.page_size.dimensions();
        let mut doc = LopdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for face in [FontFace::Regular, FontFace::Bold] {
            let font_id = doc.add_object(font_dictionary(face));
            fonts.set(face.resource_name().to_vec(), Object::Reference(font_id));
        }
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));
        let resources_id = doc.add_object(resources);

        let page_count = pages.len();
        let mut kids = Vec::with_capacity(page_count);
        for operations in pages {
            let data = Content { operations }
                .encode()
                .map_err(|e| WriteError::Render(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), data));
            let page_id = doc.add_object(page_dictionary(
                pages_id,
                content_id,
                resources_id,
                (width, height),
            ));
            kids.push(Object::Reference(page_id));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Kids", Object::Array(kids));
        pages_dict.set("Count", Object::Integer(page_count as i64));
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut info = Dictionary::new();
        info.set("Producer", Object::string_literal(PRODUCER));
        info.set(
            "CreationDate",
            Object::string_literal(chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
        );
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", Object::Reference(info_id));

        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| WriteError::Render(e.to_string()))?;

        log::debug!("Encoded table document with {} pages", page_count);
        Ok(bytes)
    }
}

fn font_dictionary(face: FontFace) -> Dictionary {
    let mut font = Dictionary::new();
    font.set("Type", Object::Name(b"Font".to_vec()));
    font.set("Subtype", Object::Name(b"Type1".to_vec()));
    font.set("BaseFont", Object::Name(face.base_font().as_bytes().to_vec()));
    font.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    font
}

fn page_dictionary(
    parent: ObjectId,
    contents: ObjectId,
    resources: ObjectId,
    (width, height): (f32, f32),
) -> Dictionary {
    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(parent));
    page.set("MediaBox", Object::Array(reals(&[0.0, 0.0, width, height])));
    page.set("Contents", Object::Reference(contents));
    page.set("Resources", Object::Reference(resources));
    page
}

fn reals(values: &[f32]) -> Vec<Object> {
    values.iter().map(|v| Object::Real(*v)).collect()
}

fn rgb_operands((r, g, b): Rgb) -> Vec<Object> {
    reals(&[r, g, b])
}
