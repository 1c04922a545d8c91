//! Table styling and page geometry.

/// An RGB color with components in `0.0..=1.0`.
pub type Rgb = (f32, f32, f32);

const GREY: Rgb = (0.5, 0.5, 0.5);
const WHITE_SMOKE: Rgb = (0.96, 0.96, 0.96);
const BEIGE: Rgb = (0.96, 0.96, 0.86);
const BLACK: Rgb = (0.0, 0.0, 0.0);

/// Output page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// US Letter, 8.5 x 11 inches
    #[default]
    Letter,
    /// ISO A4, 210 x 297 mm
    A4,
}

impl PageSize {
    /// Page dimensions as (width, height) in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
        }
    }
}

/// Horizontal alignment of cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    /// Align to the left padding edge
    Left,
    /// Center within the cell
    #[default]
    Center,
}

/// Visual configuration of the Key/Value table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Page size
    pub page_size: PageSize,

    /// Page margin on all sides, in points
    pub margin: f32,

    /// Share of the table width given to the key column
    pub key_column_ratio: f32,

    /// Header font size (Helvetica-Bold)
    pub header_font_size: f32,

    /// Body font size (Helvetica)
    pub body_font_size: f32,

    /// Padding inside each cell, in points
    pub cell_padding: f32,

    /// Extra space below header text, in points
    pub header_bottom_padding: f32,

    /// Line height as a multiple of the font size
    pub line_spacing: f32,

    /// Horizontal text alignment
    pub align: CellAlign,

    /// Header row background
    pub header_background: Rgb,

    /// Header row text color
    pub header_text: Rgb,

    /// Body row background
    pub body_background: Rgb,

    /// Body row text color
    pub body_text: Rgb,

    /// Grid line width, in points (0 disables the grid)
    pub grid_width: f32,

    /// Grid line color
    pub grid_color: Rgb,
}

impl TableStyle {
    /// Create the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set page margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Set the share of the width given to the key column (clamped to 10%..90%).
    pub fn with_key_column_ratio(mut self, ratio: f32) -> Self {
        self.key_column_ratio = ratio.clamp(0.1, 0.9);
        self
    }

    /// Set text alignment.
    pub fn with_align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    /// Set header and body font sizes.
    pub fn with_font_sizes(mut self, header: f32, body: f32) -> Self {
        self.header_font_size = header;
        self.body_font_size = body;
        self
    }

    /// Width available to the table, in points.
    pub fn table_width(&self) -> f32 {
        let (width, _) = self.page_size.dimensions();
        width - 2.0 * self.margin
    }

    /// Widths of the key and value columns, in points.
    pub fn column_widths(&self) -> [f32; 2] {
        let total = self.table_width();
        let key = total * self.key_column_ratio;
        [key, total - key]
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin: 72.0,
            key_column_ratio: 0.4,
            header_font_size: 12.0,
            body_font_size: 10.0,
            cell_padding: 4.0,
            header_bottom_padding: 12.0,
            line_spacing: 1.2,
            align: CellAlign::Center,
            header_background: GREY,
            header_text: WHITE_SMOKE,
            body_background: BEIGE,
            body_text: BLACK,
            grid_width: 1.0,
            grid_color: BLACK,
        }
    }
}
