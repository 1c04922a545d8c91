//! Base-14 Helvetica metrics, WinAnsi encoding and line wrapping.
//!
//! Widths are standard AFM advance widths in units of 1/1000 em for the
//! printable ASCII range. Characters outside it use the width of a digit.

use unicode_normalization::UnicodeNormalization;

/// Font face used for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
}

impl FontFace {
    /// PostScript name of the face.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used in content streams.
    pub fn resource_name(&self) -> &'static [u8] {
        match self {
            FontFace::Regular => b"F1",
            FontFace::Bold => b"F2",
        }
    }
}

const DEFAULT_WIDTH: u16 = 556;

// Advance widths for ' '..='~'.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_width(ch: char, face: FontFace) -> u16 {
    let table = match face {
        FontFace::Regular => &HELVETICA,
        FontFace::Bold => &HELVETICA_BOLD,
    };
    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` in points at `font_size`.
pub fn text_width(text: &str, face: FontFace, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, face) as u32).sum();
    units as f32 * font_size / 1000.0
}

/// Encode text for a WinAnsiEncoding simple font.
///
/// Text is NFC-normalized first so combining sequences collapse onto
/// Latin-1 code points where possible. Characters with no WinAnsi code
/// become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.nfc().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\t' => b' ',
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}

/// Wrap text into lines no wider than `max_width` points.
///
/// Embedded newlines always start a new line. Words longer than the width
/// are broken between characters. Always returns at least one line.
pub fn wrap_text(text: &str, face: FontFace, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let space = text_width(" ", face, font_size);

    for source_line in text.split('\n') {
        let source_line = source_line.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in source_line.split(' ') {
            let word_width = text_width(word, face, font_size);
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + space + word_width
            };

            if needed <= max_width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Hard-break an overlong word.
                for ch in word.chars() {
                    let w = char_width(ch, face) as f32 * font_size / 1000.0;
                    if current_width + w > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(ch);
                    current_width += w;
                }
            }
        }

        lines.push(current);
    }

    lines
}
