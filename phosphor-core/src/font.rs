//! Bitmap fonts for text rendering
//!
//! Column-major glyphs covering printable ASCII (32..=126), indexed by
//! `character - 32`. The 6x8 face is the classic 5x8 column font with one
//! spacing column; the 8x16 face is the same face doubled vertically, each
//! glyph split into a top and a bottom page row.

/// Glyph sizes understood by the text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// 6x8: one page per glyph row.
    Small,
    /// 8x16: two adjacent pages per glyph row.
    Large,
}

impl TextSize {
    /// Columns a glyph occupies.
    pub const fn width(self) -> usize {
        match self {
            TextSize::Small => 6,
            TextSize::Large => 8,
        }
    }

    /// Pages a glyph row occupies.
    pub const fn pages(self) -> usize {
        match self {
            TextSize::Small => 1,
            TextSize::Large => 2,
        }
    }
}

/// First character covered by the glyph tables.
const FIRST_CHAR: usize = 32;

/// One past the last character covered by the glyph tables.
const LAST_CHAR: usize = 127;

fn glyph_index(ch: char) -> usize {
    let code = ch as usize;
    if (FIRST_CHAR..LAST_CHAR).contains(&code) {
        code - FIRST_CHAR
    } else {
        // Unknown characters render as a blank cell
        0
    }
}

/// 6x8 glyph for `ch`, blank for characters outside the table.
pub fn glyph_6x8(ch: char) -> &'static [u8; 6] {
    &FONT_6X8[glyph_index(ch)]
}

/// 8x16 glyph for `ch`: bytes 0..8 are the top page row, 8..16 the bottom.
pub fn glyph_8x16(ch: char) -> &'static [u8; 16] {
    &FONT_8X16[glyph_index(ch)]
}

/// 6x8 face, one page row per glyph.
pub static FONT_6X8: [[u8; 6]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 'space'
    [0x00, 0x00, 0x5F, 0x00, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14, 0x00], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12, 0x00], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62, 0x00], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50, 0x00], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00, 0x00], // '''
    [0x00, 0x1C, 0x22, 0x41, 0x00, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00, 0x00], // ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14, 0x00], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08, 0x00], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02, 0x00], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46, 0x00], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31, 0x00], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10, 0x00], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39, 0x00], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03, 0x00], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36, 0x00], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E, 0x00], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00, 0x00], // ';'
    [0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14, 0x00], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08, 0x00], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06, 0x00], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E, 0x00], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36, 0x00], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22, 0x00], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41, 0x00], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01, 0x00], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A, 0x00], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01, 0x00], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41, 0x00], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40, 0x00], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06, 0x00], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46, 0x00], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31, 0x00], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01, 0x00], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F, 0x00], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63, 0x00], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07, 0x00], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43, 0x00], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20, 0x00], // '\'
    [0x00, 0x41, 0x41, 0x7F, 0x00, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04, 0x00], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40, 0x00], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78, 0x00], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38, 0x00], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20, 0x00], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F, 0x00], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18, 0x00], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02, 0x00], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E, 0x00], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78, 0x00], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78, 0x00], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78, 0x00], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08, 0x00], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C, 0x00], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08, 0x00], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20, 0x00], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20, 0x00], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C, 0x00], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C, 0x00], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C, 0x00], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C, 0x00], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44, 0x00], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00, 0x00], // '}'
    [0x08, 0x04, 0x08, 0x10, 0x08, 0x00], // '~'
];

/// 8x16 face, top page row then bottom page row per glyph.
pub static FONT_8X16: [[u8; 16]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 'space'
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00], // '!'
    [0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x00, 0x30, 0xFF, 0x30, 0xFF, 0x30, 0x00, 0x00,
     0x00, 0x03, 0x3F, 0x03, 0x3F, 0x03, 0x00, 0x00], // '#'
    [0x00, 0x30, 0xCC, 0xFF, 0xCC, 0x0C, 0x00, 0x00,
     0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x03, 0x00, 0x00], // '$'
    [0x00, 0x0F, 0x0F, 0xC0, 0x30, 0x0C, 0x00, 0x00,
     0x00, 0x0C, 0x03, 0x00, 0x3C, 0x3C, 0x00, 0x00], // '%'
    [0x00, 0x3C, 0xC3, 0x33, 0x0C, 0x00, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x33, 0x0C, 0x33, 0x00, 0x00], // '&'
    [0x00, 0x00, 0x33, 0x0F, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '''
    [0x00, 0x00, 0xF0, 0x0C, 0x03, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x03, 0x0C, 0x30, 0x00, 0x00, 0x00], // '('
    [0x00, 0x00, 0x03, 0x0C, 0xF0, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x0C, 0x03, 0x00, 0x00, 0x00], // ')'
    [0x00, 0x30, 0xC0, 0xFC, 0xC0, 0x30, 0x00, 0x00,
     0x00, 0x03, 0x00, 0x0F, 0x00, 0x03, 0x00, 0x00], // '*'
    [0x00, 0xC0, 0xC0, 0xFC, 0xC0, 0xC0, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x33, 0x0F, 0x00, 0x00, 0x00, 0x00], // ','
    [0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00], // '.'
    [0x00, 0x00, 0x00, 0xC0, 0x30, 0x0C, 0x00, 0x00,
     0x00, 0x0C, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '/'
    [0x00, 0xFC, 0x03, 0xC3, 0x33, 0xFC, 0x00, 0x00,
     0x00, 0x0F, 0x33, 0x30, 0x30, 0x0F, 0x00, 0x00], // '0'
    [0x00, 0x00, 0x0C, 0xFF, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x3F, 0x30, 0x00, 0x00, 0x00], // '1'
    [0x00, 0x0C, 0x03, 0x03, 0xC3, 0x3C, 0x00, 0x00,
     0x00, 0x30, 0x3C, 0x33, 0x30, 0x30, 0x00, 0x00], // '2'
    [0x00, 0x03, 0x03, 0x33, 0xCF, 0x03, 0x00, 0x00,
     0x00, 0x0C, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // '3'
    [0x00, 0xC0, 0x30, 0x0C, 0xFF, 0x00, 0x00, 0x00,
     0x00, 0x03, 0x03, 0x03, 0x3F, 0x03, 0x00, 0x00], // '4'
    [0x00, 0x3F, 0x33, 0x33, 0x33, 0xC3, 0x00, 0x00,
     0x00, 0x0C, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // '5'
    [0x00, 0xF0, 0xCC, 0xC3, 0xC3, 0x00, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // '6'
    [0x00, 0x03, 0x03, 0xC3, 0x33, 0x0F, 0x00, 0x00,
     0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00], // '7'
    [0x00, 0x3C, 0xC3, 0xC3, 0xC3, 0x3C, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // '8'
    [0x00, 0x3C, 0xC3, 0xC3, 0xC3, 0xFC, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x30, 0x0C, 0x03, 0x00, 0x00], // '9'
    [0x00, 0x00, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00], // ':'
    [0x00, 0x00, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x33, 0x0F, 0x00, 0x00, 0x00, 0x00], // ';'
    [0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x03, 0x0C, 0x30, 0x00, 0x00, 0x00], // '<'
    [0x00, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00,
     0x00, 0x03, 0x03, 0x03, 0x03, 0x03, 0x00, 0x00], // '='
    [0x00, 0x00, 0x03, 0x0C, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x0C, 0x03, 0x00, 0x00, 0x00], // '>'
    [0x00, 0x0C, 0x03, 0x03, 0xC3, 0x3C, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00], // '?'
    [0x00, 0x0C, 0xC3, 0xC3, 0x03, 0xFC, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x3F, 0x30, 0x0F, 0x00, 0x00], // '@'
    [0x00, 0xFC, 0x03, 0x03, 0x03, 0xFC, 0x00, 0x00,
     0x00, 0x3F, 0x03, 0x03, 0x03, 0x3F, 0x00, 0x00], // 'A'
    [0x00, 0xFF, 0xC3, 0xC3, 0xC3, 0x3C, 0x00, 0x00,
     0x00, 0x3F, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // 'B'
    [0x00, 0xFC, 0x03, 0x03, 0x03, 0x0C, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x0C, 0x00, 0x00], // 'C'
    [0x00, 0xFF, 0x03, 0x03, 0x0C, 0xF0, 0x00, 0x00,
     0x00, 0x3F, 0x30, 0x30, 0x0C, 0x03, 0x00, 0x00], // 'D'
    [0x00, 0xFF, 0xC3, 0xC3, 0xC3, 0x03, 0x00, 0x00,
     0x00, 0x3F, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00], // 'E'
    [0x00, 0xFF, 0xC3, 0xC3, 0xC3, 0x03, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 'F'
    [0x00, 0xFC, 0x03, 0xC3, 0xC3, 0xCC, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x3F, 0x00, 0x00], // 'G'
    [0x00, 0xFF, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00], // 'H'
    [0x00, 0x00, 0x03, 0xFF, 0x03, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x3F, 0x30, 0x00, 0x00, 0x00], // 'I'
    [0x00, 0x00, 0x00, 0x03, 0xFF, 0x03, 0x00, 0x00,
     0x00, 0x0C, 0x30, 0x30, 0x0F, 0x00, 0x00, 0x00], // 'J'
    [0x00, 0xFF, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x03, 0x0C, 0x30, 0x00, 0x00], // 'K'
    [0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x3F, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00], // 'L'
    [0x00, 0xFF, 0x0C, 0xF0, 0x0C, 0xFF, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00], // 'M'
    [0x00, 0xFF, 0x30, 0xC0, 0x00, 0xFF, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x00, 0x03, 0x3F, 0x00, 0x00], // 'N'
    [0x00, 0xFC, 0x03, 0x03, 0x03, 0xFC, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // 'O'
    [0x00, 0xFF, 0xC3, 0xC3, 0xC3, 0x3C, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 'P'
    [0x00, 0xFC, 0x03, 0x03, 0x03, 0xFC, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x33, 0x0C, 0x33, 0x00, 0x00], // 'Q'
    [0x00, 0xFF, 0xC3, 0xC3, 0xC3, 0x3C, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x03, 0x0C, 0x30, 0x00, 0x00], // 'R'
    [0x00, 0x3C, 0xC3, 0xC3, 0xC3, 0x03, 0x00, 0x00,
     0x00, 0x30, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // 'S'
    [0x00, 0x03, 0x03, 0xFF, 0x03, 0x03, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // 'T'
    [0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // 'U'
    [0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00,
     0x00, 0x03, 0x0C, 0x30, 0x0C, 0x03, 0x00, 0x00], // 'V'
    [0x00, 0xFF, 0x00, 0xC0, 0x00, 0xFF, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x0F, 0x30, 0x0F, 0x00, 0x00], // 'W'
    [0x00, 0x0F, 0x30, 0xC0, 0x30, 0x0F, 0x00, 0x00,
     0x00, 0x3C, 0x03, 0x00, 0x03, 0x3C, 0x00, 0x00], // 'X'
    [0x00, 0x3F, 0xC0, 0x00, 0xC0, 0x3F, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // 'Y'
    [0x00, 0x03, 0x03, 0xC3, 0x33, 0x0F, 0x00, 0x00,
     0x00, 0x3C, 0x33, 0x30, 0x30, 0x30, 0x00, 0x00], // 'Z'
    [0x00, 0x00, 0xFF, 0x03, 0x03, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x3F, 0x30, 0x30, 0x00, 0x00, 0x00], // '['
    [0x00, 0x0C, 0x30, 0xC0, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x03, 0x0C, 0x00, 0x00], // '\'
    [0x00, 0x00, 0x03, 0x03, 0xFF, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x30, 0x3F, 0x00, 0x00, 0x00], // ']'
    [0x00, 0x30, 0x0C, 0x03, 0x0C, 0x30, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00], // '_'
    [0x00, 0x00, 0x03, 0x0C, 0x30, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x30, 0x30, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x0C, 0x33, 0x33, 0x33, 0x3F, 0x00, 0x00], // 'a'
    [0x00, 0xFF, 0xC0, 0x30, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x3F, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // 'b'
    [0x00, 0xC0, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x0C, 0x00, 0x00], // 'c'
    [0x00, 0xC0, 0x30, 0x30, 0xC0, 0xFF, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x3F, 0x00, 0x00], // 'd'
    [0x00, 0xC0, 0x30, 0x30, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x0F, 0x33, 0x33, 0x33, 0x03, 0x00, 0x00], // 'e'
    [0x00, 0xC0, 0xFC, 0xC3, 0x03, 0x0C, 0x00, 0x00,
     0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00], // 'f'
    [0x00, 0xF0, 0x0C, 0x0C, 0x0C, 0xFC, 0x00, 0x00,
     0x00, 0x00, 0x33, 0x33, 0x33, 0x0F, 0x00, 0x00], // 'g'
    [0x00, 0xFF, 0xC0, 0x30, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00], // 'h'
    [0x00, 0x00, 0x30, 0xF3, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x3F, 0x30, 0x00, 0x00, 0x00], // 'i'
    [0x00, 0x00, 0x00, 0x30, 0xF3, 0x00, 0x00, 0x00,
     0x00, 0x0C, 0x30, 0x30, 0x0F, 0x00, 0x00, 0x00], // 'j'
    [0x00, 0xFF, 0x00, 0xC0, 0x30, 0x00, 0x00, 0x00,
     0x00, 0x3F, 0x03, 0x0C, 0x30, 0x00, 0x00, 0x00], // 'k'
    [0x00, 0x00, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x3F, 0x30, 0x00, 0x00, 0x00], // 'l'
    [0x00, 0xF0, 0x30, 0xC0, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x03, 0x00, 0x3F, 0x00, 0x00], // 'm'
    [0x00, 0xF0, 0xC0, 0x30, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00], // 'n'
    [0x00, 0xC0, 0x30, 0x30, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x30, 0x0F, 0x00, 0x00], // 'o'
    [0x00, 0xF0, 0x30, 0x30, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x3F, 0x03, 0x03, 0x03, 0x00, 0x00, 0x00], // 'p'
    [0x00, 0xC0, 0x30, 0x30, 0xC0, 0xF0, 0x00, 0x00,
     0x00, 0x00, 0x03, 0x03, 0x03, 0x3F, 0x00, 0x00], // 'q'
    [0x00, 0xF0, 0xC0, 0x30, 0x30, 0xC0, 0x00, 0x00,
     0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 'r'
    [0x00, 0xC0, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00,
     0x00, 0x30, 0x33, 0x33, 0x33, 0x0C, 0x00, 0x00], // 's'
    [0x00, 0x30, 0xFF, 0x30, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x0F, 0x30, 0x30, 0x0C, 0x00, 0x00], // 't'
    [0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x30, 0x0C, 0x3F, 0x00, 0x00], // 'u'
    [0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00,
     0x00, 0x03, 0x0C, 0x30, 0x0C, 0x03, 0x00, 0x00], // 'v'
    [0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00,
     0x00, 0x0F, 0x30, 0x0F, 0x30, 0x0F, 0x00, 0x00], // 'w'
    [0x00, 0x30, 0xC0, 0x00, 0xC0, 0x30, 0x00, 0x00,
     0x00, 0x30, 0x0C, 0x03, 0x0C, 0x30, 0x00, 0x00], // 'x'
    [0x00, 0xF0, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00,
     0x00, 0x00, 0x33, 0x33, 0x33, 0x0F, 0x00, 0x00], // 'y'
    [0x00, 0x30, 0x30, 0x30, 0xF0, 0x30, 0x00, 0x00,
     0x00, 0x30, 0x3C, 0x33, 0x30, 0x30, 0x00, 0x00], // 'z'
    [0x00, 0x00, 0xC0, 0x3C, 0x03, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x0F, 0x30, 0x00, 0x00, 0x00], // '{'
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // '|'
    [0x00, 0x00, 0x03, 0x3C, 0xC0, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x30, 0x0F, 0x00, 0x00, 0x00, 0x00], // '}'
    [0x00, 0xC0, 0x30, 0xC0, 0x00, 0xC0, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_dimensions() {
        assert_eq!(TextSize::Small.width(), 6);
        assert_eq!(TextSize::Small.pages(), 1);
        assert_eq!(TextSize::Large.width(), 8);
        assert_eq!(TextSize::Large.pages(), 2);
    }

    #[test]
    fn tables_cover_printable_ascii() {
        assert_eq!(FONT_6X8.len(), 95);
        assert_eq!(FONT_8X16.len(), 95);
        assert_eq!(glyph_6x8(' '), &FONT_6X8[0]);
        assert_eq!(glyph_6x8('~'), &FONT_6X8[94]);
        assert_eq!(glyph_6x8('A'), &FONT_6X8['A' as usize - 32]);
    }

    #[test]
    fn unknown_characters_fall_back_to_blank() {
        assert_eq!(glyph_6x8('\u{00e9}'), &FONT_6X8[0]);
        assert_eq!(glyph_8x16('\u{7ea2}'), &FONT_8X16[0]);
        assert_eq!(glyph_6x8('\u{7f}'), &FONT_6X8[0]);
    }

    #[test]
    fn large_face_doubles_the_small_face() {
        // Each lit bit of a small glyph column maps to a doubled bit pair
        // across the top/bottom rows of the large glyph.
        let small = glyph_6x8('H');
        let large = glyph_8x16('H');
        for col in 0..5 {
            let src = small[col];
            let top = large[col + 1];
            let bottom = large[col + 1 + 8];
            for bit in 0..4 {
                let lit = src >> bit & 1 != 0;
                assert_eq!(top >> (2 * bit) & 0b11, if lit { 0b11 } else { 0 });
                let lit_hi = src >> (bit + 4) & 1 != 0;
                assert_eq!(bottom >> (2 * bit) & 0b11, if lit_hi { 0b11 } else { 0 });
            }
        }
    }
}
