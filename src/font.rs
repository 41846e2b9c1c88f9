use crate::{
    refs::{ObjectReferences, RefType},
    units::Mm,
};
use pdf_writer::{Name, Pdf};

/// One of the PDF "standard 14" fonts. These are referenced by name and never
/// embedded: every conforming reader ships them, which keeps a boarding pass a
/// few kilobytes large.
///
/// Text is encoded with `WinAnsiEncoding`; characters that the encoding can't
/// represent are written as `?`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
}

// advance widths for U+0020..=U+007E, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// WinAnsi code points 0x80..=0x9F; 0 marks an unassigned slot
#[rustfmt::skip]
const WIN_ANSI_HIGH: [char; 32] = [
    '€', '\0', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\0', 'Ž', '\0',
    '\0', '‘', '’', '“', '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\0', 'ž', 'Ÿ',
];

impl StandardFont {
    /// Every standard font, in resource order. The position of a font in this
    /// list is its `/F{n}` resource name on the page.
    pub const ALL: [StandardFont; 3] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::Courier,
    ];

    /// The PostScript name used as the font's `/BaseFont`
    pub fn base_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            StandardFont::Helvetica => 0,
            StandardFont::HelveticaBold => 1,
            StandardFont::Courier => 2,
        }
    }

    /// Ascender height in 1/1000 em
    fn ascender_units(&self) -> f32 {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaBold => 718.0,
            StandardFont::Courier => 629.0,
        }
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Mm) -> Mm {
        size * (self.ascender_units() / 1000.0)
    }

    /// Advance width of a single WinAnsi-encoded byte, in 1/1000 em. Bytes outside
    /// printable ASCII fall back to the width of a digit.
    fn advance(&self, byte: u8) -> u16 {
        match self {
            StandardFont::Courier => 600,
            StandardFont::Helvetica => match byte {
                0x20..=0x7e => HELVETICA_WIDTHS[(byte - 0x20) as usize],
                _ => 556,
            },
            StandardFont::HelveticaBold => match byte {
                0x20..=0x7e => HELVETICA_BOLD_WIDTHS[(byte - 0x20) as usize],
                _ => 611,
            },
        }
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Mm) -> Mm {
        let scaling = size / 1000.0;
        encode_win_ansi(text)
            .into_iter()
            .map(|byte| scaling * self.advance(byte) as f32)
            .sum()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        writer
            .type1_font(id)
            .base_font(Name(self.base_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Encode text as WinAnsi (Windows-1252) bytes, the single-byte encoding the
/// standard fonts are declared with. Unrepresentable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            0x20..=0x7e | 0xa0..=0xff => ch as u32 as u8,
            _ => WIN_ANSI_HIGH
                .iter()
                .position(|&c| c != '\0' && c == ch)
                .map(|i| 0x80 + i as u8)
                .unwrap_or(b'?'),
        })
        .collect()
}
