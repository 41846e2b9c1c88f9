use crate::units::*;

/// A rectangle on the card, given by its top-left corner and its size. The
/// card's origin is its top-left corner, with y growing downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: Mm,
    pub y: Mm,
    pub width: Mm,
    pub height: Mm,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x: Mm(x),
            y: Mm(y),
            width: Mm(width),
            height: Mm(height),
        }
    }

    /// The x-coordinate of the right edge
    pub fn right(&self) -> Mm {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge
    pub fn bottom(&self) -> Mm {
        self.y + self.height
    }

    /// Convert to a `pdf_writer::Rect` in points, flipping into PDF space where
    /// the origin is the bottom-left corner of a page `page_height` tall.
    pub fn to_pdf(self, page_height: Mm) -> pdf_writer::Rect {
        let bottom: Pt = (page_height - self.bottom()).into();
        let top: Pt = (page_height - self.y).into();
        let left: Pt = self.x.into();
        let right: Pt = self.right().into();
        pdf_writer::Rect {
            x1: left.0,
            y1: bottom.0,
            x2: right.0,
            y2: top.0,
        }
    }
}
