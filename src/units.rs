use derive_more::{Add, AddAssign, Deref, Div, From, Into, Mul, Sub, Sum};

/// Points per millimetre (72 points per inch, 25.4 millimetres per inch)
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// A length in PDF points (1/72 of an inch). This is the unit of the PDF
/// user space and of the page's media box.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[derive(Add, AddAssign, Sub, Mul, Div, Sum, Deref, From, Into)]
pub struct Pt(pub f32);

/// A length in millimetres. Card coordinates and font sizes are expressed in
/// millimetres and scaled into points once, when the content stream is written.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[derive(Add, AddAssign, Sub, Mul, Div, Sum, Deref, From, Into)]
pub struct Mm(pub f32);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * PT_PER_MM)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 / PT_PER_MM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_width_converts_to_points() {
        let width: Pt = Mm(85.0).into();
        assert!((width.0 - 240.945).abs() < 0.01);
    }

    #[test]
    fn arithmetic_stays_in_unit() {
        let x = Mm(27.0) + Mm(30.0) / 2.0;
        assert_eq!(x, Mm(42.0));
        assert_eq!(*(Mm(4.0) * 0.5), 2.0);
        let back: Mm = Pt::from(Mm(12.5)).into();
        assert!((back.0 - 12.5).abs() < 1e-4);
    }
}
