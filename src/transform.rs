//! 2D transformation matrices for content-stream positioning.

use crate::units::PT_PER_MM;

/// A PDF transformation matrix, written with the `cm` operator. Translations are
/// in the units of the space the transform is applied in.
///
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
///
/// Transforms compose with [`then`](Transform::then), applied in the order they
/// are chained:
///
/// ```
/// use boarding_pass::Transform;
///
/// // stretch the unit square to 30 units, then move it up and right
/// let placement = Transform::scale(30.0, 30.0).with_translate(72.0, 72.0);
/// assert_eq!(placement.e, 72.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: x,
            f: y,
        }
    }

    /// Create a scaling transform
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        }
    }

    /// The transform that maps millimetre coordinates onto PDF points
    pub fn millimetres() -> Self {
        Self::scale(PT_PER_MM, PT_PER_MM)
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: f32, y: f32) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Write the transform as a `cm` operator
    pub(crate) fn to_operator(self) -> String {
        format!(
            "{} {} {} {} {} {} cm\n",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_then_translate_keeps_size() {
        let t = Transform::scale(30.0, 30.0).with_translate(27.0, 9.0);
        assert_eq!(
            t,
            Transform {
                a: 30.0,
                b: 0.0,
                c: 0.0,
                d: 30.0,
                e: 27.0,
                f: 9.0,
            }
        );
    }

    #[test]
    fn identity_is_neutral() {
        let t = Transform::millimetres();
        assert_eq!(t.then(Transform::identity()), t);
        assert_eq!(
            t.to_operator(),
            format!("{PT_PER_MM} 0 0 {PT_PER_MM} 0 0 cm\n")
        );
    }
}
