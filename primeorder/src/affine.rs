//! Affine points and chord-and-tangent arithmetic.

use crate::{Error, Result, WeierstrassCurve};
use core::fmt;
use primefield::FieldElement;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// Point on a short Weierstrass curve in affine coordinates.
#[derive(Clone, Copy)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: FieldElement,

    /// y-coordinate
    pub(crate) y: FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    pub(crate) infinity: u8,
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        infinity: 1,
    };

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// The x-coordinate, in the Montgomery form of the curve's field.
    ///
    /// Zero for the point at infinity.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// The y-coordinate, in the Montgomery form of the curve's field.
    ///
    /// Zero for the point at infinity.
    pub fn y(&self) -> FieldElement {
        self.y
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DefaultIsZeroes for AffinePoint {}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity == 1 {
            f.write_str("AffinePoint::IDENTITY")
        } else {
            f.debug_struct("AffinePoint")
                .field("x", &self.x)
                .field("y", &self.y)
                .finish()
        }
    }
}

impl WeierstrassCurve {
    /// Create a point from field elements, checking the curve equation.
    pub fn point(&self, x: FieldElement, y: FieldElement) -> Result<AffinePoint> {
        if bool::from(self.satisfies(&x, &y)) {
            Ok(AffinePoint { x, y, infinity: 0 })
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Decode a point from big-endian coordinates, each exactly
    /// [`MontyField::byte_len`](primefield::MontyField::byte_len) bytes.
    ///
    /// Coordinates that are not canonical field elements are reported as
    /// [`Error::PointNotOnCurve`].
    pub fn point_from_be_bytes(&self, x: &[u8], y: &[u8]) -> Result<AffinePoint> {
        let x = Option::<FieldElement>::from(self.field.from_be_bytes(x));
        let y = Option::<FieldElement>::from(self.field.from_be_bytes(y));

        match (x, y) {
            (Some(x), Some(y)) => self.point(x, y),
            _ => Err(Error::PointNotOnCurve),
        }
    }

    /// Does `point` lie on the curve? The point at infinity always does.
    pub fn is_on_curve(&self, point: &AffinePoint) -> Choice {
        point.is_identity() | self.satisfies(&point.x, &point.y)
    }

    /// Returns `-point`.
    pub fn neg(&self, point: &AffinePoint) -> AffinePoint {
        AffinePoint {
            x: point.x,
            y: self.field.neg(&point.y),
            infinity: point.infinity,
        }
    }

    /// Returns `lhs + rhs` using the chord rule.
    ///
    /// **Variable time**: branches on the inputs and performs a field
    /// inversion. Both points must lie on the curve.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        if lhs.infinity == 1 {
            return *rhs;
        }
        if rhs.infinity == 1 {
            return *lhs;
        }
        if lhs.x == rhs.x {
            // Same x means rhs = ±lhs.
            return if lhs.y == rhs.y {
                self.double(lhs)
            } else {
                AffinePoint::IDENTITY
            };
        }

        let f = &self.field;
        let num = f.sub(&rhs.y, &lhs.y);
        let den = f.sub(&rhs.x, &lhs.x);
        f.invert(&den)
            .map(|inv| self.chord(lhs, &rhs.x, &f.mul(&num, &inv)))
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Returns `point + point` using the tangent rule.
    ///
    /// **Variable time**: branches on the input and performs a field
    /// inversion. The point must lie on the curve.
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        if point.infinity == 1 || bool::from(point.y.is_zero()) {
            return AffinePoint::IDENTITY;
        }

        let f = &self.field;
        let xx = f.square(&point.x);
        let num = f.add(&f.add(&f.double(&xx), &xx), &self.a);
        let den = f.double(&point.y);
        f.invert(&den)
            .map(|inv| self.chord(point, &point.x, &f.mul(&num, &inv)))
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Third intersection of the line through `p` with slope `lambda`, negated.
    fn chord(&self, p: &AffinePoint, other_x: &FieldElement, lambda: &FieldElement) -> AffinePoint {
        let f = &self.field;
        let x = f.sub(&f.sub(&f.square(lambda), &p.x), other_x);
        let y = f.sub(&f.mul(lambda, &f.sub(&p.x, &x)), &p.y);
        AffinePoint { x, y, infinity: 0 }
    }
}
