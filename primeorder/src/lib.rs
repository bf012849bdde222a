#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "std")]
extern crate std;

mod affine;
mod error;
mod point_arithmetic;
mod projective;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
    projective::ProjectivePoint,
};
pub use primefield::{self, FieldElement, MontyField, U256};

use subtle::ConstantTimeEq;

/// Short Weierstrass curve `y² = x³ + ax + b` over a prime field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeierstrassCurve {
    field: MontyField,
    a: FieldElement,
    b: FieldElement,
    /// `3b`, used by the complete formulas.
    b3: FieldElement,
    generator: AffinePoint,
    order_bits: u32,
}

impl WeierstrassCurve {
    /// Create a curve from its coefficients, base point and the bit length of
    /// the order of the base point.
    ///
    /// Fails if the curve is singular or the base point does not satisfy the
    /// curve equation.
    pub fn new(
        field: MontyField,
        a: FieldElement,
        b: FieldElement,
        gx: FieldElement,
        gy: FieldElement,
        order_bits: u32,
    ) -> Result<Self> {
        // 4a³ + 27b² != 0
        let a3 = field.mul(&field.square(&a), &a);
        let b2 = field.square(&b);
        let disc = field.add(
            &field.mul(&field.from_u64(4), &a3),
            &field.mul(&field.from_u64(27), &b2),
        );
        if bool::from(disc.is_zero()) {
            return Err(Error::SingularCurve);
        }

        let b3 = field.mul(&field.from_u64(3), &b);
        let mut curve = Self {
            field,
            a,
            b,
            b3,
            generator: AffinePoint::IDENTITY,
            order_bits,
        };
        curve.generator = curve.point(gx, gy)?;
        Ok(curve)
    }

    /// Field the curve is defined over.
    pub fn field(&self) -> &MontyField {
        &self.field
    }

    /// The `a` coefficient.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// The `b` coefficient.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Bit length of the order of `G`.
    ///
    /// Bounds the number of windows processed by [`WeierstrassCurve::mul`].
    pub fn order_bits(&self) -> u32 {
        self.order_bits
    }

    /// `x³ + ax + b`
    fn rhs(&self, x: &FieldElement) -> FieldElement {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b)
    }

    /// Does `(x, y)` satisfy the curve equation?
    fn satisfies(&self, x: &FieldElement, y: &FieldElement) -> subtle::Choice {
        self.field.square(y).ct_eq(&self.rhs(x))
    }
}
