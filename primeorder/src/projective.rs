//! Projective points and scalar multiplication.

use crate::{AffinePoint, WeierstrassCurve};
use core::fmt;
use primefield::{FieldElement, MAX_BITS, U256, Word};
use subtle::{Choice, ConditionallySelectable};

/// Point on a short Weierstrass curve in homogeneous projective coordinates.
///
/// `(X : Y : Z)` represents the affine point `(X/Z, Y/Z)`; any point with
/// `Z = 0` is the point at infinity.
#[derive(Clone, Copy)]
pub struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl ProjectivePoint {
    /// Is this the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    pub(crate) fn is_identity_vartime(&self) -> bool {
        self.is_identity().into()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl fmt::Debug for ProjectivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectivePoint")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl WeierstrassCurve {
    /// The point at infinity, `(0 : 1 : 0)`.
    pub fn identity(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: FieldElement::ZERO,
            y: self.field.one(),
            z: FieldElement::ZERO,
        }
    }

    /// Lift an affine point to projective coordinates.
    pub fn to_projective(&self, point: &AffinePoint) -> ProjectivePoint {
        let lifted = ProjectivePoint {
            x: point.x,
            y: point.y,
            z: self.field.one(),
        };
        ProjectivePoint::conditional_select(&lifted, &self.identity(), point.is_identity())
    }

    /// Returns the affine representation of `point`.
    pub fn to_affine(&self, point: &ProjectivePoint) -> AffinePoint {
        let f = &self.field;
        f.invert(&point.z)
            .map(|zinv| AffinePoint {
                x: f.mul(&point.x, &zinv),
                y: f.mul(&point.y, &zinv),
                infinity: 0,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Returns `[k] point` in constant time.
    ///
    /// Correct for every point on the curve, including points outside the
    /// subgroup generated by `G` on curves with an even cofactor. `k` is
    /// expected to be reduced modulo the group order; bits beyond the order's
    /// byte length are ignored.
    pub fn mul(&self, k: &U256, point: &AffinePoint) -> AffinePoint {
        let base = self.to_projective(point);
        self.to_affine(&self.mul_windowed(k, &base, Self::add_ct, Self::double_ct))
    }

    /// Returns `[k] G` in constant time.
    ///
    /// Every multiple of `G` has odd order, so this can use the complete
    /// formulas, which are cheaper than the ones behind [`Self::mul`].
    pub fn mul_base(&self, k: &U256) -> AffinePoint {
        let base = self.to_projective(&self.generator);
        self.to_affine(&self.mul_windowed(
            k,
            &base,
            Self::add_complete,
            Self::double_complete,
        ))
    }

    /// Fixed 4-bit window multiplication covering [`Self::order_bits`] bits,
    /// so the sequence of operations depends only on the curve.
    fn mul_windowed(
        &self,
        k: &U256,
        base: &ProjectivePoint,
        add: fn(&Self, &ProjectivePoint, &ProjectivePoint) -> ProjectivePoint,
        double: fn(&Self, &ProjectivePoint) -> ProjectivePoint,
    ) -> ProjectivePoint {
        let identity = self.identity();

        let mut pc = [identity; 16];
        pc[1] = *base;

        for i in 2..16 {
            pc[i] = if i % 2 == 0 {
                double(self, &pc[i / 2])
            } else {
                add(self, &pc[i - 1], base)
            };
        }

        let words = k.as_words();
        let mut q = identity;
        let mut pos = (self.order_bits.clamp(1, MAX_BITS).div_ceil(8) * 8) as usize - 4;

        loop {
            let slot = (words[pos / Word::BITS as usize] >> (pos % Word::BITS as usize)) & 0xf;

            let mut t = identity;

            for (i, entry) in pc.iter().enumerate().skip(1) {
                t.conditional_assign(
                    entry,
                    Choice::from(((slot as usize ^ i).wrapping_sub(1) >> 8) as u8 & 1),
                );
            }

            q = add(self, &q, &t);

            if pos == 0 {
                break;
            }

            for _ in 0..4 {
                q = double(self, &q);
            }
            pos -= 4;
        }

        q
    }

    /// Returns `[k] point` by double-and-add.
    ///
    /// **Variable time**: only use with public scalars. Correct for every
    /// point on the curve.
    pub fn mul_vartime(&self, k: &U256, point: &AffinePoint) -> AffinePoint {
        let base = self.to_projective(point);
        let mut q = self.identity();

        for i in (0..k.bits_vartime()).rev() {
            q = self.double_vartime(&q);
            if k.bit_vartime(i) {
                q = self.add_vartime(&q, &base);
            }
        }

        self.to_affine(&q)
    }

    /// Returns `[u1] p + [u2] q` using Shamir's trick.
    ///
    /// **Variable time**: only use with public scalars. Correct for every
    /// pair of points on the curve.
    pub fn lincomb_vartime(
        &self,
        u1: &U256,
        p: &AffinePoint,
        u2: &U256,
        q: &AffinePoint,
    ) -> AffinePoint {
        let p = self.to_projective(p);
        let q = self.to_projective(q);
        let pq = self.add_vartime(&p, &q);
        let mut acc = self.identity();

        let bits = u1.bits_vartime().max(u2.bits_vartime());
        for i in (0..bits).rev() {
            acc = self.double_vartime(&acc);
            match (u1.bit_vartime(i), u2.bit_vartime(i)) {
                (true, true) => acc = self.add_vartime(&acc, &pq),
                (true, false) => acc = self.add_vartime(&acc, &p),
                (false, true) => acc = self.add_vartime(&acc, &q),
                (false, false) => (),
            }
        }

        self.to_affine(&acc)
    }
}
