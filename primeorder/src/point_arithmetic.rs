//! Projective point addition and doubling formulas.
//!
//! - complete formulas from [Renes-Costello-Batina 2015] for an arbitrary
//!   𝒂-coefficient, which never branch and are exception-free for points of
//!   odd order;
//! - the classic homogeneous formulas `add-1998-cmo-2` and `dbl-2007-bl` from
//!   the [Explicit-Formulas Database], with the exceptional cases handled
//!   either by conditional selection (`*_ct`) or by branching (`*_vartime`).
//!   Both variants are correct for every point on the curve, including the
//!   points of order two that exist when the cofactor is even.
//!
//! [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
//! [Explicit-Formulas Database]: https://hyperelliptic.org/EFD/g1p/auto-shortw-projective.html

use crate::{ProjectivePoint, WeierstrassCurve};
use primefield::FieldElement;
use subtle::ConditionallySelectable;

impl WeierstrassCurve {
    /// Implements complete addition for any curve
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 1). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub(crate) fn add_complete(
        &self,
        lhs: &ProjectivePoint,
        rhs: &ProjectivePoint,
    ) -> ProjectivePoint {
        let f = &self.field;
        let (a, b3) = (&self.a, &self.b3);

        let t0 = f.mul(&lhs.x, &rhs.x); // 1
        let t1 = f.mul(&lhs.y, &rhs.y); // 2
        let t2 = f.mul(&lhs.z, &rhs.z); // 3
        let t3 = f.add(&lhs.x, &lhs.y); // 4
        let t4 = f.add(&rhs.x, &rhs.y); // 5
        let t3 = f.mul(&t3, &t4); // 6
        let t4 = f.add(&t0, &t1); // 7
        let t3 = f.sub(&t3, &t4); // 8
        let t4 = f.add(&lhs.x, &lhs.z); // 9
        let t5 = f.add(&rhs.x, &rhs.z); // 10
        let t4 = f.mul(&t4, &t5); // 11
        let t5 = f.add(&t0, &t2); // 12
        let t4 = f.sub(&t4, &t5); // 13
        let t5 = f.add(&lhs.y, &lhs.z); // 14
        let x3 = f.add(&rhs.y, &rhs.z); // 15
        let t5 = f.mul(&t5, &x3); // 16
        let x3 = f.add(&t1, &t2); // 17
        let t5 = f.sub(&t5, &x3); // 18
        let z3 = f.mul(a, &t4); // 19
        let x3 = f.mul(b3, &t2); // 20
        let z3 = f.add(&x3, &z3); // 21
        let x3 = f.sub(&t1, &z3); // 22
        let z3 = f.add(&t1, &z3); // 23
        let y3 = f.mul(&x3, &z3); // 24
        let t1 = f.add(&t0, &t0); // 25
        let t1 = f.add(&t1, &t0); // 26
        let t2 = f.mul(a, &t2); // 27
        let t4 = f.mul(b3, &t4); // 28
        let t1 = f.add(&t1, &t2); // 29
        let t2 = f.sub(&t0, &t2); // 30
        let t2 = f.mul(a, &t2); // 31
        let t4 = f.add(&t4, &t2); // 32
        let t0 = f.mul(&t1, &t4); // 33
        let y3 = f.add(&y3, &t0); // 34
        let t0 = f.mul(&t5, &t4); // 35
        let x3 = f.mul(&t3, &x3); // 36
        let x3 = f.sub(&x3, &t0); // 37
        let t0 = f.mul(&t3, &t1); // 38
        let z3 = f.mul(&t5, &z3); // 39
        let z3 = f.add(&z3, &t0); // 40

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Implements point doubling for curves with any `a`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 3). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub(crate) fn double_complete(&self, point: &ProjectivePoint) -> ProjectivePoint {
        let f = &self.field;
        let (a, b3) = (&self.a, &self.b3);

        let t0 = f.square(&point.x); // 1
        let t1 = f.square(&point.y); // 2
        let t2 = f.square(&point.z); // 3
        let t3 = f.mul(&point.x, &point.y); // 4
        let t3 = f.double(&t3); // 5
        let z3 = f.mul(&point.x, &point.z); // 6
        let z3 = f.double(&z3); // 7
        let x3 = f.mul(a, &z3); // 8
        let y3 = f.mul(b3, &t2); // 9
        let y3 = f.add(&x3, &y3); // 10
        let x3 = f.sub(&t1, &y3); // 11
        let y3 = f.add(&t1, &y3); // 12
        let y3 = f.mul(&x3, &y3); // 13
        let x3 = f.mul(&t3, &x3); // 14
        let z3 = f.mul(b3, &z3); // 15
        let t2 = f.mul(a, &t2); // 16
        let t3 = f.sub(&t0, &t2); // 17
        let t3 = f.mul(a, &t3); // 18
        let t3 = f.add(&t3, &z3); // 19
        let z3 = f.double(&t0); // 20
        let t0 = f.add(&z3, &t0); // 21
        let t0 = f.add(&t0, &t2); // 22
        let t0 = f.mul(&t0, &t3); // 23
        let y3 = f.add(&y3, &t0); // 24
        let t2 = f.mul(&point.y, &point.z); // 25
        let t2 = f.double(&t2); // 26
        let t0 = f.mul(&t2, &t3); // 27
        let x3 = f.sub(&x3, &t0); // 28
        let z3 = f.mul(&t2, &t1); // 29
        let z3 = f.double(&z3); // 30
        let z3 = f.double(&z3); // 31

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `lhs + rhs` for any two points on the curve, in constant time.
    ///
    /// Both the generic sum and the doubling of `lhs` are always computed;
    /// the exceptional cases are resolved by conditional selection.
    pub(crate) fn add_ct(&self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        let (sum, u, v) = self.add_generic(lhs, rhs);
        let doubled = self.double_ct(lhs);
        let same_x = v.is_zero();

        let mut out = ProjectivePoint::conditional_select(&sum, &self.identity(), same_x);
        out.conditional_assign(&doubled, same_x & u.is_zero());
        out.conditional_assign(lhs, rhs.is_identity());
        out.conditional_assign(rhs, lhs.is_identity());
        out
    }

    /// Returns `point + point` for any point on the curve, in constant time.
    pub(crate) fn double_ct(&self, point: &ProjectivePoint) -> ProjectivePoint {
        let doubled = self.double_generic(point);
        let order_le_2 = point.is_identity() | point.y.is_zero();
        ProjectivePoint::conditional_select(&doubled, &self.identity(), order_le_2)
    }

    /// Returns `lhs + rhs` for any two points on the curve.
    ///
    /// **Variable time**: the exceptional cases (either input is the
    /// identity, `lhs = ±rhs`) are detected by branching.
    pub(crate) fn add_vartime(
        &self,
        lhs: &ProjectivePoint,
        rhs: &ProjectivePoint,
    ) -> ProjectivePoint {
        if lhs.is_identity_vartime() {
            return *rhs;
        }
        if rhs.is_identity_vartime() {
            return *lhs;
        }

        let (sum, u, v) = self.add_generic(lhs, rhs);
        if bool::from(v.is_zero()) {
            return if bool::from(u.is_zero()) {
                self.double_vartime(lhs)
            } else {
                self.identity()
            };
        }
        sum
    }

    /// Returns `point + point` for any point on the curve.
    ///
    /// **Variable time**: points of order two are detected by branching.
    pub(crate) fn double_vartime(&self, point: &ProjectivePoint) -> ProjectivePoint {
        if point.is_identity_vartime() || bool::from(point.y.is_zero()) {
            return self.identity();
        }
        self.double_generic(point)
    }

    /// `add-1998-cmo-2`, along with `u = Y2·Z1 - Y1·Z2` and `v = X2·Z1 - X1·Z2`.
    ///
    /// The sum is only meaningful when neither input is the identity and
    /// `v != 0`.
    fn add_generic(
        &self,
        lhs: &ProjectivePoint,
        rhs: &ProjectivePoint,
    ) -> (ProjectivePoint, FieldElement, FieldElement) {
        let f = &self.field;
        let y1z2 = f.mul(&lhs.y, &rhs.z);
        let x1z2 = f.mul(&lhs.x, &rhs.z);
        let u = f.sub(&f.mul(&rhs.y, &lhs.z), &y1z2);
        let v = f.sub(&f.mul(&rhs.x, &lhs.z), &x1z2);

        let z1z2 = f.mul(&lhs.z, &rhs.z);
        let uu = f.square(&u);
        let vv = f.square(&v);
        let vvv = f.mul(&v, &vv);
        let r = f.mul(&vv, &x1z2);
        let a = f.sub(&f.sub(&f.mul(&uu, &z1z2), &vvv), &f.double(&r));

        let sum = ProjectivePoint {
            x: f.mul(&v, &a),
            y: f.sub(&f.mul(&u, &f.sub(&r, &a)), &f.mul(&vvv, &y1z2)),
            z: f.mul(&vvv, &z1z2),
        };
        (sum, u, v)
    }

    /// `dbl-2007-bl`; only meaningful for points of order greater than two.
    fn double_generic(&self, point: &ProjectivePoint) -> ProjectivePoint {
        let f = &self.field;
        let xx = f.square(&point.x);
        let zz = f.square(&point.z);
        let w = f.add(&f.mul(&self.a, &zz), &f.add(&f.double(&xx), &xx));
        let s = f.double(&f.mul(&point.y, &point.z));
        let ss = f.square(&s);
        let sss = f.mul(&s, &ss);
        let r = f.mul(&point.y, &s);
        let rr = f.square(&r);
        let b = f.sub(&f.sub(&f.square(&f.add(&point.x, &r)), &xx), &rr);
        let h = f.sub(&f.square(&w), &f.double(&b));

        ProjectivePoint {
            x: f.mul(&h, &s),
            y: f.sub(&f.mul(&w, &f.sub(&b, &h)), &f.double(&rr)),
            z: sss,
        }
    }
}
