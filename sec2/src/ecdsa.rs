//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing takes the ephemeral secret `ek` from the caller instead of drawing
//! it from a random number generator. Reusing an `ek` for two different
//! messages, or letting it become known, reveals the signing key: callers
//! must derive it from a CSPRNG or deterministically per
//! [RFC 6979](https://www.rfc-editor.org/rfc/rfc6979).

use crate::{CurveParameters, Error, Result, keygen::SecretScalar, params::check_length};
use primefield::{FieldElement, U256, encoding};
use zeroize::Zeroizing;

/// ECDSA signature `(r, s)`, both in `[1, n - 1]` when produced by [`sign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    r: U256,
    s: U256,
}

impl Signature {
    /// Decode `r` and `s`, each exactly [`CurveParameters::order_bytes`] long.
    ///
    /// Values are not range checked here; [`verify`] rejects out-of-range
    /// components.
    pub fn from_be_bytes(params: &CurveParameters, r: &[u8], s: &[u8]) -> Result<Self> {
        let scalars = params.scalars();
        Ok(Self {
            r: scalars.decode_uint(r)?,
            s: scalars.decode_uint(s)?,
        })
    }

    /// The `r` component.
    pub fn r(&self) -> &U256 {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &U256 {
        &self.s
    }

    /// Write `r` and `s` big-endian, each into a buffer of exactly
    /// [`CurveParameters::order_bytes`] bytes.
    pub fn write_be_bytes(
        &self,
        params: &CurveParameters,
        r_out: &mut [u8],
        s_out: &mut [u8],
    ) -> Result<()> {
        let len = params.order_bytes();
        check_length(len, r_out.len())?;
        check_length(len, s_out.len())?;

        encoding::uint_to_be_bytes(&self.r, r_out);
        encoding::uint_to_be_bytes(&self.s, s_out);
        Ok(())
    }

    /// Return the equivalent signature with `s <= n / 2`.
    ///
    /// `(r, s)` and `(r, n - s)` are both valid; normalizing removes that
    /// malleability.
    pub fn normalize_s(&self, params: &CurveParameters) -> Self {
        // n is odd, so s > n / 2 exactly when s > n - s.
        let scalars = params.scalars();
        let neg_s = scalars.to_uint(&scalars.neg(&scalars.reduce(&self.s)));

        if neg_s < self.s {
            Self {
                r: self.r,
                s: neg_s,
            }
        } else {
            *self
        }
    }
}

/// Sign the message digest `hash` with secret key `sk` and ephemeral secret
/// `ek`.
///
/// Deterministic in `(hash, ek, sk)`. Fails with
/// [`Error::ZeroSignatureComponent`] when `r` or `s` comes out zero; no retry
/// is attempted since `ek` belongs to the caller.
pub fn sign(
    params: &CurveParameters,
    hash: &[u8],
    ek: &SecretScalar,
    sk: &SecretScalar,
) -> Result<Signature> {
    let curve = params.curve();
    let scalars = params.scalars();
    let e = hash_to_scalar(params, hash)?;

    // r = (ek·G).x mod n
    let big_r = curve.mul_base(ek.as_uint());
    let r = scalars.reduce(&curve.field().to_uint(&big_r.x()));
    if bool::from(r.is_zero()) {
        return Err(Error::ZeroSignatureComponent);
    }

    // s = ek⁻¹·(e + r·sk) mod n
    let k = Zeroizing::new(scalars.reduce(ek.as_uint()));
    let d = Zeroizing::new(scalars.reduce(sk.as_uint()));
    let k_inv = Zeroizing::new(scalars.invert(&k)?);
    let s = scalars.mul(&k_inv, &scalars.add(&e, &scalars.mul(&r, &d)));
    if bool::from(s.is_zero()) {
        return Err(Error::ZeroSignatureComponent);
    }

    Ok(Signature {
        r: scalars.to_uint(&r),
        s: scalars.to_uint(&s),
    })
}

/// Verify `signature` over the message digest `hash` against the public key
/// `(qx, qy)`, each coordinate exactly [`CurveParameters::prime_bytes`] long.
///
/// Returns `Ok(false)` for a signature that does not verify, including one
/// whose components are out of range. A public key that is not on the curve
/// is an [`Error::PointNotOnCurve`].
pub fn verify(
    params: &CurveParameters,
    hash: &[u8],
    signature: &Signature,
    qx: &[u8],
    qy: &[u8],
) -> Result<bool> {
    let curve = params.curve();
    let scalars = params.scalars();

    let (r, s) = match (
        Option::<FieldElement>::from(scalars.from_uint(&signature.r)),
        Option::<FieldElement>::from(scalars.from_uint(&signature.s)),
    ) {
        (Some(r), Some(s)) if !bool::from(r.is_zero() | s.is_zero()) => (r, s),
        _ => {
            tracing::trace!(curve = params.name(), "signature component out of range");
            return Ok(false);
        }
    };

    let q = curve.point_from_be_bytes(qx, qy)?;
    let e = hash_to_scalar(params, hash)?;

    let w = scalars.invert(&s)?;
    let u1 = scalars.to_uint(&scalars.mul(&e, &w));
    let u2 = scalars.to_uint(&scalars.mul(&r, &w));
    let point = curve.lincomb_vartime(&u1, curve.generator(), &u2, &q);

    if bool::from(point.is_identity()) {
        tracing::trace!(curve = params.name(), "u1·G + u2·Q is the identity");
        return Ok(false);
    }

    let x = scalars.reduce(&curve.field().to_uint(&point.x()));
    let valid = x == r;
    if !valid {
        tracing::trace!(curve = params.name(), "signature mismatch");
    }
    Ok(valid)
}

/// Convert a message digest to a scalar as in SEC 1 §4.1.3 step 5.
///
/// Keeps the leftmost `bitlen(n)` bits of `hash`, then reduces modulo `n`.
fn hash_to_scalar(params: &CurveParameters, hash: &[u8]) -> Result<FieldElement> {
    let scalars = params.scalars();
    let too_short = Error::LengthMismatch {
        expected: scalars.byte_len(),
        actual: hash.len(),
    };
    if hash.is_empty() {
        return Err(too_short);
    }

    let hash = &hash[..hash.len().min(scalars.byte_len())];
    let leading = encoding::uint_from_be_bytes(hash).ok_or(too_short)?;
    let excess = (hash.len() as u32 * 8).saturating_sub(scalars.bits());
    Ok(scalars.reduce(&leading.wrapping_shr_vartime(excess)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        keygen, registry,
        test_vectors::ecdsa::{ECDSA_TEST_VECTORS, SECP256K1_TEST_VECTOR, TestVector},
    };
    use hex_literal::hex;

    fn scalar(params: &CurveParameters, bytes: &[u8]) -> SecretScalar {
        SecretScalar::from_be_bytes(params, bytes).unwrap()
    }

    fn check_vector(params: &CurveParameters, vector: &TestVector) {
        let d = scalar(params, vector.d);
        let k = scalar(params, vector.k);

        let q = keygen::generate(params, vector.d).unwrap();
        let expected_q = params
            .curve()
            .point_from_be_bytes(vector.q_x, vector.q_y)
            .unwrap();
        assert_eq!(q, expected_q);

        let signature = sign(params, vector.m, &k, &d).unwrap();
        let expected = Signature::from_be_bytes(params, vector.r, vector.s).unwrap();
        assert_eq!(signature, expected);

        assert!(verify(params, vector.m, &signature, vector.q_x, vector.q_y).unwrap());
    }

    #[test]
    fn p192_fips_vectors() {
        let params = registry::lookup("secp192r1").unwrap();
        for vector in ECDSA_TEST_VECTORS {
            check_vector(&params, vector);
        }
    }

    #[test]
    fn secp256k1_vector() {
        let params = registry::lookup("secp256k1").unwrap();
        check_vector(&params, &SECP256K1_TEST_VECTOR);
    }

    #[test]
    fn normalize_s() {
        let params = registry::lookup("secp256k1").unwrap();
        let vector = &SECP256K1_TEST_VECTOR;
        let signature = Signature::from_be_bytes(&params, vector.r, vector.s).unwrap();

        // Already low-S.
        assert_eq!(signature.normalize_s(&params), signature);

        let scalars = params.scalars();
        let high_s = scalars.neg(&scalars.reduce(signature.s()));
        let high = Signature {
            r: signature.r,
            s: scalars.to_uint(&high_s),
        };
        assert!(verify(&params, vector.m, &high, vector.q_x, vector.q_y).unwrap());
        assert_eq!(high.normalize_s(&params), signature);
    }

    #[test]
    fn decoding_reports_the_offending_component() {
        let params = registry::lookup("secp192r1").unwrap();
        let vector = &ECDSA_TEST_VECTORS[0];

        assert_eq!(
            Signature::from_be_bytes(&params, &vector.r[1..], vector.s),
            Err(Error::LengthMismatch {
                expected: 24,
                actual: 23
            })
        );
        assert_eq!(
            Signature::from_be_bytes(&params, vector.r, &[0; 25]),
            Err(Error::LengthMismatch {
                expected: 24,
                actual: 25
            })
        );

        let signature = Signature::from_be_bytes(&params, vector.r, vector.s).unwrap();
        let mut r = [0u8; 24];
        let mut s = [0u8; 24];
        signature.write_be_bytes(&params, &mut r, &mut s).unwrap();
        assert_eq!((&r[..], &s[..]), (vector.r, vector.s));
    }

    #[test]
    fn out_of_range_components_do_not_verify() {
        let params = registry::lookup("secp192r1").unwrap();
        let vector = &ECDSA_TEST_VECTORS[0];
        let n = hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831");

        for (r, s) in [
            (&[0u8; 24][..], vector.s),
            (vector.r, &[0u8; 24][..]),
            (&n[..], vector.s),
            (vector.r, &n[..]),
        ] {
            let signature = Signature::from_be_bytes(&params, r, s).unwrap();
            assert!(!verify(&params, vector.m, &signature, vector.q_x, vector.q_y).unwrap());
        }
    }

    #[test]
    fn range_is_checked_before_public_key() {
        let params = registry::lookup("secp192r1").unwrap();
        let zero = Signature::from_be_bytes(&params, &[0; 24], &[0; 24]).unwrap();
        assert_eq!(verify(&params, &[1], &zero, &[0; 24], &[0; 24]), Ok(false));
    }

    #[test]
    fn rejects_public_key_off_curve() {
        let params = registry::lookup("secp192r1").unwrap();
        let vector = &ECDSA_TEST_VECTORS[0];
        let signature = Signature::from_be_bytes(&params, vector.r, vector.s).unwrap();
        let mut qy = [0u8; 24];
        qy.copy_from_slice(vector.q_y);
        qy[23] ^= 1;

        assert_eq!(
            verify(&params, vector.m, &signature, vector.q_x, &qy),
            Err(Error::PointNotOnCurve)
        );
    }

    #[test]
    fn empty_hash_is_rejected() {
        let params = registry::lookup("secp256r1").unwrap();
        let mut one = [0u8; 32];
        one[31] = 1;
        let one = scalar(&params, &one);
        assert_eq!(
            sign(&params, &[], &one, &one),
            Err(Error::LengthMismatch {
                expected: 32,
                actual: 0
            })
        );
    }

    #[test]
    fn long_hash_is_truncated_to_order_length() {
        // secp160k1: n has 161 bits, so a 32-byte digest keeps its leading
        // 21 bytes shifted right by 7 bits.
        let params = registry::lookup("secp160k1").unwrap();
        let digest = hex!("ffeeddccbbaa99887766554433221100ffeeddccbbaa99887766554433221100");
        let e = hash_to_scalar(&params, &digest).unwrap();

        // (digest[..21] >> 7) mod n
        let expected = params
            .scalars()
            .from_be_bytes(&hex!("00ffddbb9977553310eecaf18e4f64766735c704e6"))
            .unwrap();
        assert_eq!(e, expected);

        // Short digests are taken as-is.
        let e = hash_to_scalar(&params, &[0x12, 0x34]).unwrap();
        assert_eq!(e, params.scalars().from_u64(0x1234));
    }

    #[test]
    fn small_scalars_sign_and_verify() {
        let params = registry::lookup("secp112r1").unwrap();
        let ek = scalar(&params, &hex!("0000000000000000000000000002"));
        let sk = scalar(&params, &hex!("0000000000000000000000000003"));
        let signature = sign(&params, &[0xab; 14], &ek, &sk).unwrap();

        let q = keygen::generate(&params, &hex!("0000000000000000000000000003")).unwrap();
        let mut qx = [0u8; 14];
        let mut qy = [0u8; 14];
        params.field().write_be_bytes(&q.x(), &mut qx).unwrap();
        params.field().write_be_bytes(&q.y(), &mut qy).unwrap();
        assert!(verify(&params, &[0xab; 14], &signature, &qx, &qy).unwrap());
        assert!(!verify(&params, &[0xab; 13], &signature, &qx, &qy).unwrap());
    }
}
