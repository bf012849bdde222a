//! Key pair generation from a caller-supplied secret scalar.

use crate::{CurveParameters, Error, Result};
use primefield::U256;
use primeorder::AffinePoint;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret scalar in `[1, n - 1]`, wiped from memory on drop.
///
/// Used for both long-term signing keys and per-signature ephemeral secrets.
pub struct SecretScalar {
    value: U256,
}

impl SecretScalar {
    /// Decode a big-endian scalar of exactly
    /// [`CurveParameters::order_bytes`] bytes.
    ///
    /// Fails with [`Error::InvalidScalar`] if the value is zero or not below
    /// the group order.
    pub fn from_be_bytes(params: &CurveParameters, bytes: &[u8]) -> Result<Self> {
        let scalar = Self {
            value: params.scalars().decode_uint(bytes)?,
        };

        if bool::from(scalar.in_range(params)) {
            Ok(scalar)
        } else {
            Err(Error::InvalidScalar)
        }
    }

    /// Is `1 <= self < n`?
    fn in_range(&self, params: &CurveParameters) -> Choice {
        let nonzero = !ConstantTimeEq::ct_eq(&self.value, &U256::ZERO);
        nonzero & params.scalars().from_uint(&self.value).is_some()
    }

    pub(crate) fn as_uint(&self) -> &U256 {
        &self.value
    }
}

impl Drop for SecretScalar {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl ZeroizeOnDrop for SecretScalar {}

/// Compute the public key `Q = sk·G` for the big-endian secret `sk`.
///
/// Runs in constant time with respect to `sk`.
pub fn generate(params: &CurveParameters, sk: &[u8]) -> Result<AffinePoint> {
    let sk = SecretScalar::from_be_bytes(params, sk)?;
    Ok(params.curve().mul_base(sk.as_uint()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use hex_literal::hex;

    #[test]
    fn generate_one_is_generator() {
        for name in registry::supported_curves() {
            let params = registry::lookup(name).unwrap();
            let mut one = [0u8; 32];
            let len = params.order_bytes();
            one[len - 1] = 1;

            let q = generate(&params, &one[..len]).unwrap();
            assert_eq!(&q, params.curve().generator(), "{name}");
        }
    }

    #[test]
    fn rejects_out_of_range_scalars() {
        let params = registry::lookup("secp192r1").unwrap();
        let n = hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831");

        assert!(matches!(generate(&params, &[0; 24]), Err(Error::InvalidScalar)));
        assert!(matches!(generate(&params, &n), Err(Error::InvalidScalar)));
        assert!(matches!(generate(&params, &[0xff; 24]), Err(Error::InvalidScalar)));

        let mut n_minus_1 = n;
        n_minus_1[23] -= 1;
        assert!(generate(&params, &n_minus_1).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        let params = registry::lookup("secp160r1").unwrap();
        assert!(matches!(
            generate(&params, &[1; 20]),
            Err(Error::LengthMismatch {
                expected: 21,
                actual: 20
            })
        ));
    }

    #[test]
    fn fips_public_key() {
        let params = registry::lookup("secp192r1").unwrap();
        let q = generate(
            &params,
            &hex!("0017899949d02b55f9556846411cc9de512c6f16ecdeb1c4"),
        )
        .unwrap();

        let expected = params
            .curve()
            .point_from_be_bytes(
                &hex!("14f69738599689f5706ab71343becc886ef1569a2d1137fe"),
                &hex!("0cf5a433909e33217fb4df6b9593f71d43fb1c2a5653b763"),
            )
            .unwrap();
        assert_eq!(q, expected);
    }
}
