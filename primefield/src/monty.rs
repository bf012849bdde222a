//! Field elements modulo an odd prime known only at runtime, implemented using
//! `crypto-bigint`'s [`MontyForm`].

use crate::{Error, MAX_BYTES, Result, U256, encoding};
use bigint::{
    Odd, ctutils,
    modular::{FixedMontyForm as MontyForm, FixedMontyParams as MontyParams},
};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

type Form = MontyForm<{ U256::LIMBS }>;

/// Element of a [`MontyField`], held in Montgomery form `x·R mod m` with `R = 2^256`.
///
/// Elements carry no reference to their field: mixing elements of two
/// different fields is a logic error the type system does not catch.
#[derive(Clone, Copy, Default, Eq)]
pub struct FieldElement {
    montgomery: U256,
}

impl FieldElement {
    /// Additive identity. Zero is its own Montgomery form in every field.
    pub const ZERO: Self = Self {
        montgomery: U256::ZERO,
    };

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        ConstantTimeEq::ct_eq(&self.montgomery, &U256::ZERO)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldElement").finish_non_exhaustive()
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            montgomery: U256::conditional_select(&a.montgomery, &b.montgomery, choice),
        }
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        ConstantTimeEq::ct_eq(&self.montgomery, &other.montgomery)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl DefaultIsZeroes for FieldElement {}

/// Arithmetic context for the integers modulo an odd prime `m`.
#[derive(Clone)]
pub struct MontyField {
    params: MontyParams<{ U256::LIMBS }>,
    modulus: U256,
    bits: u32,
}

impl MontyField {
    /// Build the arithmetic context for the modulus encoded big-endian in `modulus`.
    ///
    /// The modulus must be odd, at least 3 and at most
    /// [`MAX_BITS`](crate::MAX_BITS) wide. Primality is not checked: inversion is only correct for prime moduli.
    pub fn new(modulus: &[u8]) -> Result<Self> {
        let modulus = encoding::uint_from_be_bytes(modulus).ok_or(Error::InvalidModulus)?;
        let bits = modulus.bits_vartime();
        if bits < 2 {
            return Err(Error::InvalidModulus);
        }

        let odd = Option::<Odd<U256>>::from(Odd::new(modulus)).ok_or(Error::InvalidModulus)?;

        Ok(Self {
            params: MontyParams::new(odd),
            modulus,
            bits,
        })
    }

    /// The modulus `m`.
    pub fn modulus(&self) -> &U256 {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Length in bytes of the big-endian encoding of an element.
    pub fn byte_len(&self) -> usize {
        self.bits.div_ceil(8) as usize
    }

    /// Zero element.
    pub fn zero(&self) -> FieldElement {
        FieldElement::ZERO
    }

    /// Multiplicative identity.
    pub fn one(&self) -> FieldElement {
        Self::element(&Form::one(&self.params))
    }

    /// Element with the small integer value `n`.
    pub fn from_u64(&self, n: u64) -> FieldElement {
        self.reduce(&U256::from_u64(n))
    }

    /// Element for the integer `x`, or `None` if `x >= m`.
    pub fn from_uint(&self, x: &U256) -> CtOption<FieldElement> {
        let in_range: Choice = ctutils::CtLt::ct_lt(x, &self.modulus).into();
        CtOption::new(self.reduce(x), in_range)
    }

    /// Element for `x mod m`; accepts any 256-bit integer.
    pub fn reduce(&self, x: &U256) -> FieldElement {
        Self::element(&Form::new(x, &self.params))
    }

    /// Decode the canonical big-endian encoding of an element.
    ///
    /// Returns `None` unless `bytes` is exactly [`Self::byte_len`] long and
    /// encodes an integer below `m`.
    pub fn from_be_bytes(&self, bytes: &[u8]) -> CtOption<FieldElement> {
        match encoding::uint_from_be_bytes(bytes) {
            Some(x) if bytes.len() == self.byte_len() => self.from_uint(&x),
            _ => CtOption::new(FieldElement::ZERO, Choice::from(0)),
        }
    }

    /// Decode a big-endian integer of exactly [`Self::byte_len`] bytes,
    /// without reducing it.
    pub fn decode_uint(&self, bytes: &[u8]) -> Result<U256> {
        self.check_len(bytes.len())?;
        let mut padded = [0u8; MAX_BYTES];
        padded[MAX_BYTES - bytes.len()..].copy_from_slice(bytes);
        Ok(U256::from_be_slice(&padded))
    }

    /// Canonical integer value of `a`.
    pub fn to_uint(&self, a: &FieldElement) -> U256 {
        self.form(a).retrieve()
    }

    /// Write the big-endian encoding of `a` into `out`, which must be exactly
    /// [`Self::byte_len`] bytes long.
    pub fn write_be_bytes(&self, a: &FieldElement, out: &mut [u8]) -> Result<()> {
        self.check_len(out.len())?;
        encoding::uint_to_be_bytes(&self.to_uint(a), out);
        Ok(())
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if actual == self.byte_len() {
            Ok(())
        } else {
            Err(Error::Length {
                expected: self.byte_len(),
                actual,
            })
        }
    }

    /// Returns `a + b mod m`.
    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        Self::element(&(&self.form(a) + &self.form(b)))
    }

    /// Returns `2a mod m`.
    pub fn double(&self, a: &FieldElement) -> FieldElement {
        self.add(a, a)
    }

    /// Returns `a - b mod m`.
    pub fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        Self::element(&(&self.form(a) - &self.form(b)))
    }

    /// Returns `-a mod m`.
    pub fn neg(&self, a: &FieldElement) -> FieldElement {
        Self::element(&-self.form(a))
    }

    /// Returns `a * b mod m`.
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        Self::element(&(&self.form(a) * &self.form(b)))
    }

    /// Returns `a^2 mod m`.
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        self.mul(a, a)
    }

    /// Returns `a^exp mod m`.
    ///
    /// **This operation is variable time with respect to the exponent.**
    /// If the exponent is fixed, this operation is effectively constant time.
    pub fn pow_vartime(&self, a: &FieldElement, exp: &U256) -> FieldElement {
        let mut res = self.one();
        for i in (0..exp.bits_vartime()).rev() {
            res = self.square(&res);
            if exp.bit_vartime(i) {
                res = self.mul(&res, a);
            }
        }
        res
    }

    /// Returns the multiplicative inverse of `a`.
    ///
    /// Runs in time independent of `a`. Fails with [`Error::NotInvertible`]
    /// for zero.
    pub fn invert(&self, a: &FieldElement) -> Result<FieldElement> {
        let inverse = CtOption::from(self.form(a).invert());
        Option::<Form>::from(inverse)
            .map(|inv| Self::element(&inv))
            .ok_or(Error::NotInvertible)
    }

    fn form(&self, a: &FieldElement) -> Form {
        Form::from_montgomery(a.montgomery, &self.params)
    }

    fn element(form: &Form) -> FieldElement {
        FieldElement {
            montgomery: *form.as_montgomery(),
        }
    }
}

impl fmt::Debug for MontyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MontyField")
            .field("modulus", &self.modulus)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MontyField {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Eq for MontyField {}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use proptest::prelude::*;

    const P256: [u8; 32] =
        hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    const P256_M1: [u8; 32] =
        hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffe");

    fn p256() -> MontyField {
        MontyField::new(&P256).unwrap()
    }

    fn uint(bytes: &[u8]) -> U256 {
        encoding::uint_from_be_bytes(bytes).unwrap()
    }

    #[test]
    fn rejects_bad_moduli() {
        assert_eq!(MontyField::new(&[0x10]), Err(Error::InvalidModulus));
        assert_eq!(MontyField::new(&[0x01]), Err(Error::InvalidModulus));
        assert_eq!(MontyField::new(&[]), Err(Error::InvalidModulus));
        assert_eq!(MontyField::new(&[0xff; 33]), Err(Error::InvalidModulus));
        assert!(MontyField::new(&[0x03]).is_ok());
    }

    #[test]
    fn lengths() {
        let field = p256();
        assert_eq!(field.bits(), 256);
        assert_eq!(field.byte_len(), 32);
        assert_eq!(field.modulus(), &uint(&P256));

        let small = MontyField::new(&hex!("db7c2abf62e35e668076bead208b")).unwrap();
        assert_eq!(small.bits(), 112);
        assert_eq!(small.byte_len(), 14);
    }

    #[test]
    fn small_field() {
        let f7 = MontyField::new(&[7]).unwrap();
        let three = f7.from_u64(3);
        let five = f7.from_u64(5);

        assert_eq!(f7.to_uint(&f7.mul(&three, &five)), U256::ONE);
        assert_eq!(f7.invert(&three).unwrap(), five);
        assert_eq!(f7.to_uint(&f7.add(&three, &five)), U256::ONE);
        assert_eq!(f7.to_uint(&f7.sub(&three, &five)), U256::from_u64(5));
        assert_eq!(f7.to_uint(&f7.neg(&three)), U256::from_u64(4));
        assert_eq!(f7.from_u64(9), f7.from_u64(2));
        assert_eq!(f7.pow_vartime(&three, &U256::from_u64(6)), f7.one());
        assert_eq!(f7.pow_vartime(&three, &U256::ZERO), f7.one());
    }

    #[test]
    fn canonical_decoding() {
        let field = p256();
        assert!(bool::from(field.from_be_bytes(&P256).is_none()));
        assert!(bool::from(field.from_be_bytes(&P256_M1).is_some()));
        assert!(bool::from(field.from_be_bytes(&P256_M1[1..]).is_none()));
        assert!(bool::from(field.from_uint(&uint(&P256)).is_none()));

        let x = field.from_be_bytes(&P256_M1).unwrap();
        let mut out = [0u8; 32];
        field.write_be_bytes(&x, &mut out).unwrap();
        assert_eq!(out, P256_M1);

        assert_eq!(
            field.write_be_bytes(&x, &mut out[1..]),
            Err(Error::Length {
                expected: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn decode_uint_is_not_reduced() {
        let field = MontyField::new(&hex!("db7c2abf62e35e668076bead208b")).unwrap();
        let above = field.decode_uint(&[0xff; 14]).unwrap();
        assert_eq!(above, uint(&[0xff; 14]));
        assert_eq!(
            field.decode_uint(&[0xff; 15]),
            Err(Error::Length {
                expected: 14,
                actual: 15
            })
        );
    }

    #[test]
    fn minus_one_squared_is_one() {
        let field = p256();
        let minus_one = field.from_be_bytes(&P256_M1).unwrap();
        assert_eq!(minus_one, field.neg(&field.one()));
        assert_eq!(field.square(&minus_one), field.one());
        assert_eq!(field.add(&minus_one, &field.one()), field.zero());
    }

    #[test]
    fn reduce_above_modulus() {
        let field = p256();
        assert_eq!(field.reduce(field.modulus()), field.zero());

        let m_plus_5 = uint(&hex!(
            "ffffffff00000001000000000000000000000001000000000000000000000004"
        ));
        assert_eq!(field.reduce(&m_plus_5), field.from_u64(5));

        // 2^256 - 1 = 2^224 - 2^192 - 2^96 (mod p)
        let all_ones = field.reduce(&U256::MAX);
        let expected = uint(&hex!(
            "00000000fffffffeffffffffffffffffffffffff000000000000000000000000"
        ));
        assert_eq!(field.to_uint(&all_ones), expected);
    }

    #[test]
    fn invert_zero_fails() {
        let field = p256();
        assert_eq!(field.invert(&field.zero()), Err(Error::NotInvertible));
    }

    #[test]
    fn debug_output_is_redacted() {
        let field = p256();
        let secret = field.from_u64(0x1234_5678);
        let rendered = std::format!("{secret:?}");
        assert_eq!(rendered, "FieldElement { .. }");
        assert!(!rendered.contains("12345678"));
    }

    fn element() -> impl Strategy<Value = FieldElement> {
        any::<[u8; 32]>().prop_map(|bytes| p256().reduce(&U256::from_be_slice(&bytes)))
    }

    proptest! {
        #[test]
        fn mul_distributes_over_add(a in element(), b in element(), c in element()) {
            let field = p256();
            let lhs = field.mul(&a, &field.add(&b, &c));
            let rhs = field.add(&field.mul(&a, &b), &field.mul(&a, &c));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn sub_then_add(a in element(), b in element()) {
            let field = p256();
            prop_assert_eq!(field.add(&field.sub(&a, &b), &b), a);
        }

        #[test]
        fn invert_is_inverse(a in element()) {
            let field = p256();
            prop_assume!(!bool::from(a.is_zero()));
            let inv = field.invert(&a).unwrap();
            prop_assert_eq!(field.mul(&a, &inv), field.one());
        }

        #[test]
        fn uint_round_trip(bytes in any::<[u8; 32]>()) {
            let field = p256();
            let a = field.reduce(&U256::from_be_slice(&bytes));
            prop_assert_eq!(field.reduce(&field.to_uint(&a)), a);
        }
    }
}
