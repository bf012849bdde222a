//! Domain parameters loaded for a session.

use crate::{Error, Result, registry::CurveEntry};
use primefield::{FieldElement, MontyField, encoding};
use primeorder::WeierstrassCurve;

/// Domain parameters of one curve, ready for arithmetic.
///
/// Holds the curve over its coordinate field together with a second,
/// independent field context for scalars modulo the group order `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    name: &'static str,
    curve: WeierstrassCurve,
    scalars: MontyField,
    cofactor: u32,
}

impl CurveParameters {
    pub(crate) fn from_entry(entry: &'static CurveEntry) -> Result<Self> {
        let field = MontyField::new(entry.p)?;
        let scalars = MontyField::new(entry.n)?;

        let decode = |bytes: &[u8]| -> Result<FieldElement> {
            Option::<FieldElement>::from(field.from_be_bytes(bytes))
                .ok_or(Error::UnsupportedCurve)
        };
        let a = decode(entry.a)?;
        let b = decode(entry.b)?;
        let gx = decode(entry.gx)?;
        let gy = decode(entry.gy)?;

        let order_bits = scalars.bits();
        let curve = WeierstrassCurve::new(field, a, b, gx, gy, order_bits)?;

        Ok(Self {
            name: entry.name,
            curve,
            scalars,
            cofactor: entry.cofactor,
        })
    }

    /// Registry name of the curve.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The curve over its coordinate field.
    pub fn curve(&self) -> &WeierstrassCurve {
        &self.curve
    }

    /// Coordinate field, modulo `p`.
    pub fn field(&self) -> &MontyField {
        self.curve.field()
    }

    /// Scalar field, modulo the group order `n`.
    pub fn scalars(&self) -> &MontyField {
        &self.scalars
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// Bit length of `p`.
    pub fn prime_bits(&self) -> u32 {
        self.field().bits()
    }

    /// Byte length of `p`; also the width of an encoded coordinate.
    pub fn prime_bytes(&self) -> usize {
        self.field().byte_len()
    }

    /// Bit length of `n`.
    pub fn order_bits(&self) -> u32 {
        self.scalars.bits()
    }

    /// Byte length of `n`; also the width of an encoded scalar.
    pub fn order_bytes(&self) -> usize {
        self.scalars.byte_len()
    }

    /// Write `p` big-endian into `out`, which must be [`Self::prime_bytes`] long.
    pub fn write_prime(&self, out: &mut [u8]) -> Result<()> {
        write_modulus(self.field(), out)
    }

    /// Write `n` big-endian into `out`, which must be [`Self::order_bytes`] long.
    pub fn write_order(&self, out: &mut [u8]) -> Result<()> {
        write_modulus(&self.scalars, out)
    }
}

fn write_modulus(field: &MontyField, out: &mut [u8]) -> Result<()> {
    check_length(field.byte_len(), out.len())?;
    encoding::uint_to_be_bytes(field.modulus(), out);
    Ok(())
}

/// Fails with [`Error::LengthMismatch`] unless `actual == expected`.
pub(crate) fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, actual })
    }
}
