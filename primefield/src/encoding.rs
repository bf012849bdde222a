//! Big-endian encoding of [`U256`] integers whose byte length depends on the
//! modulus in use.

use crate::{MAX_BYTES, U256};
use bigint::ArrayEncoding;

/// Decode a big-endian integer of at most [`MAX_BYTES`] bytes.
///
/// Returns `None` if `bytes` is longer than that.
pub fn uint_from_be_bytes(bytes: &[u8]) -> Option<U256> {
    let offset = MAX_BYTES.checked_sub(bytes.len())?;
    let mut padded = [0u8; MAX_BYTES];
    padded[offset..].copy_from_slice(bytes);
    Some(U256::from_be_slice(&padded))
}

/// Write `x` big-endian into `out`.
///
/// Bytes of `x` beyond `out.len()` are dropped; an `out` longer than
/// [`MAX_BYTES`] is zero-padded on the left.
pub fn uint_to_be_bytes(x: &U256, out: &mut [u8]) {
    let bytes = x.to_be_byte_array();
    let (pad, tail) = out.split_at_mut(out.len().saturating_sub(MAX_BYTES));
    pad.fill(0);
    tail.copy_from_slice(&bytes[MAX_BYTES - tail.len()..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn short_input_is_left_padded() {
        assert_eq!(uint_from_be_bytes(&[]), Some(U256::ZERO));
        assert_eq!(
            uint_from_be_bytes(&hex!("0102")),
            Some(U256::from_u64(0x0102))
        );
        assert_eq!(uint_from_be_bytes(&[0xff; 33]), None);
    }

    #[test]
    fn output_length_selects_low_bytes() {
        let x = U256::from_u64(0x0102_0304);

        let mut out = [0xaa; 6];
        uint_to_be_bytes(&x, &mut out);
        assert_eq!(out, hex!("000001020304"));

        let mut out = [0xaa; 2];
        uint_to_be_bytes(&x, &mut out);
        assert_eq!(out, hex!("0304"));

        let mut out = [0xaa; 34];
        uint_to_be_bytes(&x, &mut out);
        assert_eq!(out[..30], [0; 30]);
        assert_eq!(out[30..], hex!("01020304"));
    }
}
