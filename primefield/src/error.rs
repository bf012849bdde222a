//! Error types.

use core::fmt;

/// Field arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The modulus is even, smaller than 3, or wider than [`MAX_BITS`](crate::MAX_BITS).
    InvalidModulus,

    /// A byte buffer does not have the encoded length of a field element.
    Length {
        /// Required length in bytes.
        expected: usize,
        /// Length of the buffer that was supplied.
        actual: usize,
    },

    /// Attempted to invert zero.
    NotInvertible,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus => f.write_str("invalid field modulus"),
            Error::Length { expected, actual } => {
                write!(f, "field element encoding must be {expected} bytes, got {actual}")
            }
            Error::NotInvertible => f.write_str("zero has no multiplicative inverse"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
