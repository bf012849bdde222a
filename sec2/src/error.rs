//! Error types.

use core::fmt;

/// Errors reported by curve sessions and the operations behind them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The curve name is not in the registry.
    UnsupportedCurve,

    /// The session has not been bound to a curve yet.
    NotInitialized,

    /// The session is already bound to a curve.
    AlreadyInitialized,

    /// The session has been closed.
    HandleDestroyed,

    /// A caller buffer has the wrong size.
    LengthMismatch {
        /// Required length in bytes.
        expected: usize,
        /// Length of the buffer that was supplied.
        actual: usize,
    },

    /// A secret scalar is zero or not below the group order.
    InvalidScalar,

    /// Signing produced `r = 0` or `s = 0`; retry with another ephemeral scalar.
    ZeroSignatureComponent,

    /// A public key does not lie on the curve.
    PointNotOnCurve,

    /// Attempted to invert zero.
    NotInvertible,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedCurve => f.write_str("unsupported curve"),
            Error::NotInitialized => f.write_str("session is not initialized"),
            Error::AlreadyInitialized => f.write_str("session is already initialized"),
            Error::HandleDestroyed => f.write_str("session has been closed"),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "buffer must be {expected} bytes, got {actual}")
            }
            Error::InvalidScalar => f.write_str("scalar out of range"),
            Error::ZeroSignatureComponent => f.write_str("signature component is zero"),
            Error::PointNotOnCurve => f.write_str("point is not on the curve"),
            Error::NotInvertible => f.write_str("zero has no multiplicative inverse"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Error {
        match err {
            primefield::Error::InvalidModulus => Error::UnsupportedCurve,
            primefield::Error::Length { expected, actual } => {
                Error::LengthMismatch { expected, actual }
            }
            primefield::Error::NotInvertible => Error::NotInvertible,
        }
    }
}

impl From<primeorder::Error> for Error {
    fn from(err: primeorder::Error) -> Error {
        match err {
            primeorder::Error::PointNotOnCurve => Error::PointNotOnCurve,
            primeorder::Error::SingularCurve => Error::UnsupportedCurve,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
